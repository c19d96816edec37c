// src/transform/teams.rs
use crate::specs::Team;

/// `team_number,nickname`, ascending by number.
pub fn team_rows(mut teams: Vec<Team>) -> Vec<Vec<String>> {
    teams.sort_by_key(|t| t.team_number);
    teams.iter().map(|t| row![t.team_number, t.nickname()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(number: u32, nickname: &str) -> Team {
        Team { team_number: number, nickname: Some(s!(nickname)) }
    }

    #[test]
    fn sorted_ascending_by_number() {
        let rows = team_rows(vec![team(254, "The Cheesy Poofs"), team(1, "Team A")]);
        assert_eq!(rows, [row!["1", "Team A"], row!["254", "The Cheesy Poofs"]]);
    }

    #[test]
    fn numeric_not_lexical_order() {
        let rows = team_rows(vec![team(1000, "B"), team(99, "A"), team(971, "Spartan Robotics")]);
        let numbers: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(numbers, ["99", "971", "1000"]);
    }
}
