// src/specs/matches.rs
use std::fmt;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllianceColor {
    Red,
    Blue,
}

impl AllianceColor {
    pub const ALL: [AllianceColor; 2] = [AllianceColor::Red, AllianceColor::Blue];

    /// "Red" / "Blue"
    pub fn label(&self) -> &'static str {
        match self {
            AllianceColor::Red => "Red",
            AllianceColor::Blue => "Blue",
        }
    }
}

impl fmt::Display for AllianceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Alliance {
    pub team_keys: Vec<String>,
    #[serde(default)]
    pub score: i32, // -1 until played
}

#[derive(Clone, Debug, Deserialize)]
pub struct Alliances {
    pub red: Alliance,
    pub blue: Alliance,
}

impl Alliances {
    pub fn side(&self, color: AllianceColor) -> &Alliance {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }
}

/// One entry of `/event/{key}/matches`, without the season-specific breakdown.
#[derive(Clone, Debug, Deserialize)]
pub struct Match {
    pub match_number: u32,
    pub comp_level: String,
    pub alliances: Alliances,
}

/// Same entry, decoded together with its 2022 score breakdown.
/// `score_breakdown` is null for matches that have not been played.
#[derive(Clone, Debug, Deserialize)]
pub struct ScoredMatch {
    pub match_number: u32,
    pub alliances: Alliances,
    #[serde(default)]
    pub score_breakdown: Option<RapidReactBreakdown>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RapidReactBreakdown {
    pub red: RapidReactAlliance,
    pub blue: RapidReactAlliance,
}

impl RapidReactBreakdown {
    pub fn side(&self, color: AllianceColor) -> &RapidReactAlliance {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }
}

/// Per-alliance 2022 breakdown. Robot fields are 1-indexed on the wire.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RapidReactAlliance {
    pub taxi_robot1: String,
    pub taxi_robot2: String,
    pub taxi_robot3: String,
    pub endgame_robot1: String,
    pub endgame_robot2: String,
    pub endgame_robot3: String,
    pub auto_cargo_total: u32,
    pub teleop_cargo_total: u32,
    pub quintet_achieved: bool,
    pub foul_count: u32,
    pub tech_foul_count: u32,
    pub rp: u32,
    pub foul_points: u32,
}

impl RapidReactAlliance {
    /// `taxiRobot{robot}`; `None` outside 1..=3.
    pub fn taxi(&self, robot: usize) -> Option<&str> {
        match robot {
            1 => Some(&self.taxi_robot1),
            2 => Some(&self.taxi_robot2),
            3 => Some(&self.taxi_robot3),
            _ => None,
        }
    }

    /// `endgameRobot{robot}`; `None` outside 1..=3.
    pub fn endgame(&self, robot: usize) -> Option<&str> {
        match robot {
            1 => Some(&self.endgame_robot1),
            2 => Some(&self.endgame_robot2),
            3 => Some(&self.endgame_robot3),
            _ => None,
        }
    }
}
