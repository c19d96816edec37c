// src/transform/breakdown.rs
//
// 2022 Rapid React per-robot breakdown, grouped into one table per driver
// station (RED1..RED3, BLUE1..BLUE3). Rows accumulate per station first and
// are emitted station by station, each table led by its own header row.

use crate::config::consts::{ROBOTS_PER_ALLIANCE, TAXI_YES};
use crate::core::sanitize::strip_team_prefix;
use crate::specs::{AllianceColor, RapidReactAlliance, ScoredMatch};

const TAXI: &str = "Taxi";
const NO_TAXI: &str = "Did not move";

const HEADER_TAIL: [&str; 11] = [
    "AUT_TAXI", "TOP_CL", "CV_ATP", "CV_ACT", "CV_TCT", "CV_QT",
    "CV_FOUL", "CV_TFOUL", "CV_RP", "CV_FP", "CV_SCORE",
];

/// Driver station: alliance color + 1-indexed robot position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Station {
    pub color: AllianceColor,
    pub robot: usize,
}

impl Station {
    /// Fixed output order.
    pub const ORDER: [Station; 6] = [
        Station { color: AllianceColor::Red, robot: 1 },
        Station { color: AllianceColor::Red, robot: 2 },
        Station { color: AllianceColor::Red, robot: 3 },
        Station { color: AllianceColor::Blue, robot: 1 },
        Station { color: AllianceColor::Blue, robot: 2 },
        Station { color: AllianceColor::Blue, robot: 3 },
    ];

    /// `RED1`, `BLUE3`, ...
    pub fn key(&self) -> String {
        format!("{}{}", self.color.label().to_ascii_uppercase(), self.robot)
    }

    fn index(&self) -> usize {
        let base = match self.color {
            AllianceColor::Red => 0,
            AllianceColor::Blue => ROBOTS_PER_ALLIANCE,
        };
        base + self.robot - 1
    }

    pub fn header(&self) -> Vec<String> {
        let mut h = row!["Matches", format!("{} {}", self.color.label(), self.robot)];
        h.extend(HEADER_TAIL.iter().map(|s| s!(*s)));
        h
    }
}

/// One robot in one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotLine {
    pub match_number: u32,
    pub team: String,
    pub taxi: bool,
    pub climb: String,
    pub auto_cargo: u32,
    pub teleop_cargo: u32,
    pub quintet: bool,
    pub fouls: u32,
    pub tech_fouls: u32,
    pub ranking_points: u32,
    pub foul_points: u32,
    pub score: i32,
}

impl RobotLine {
    fn new(match_number: u32, team_key: &str, robot: usize, alliance: &RapidReactAlliance, score: i32) -> Self {
        Self {
            match_number,
            team: s!(strip_team_prefix(team_key)),
            taxi: alliance.taxi(robot) == Some(TAXI_YES),
            climb: s!(alliance.endgame(robot).unwrap_or("None")),
            auto_cargo: alliance.auto_cargo_total,
            teleop_cargo: alliance.teleop_cargo_total,
            quintet: alliance.quintet_achieved,
            fouls: alliance.foul_count,
            tech_fouls: alliance.tech_foul_count,
            ranking_points: alliance.rp,
            foul_points: alliance.foul_points,
            score,
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        row![
            self.match_number,
            self.team,
            if self.taxi { TAXI } else { NO_TAXI },
            self.climb,
            self.auto_cargo,
            self.teleop_cargo,
            // Python-style booleans, as the sheets built on this expect
            if self.quintet { "True" } else { "False" },
            self.fouls,
            self.tech_fouls,
            self.ranking_points,
            self.foul_points,
            self.score,
        ]
    }
}

/// Accumulate-then-emit tables, one per station.
#[derive(Debug, Default)]
pub struct Breakdown {
    tables: [Vec<RobotLine>; 6],
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every robot of a played match; unplayed matches are skipped.
    pub fn push_match(&mut self, m: &ScoredMatch) {
        let Some(breakdown) = &m.score_breakdown else {
            logd!("Breakdown: match {} has no score breakdown yet, skipping", m.match_number);
            return;
        };

        for color in AllianceColor::ALL {
            let alliance = m.alliances.side(color);
            let scored = breakdown.side(color);

            if alliance.team_keys.len() > ROBOTS_PER_ALLIANCE {
                logd!(
                    "Breakdown: match {} {} lists {} teams, keeping the first {}",
                    m.match_number, color, alliance.team_keys.len(), ROBOTS_PER_ALLIANCE
                );
            }

            for (i, key) in alliance.team_keys.iter().take(ROBOTS_PER_ALLIANCE).enumerate() {
                let station = Station { color, robot: i + 1 };
                let line = RobotLine::new(m.match_number, key, station.robot, scored, alliance.score);
                self.tables[station.index()].push(line);
            }
        }
    }

    pub fn lines(&self, station: Station) -> &[RobotLine] {
        &self.tables[station.index()]
    }

    /// All tables in station order, each led by its header.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(Station::ORDER.len() + self.tables.iter().map(Vec::len).sum::<usize>());
        for station in Station::ORDER {
            out.push(station.header());
            out.extend(self.tables[station.index()].iter().map(RobotLine::to_row));
        }
        out
    }
}

/// Breakdown rows for a full match list, in response order within each table.
pub fn breakdown_rows(matches: &[ScoredMatch]) -> Vec<Vec<String>> {
    let mut b = Breakdown::new();
    for m in matches {
        b.push_match(m);
    }
    b.into_rows()
}
