// src/specs/teams.rs
use serde::Deserialize;

/// One entry of `/event/{key}/teams`.
#[derive(Clone, Debug, Deserialize)]
pub struct Team {
    pub team_number: u32,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Team {
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or("")
    }
}
