// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://thebluealliance.com/api/v3";
pub const AUTH_HEADER: &str = "X-TBA-Auth-Key";
pub const USER_AGENT: &str = "Schedule script";
pub const TIMEOUT_SECS: u64 = 30;

// Env overrides (read by clap)
pub const ENV_API_KEY: &str = "TBA_AUTH_KEY";
pub const ENV_API_BASE: &str = "TBA_API_BASE";

// Team keys
pub const TEAM_PREFIX_CHARS: [char; 3] = ['f', 'r', 'c'];

// Schedule
pub const QUALIFICATION_LEVEL: &str = "qm";

// Breakdown (2022 Rapid React only)
pub const BREAKDOWN_YEAR: &str = "2022";
pub const ROBOTS_PER_ALLIANCE: usize = 3;
pub const TAXI_YES: &str = "Yes";

// Export
pub const DELIM: char = ',';
