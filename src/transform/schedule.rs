// src/transform/schedule.rs
use crate::config::consts::QUALIFICATION_LEVEL;
use crate::config::options::ScheduleOptions;
use crate::core::sanitize::team_field;
use crate::specs::Match;

/// Qualification schedule, one row per `qm` match in match-number order:
/// `[number,] red..., blue...` (or blue before red with `blue_first`).
pub fn schedule_rows(mut matches: Vec<Match>, opts: &ScheduleOptions) -> Vec<Vec<String>> {
    // Stable sort first, then drop practice/playoff matches
    matches.sort_by_key(|m| m.match_number);

    matches
        .iter()
        .filter(|m| m.comp_level == QUALIFICATION_LEVEL)
        .map(|m| schedule_row(m, opts))
        .collect()
}

fn schedule_row(m: &Match, opts: &ScheduleOptions) -> Vec<String> {
    let red = m.alliances.red.team_keys.iter().map(|k| team_field(k, opts.keep_prefix));
    let blue = m.alliances.blue.team_keys.iter().map(|k| team_field(k, opts.keep_prefix));

    let mut row = Vec::with_capacity(1 + m.alliances.red.team_keys.len() + m.alliances.blue.team_keys.len());
    if !opts.hide_numbers {
        row.push(m.match_number.to_string());
    }
    if opts.blue_first {
        row.extend(blue);
        row.extend(red);
    } else {
        row.extend(red);
        row.extend(blue);
    }
    row
}
