// src/runner.rs
//
// Fetch → transform → emit, once per exporter. Every step that can refuse
// to run (event year, overwrite prompt) does so before the request goes out,
// and the destination is only opened once the rows exist.

use crate::{
    config::options::{Destination, Resource, ScheduleOptions},
    core::{sanitize::is_breakdown_event, TbaClient},
    error::{Result, TbaError},
    file,
    specs::{Match, ScoredMatch, Team},
    transform,
};

/// Which exporter to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Export {
    Schedule(ScheduleOptions),
    Teams,
    Breakdown,
}

impl Export {
    pub fn resource(&self) -> Resource {
        match self {
            Export::Schedule(_) | Export::Breakdown => Resource::Matches,
            Export::Teams => Resource::Teams,
        }
    }
}

/// One invocation of an exporter.
pub struct Job<'a> {
    pub export: Export,
    pub event_key: &'a str,
    pub destination: Destination,
}

/// Summary of what was produced.
#[derive(Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub rows_written: usize,
}

/// Checks that need no network: event year, then the overwrite prompt.
pub fn preflight(job: &Job) -> Result<()> {
    if job.export == Export::Breakdown && !is_breakdown_event(job.event_key) {
        return Err(TbaError::UnsupportedEvent { event_key: job.event_key.to_string() });
    }
    file::check_destination(&job.destination)
}

/// Request and shape the rows for `export`, without writing them.
/// Returns (records received, rows).
pub fn collect(client: &TbaClient, export: Export, event_key: &str) -> Result<(usize, Vec<Vec<String>>)> {
    let resource = export.resource();
    let out = match export {
        Export::Schedule(opts) => {
            let matches: Vec<Match> = client.get_json(event_key, resource)?;
            (matches.len(), transform::schedule_rows(matches, &opts))
        }
        Export::Teams => {
            let teams: Vec<Team> = client.get_json(event_key, resource)?;
            (teams.len(), transform::team_rows(teams))
        }
        Export::Breakdown => {
            let matches: Vec<ScoredMatch> = client.get_json(event_key, resource)?;
            (matches.len(), transform::breakdown_rows(&matches))
        }
    };
    logd!("{:?}: {} records → {} rows", export, out.0, out.1.len());
    Ok(out)
}

/// Top-level runner: preflight, fetch, transform, write.
pub fn run(client: &TbaClient, job: &Job) -> Result<RunSummary> {
    preflight(job)?;
    let (records, rows) = collect(client, job.export, job.event_key)?;
    let rows_written = file::emit(&job.destination, &rows)?;
    Ok(RunSummary { records, rows_written })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_per_export() {
        assert_eq!(Export::Schedule(ScheduleOptions::default()).resource(), Resource::Matches);
        assert_eq!(Export::Breakdown.resource(), Resource::Matches);
        assert_eq!(Export::Teams.resource(), Resource::Teams);
    }

    #[test]
    fn breakdown_refuses_other_seasons_before_any_request() {
        // Port 9 (discard) on loopback: any request would fail as Transport, not UnsupportedEvent.
        let client = TbaClient::with_base("http://127.0.0.1:9", "key").unwrap();
        let job = Job { export: Export::Breakdown, event_key: "2019cala", destination: Destination::Stdout };

        match run(&client, &job) {
            Err(TbaError::UnsupportedEvent { event_key }) => assert_eq!(event_key, "2019cala"),
            other => panic!("expected UnsupportedEvent, got {other:?}"),
        }
    }

    #[test]
    fn other_exports_accept_any_year() {
        let schedule = Job { export: Export::Schedule(ScheduleOptions::default()), event_key: "2019cala", destination: Destination::Stdout };
        assert!(preflight(&schedule).is_ok());

        let teams = Job { export: Export::Teams, event_key: "2019cala", destination: Destination::Stdout };
        assert!(preflight(&teams).is_ok());

        let breakdown = Job { export: Export::Breakdown, event_key: "2022cala", destination: Destination::Stdout };
        assert!(preflight(&breakdown).is_ok());
    }
}
