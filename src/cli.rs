// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::consts::{API_BASE, ENV_API_BASE, ENV_API_KEY};
use crate::config::options::{Destination, ScheduleOptions};
use crate::core::TbaClient;
use crate::error::{Result, TbaError};
use crate::runner::{self, Export, Job, RunSummary};

/// Flags every exporter takes.
#[derive(Args, Debug, Clone)]
pub struct EventArgs {
    /// TBA Event Key to use
    #[arg(short = 'e', long = "event", value_name = "EVENT_KEY")]
    pub event_key: String,

    /// TBA Read API key to use when making the request
    #[arg(short = 'k', long = "apikey", value_name = "TBA_API_KEY", env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Write rows to this file instead of standard output
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log request details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// API root
    #[arg(long = "base-url", value_name = "URL", env = ENV_API_BASE, default_value = API_BASE, hide = true)]
    pub base_url: String,
}

impl EventArgs {
    pub fn destination(&self) -> Destination {
        Destination::from_arg(self.output.as_deref())
    }

    fn client(&self) -> Result<TbaClient> {
        TbaClient::with_base(&self.base_url, &self.api_key)
    }

    fn run(&self, export: Export) -> Result<RunSummary> {
        let job = Job {
            export,
            event_key: &self.event_key,
            destination: self.destination(),
        };
        let client = self.client()?;
        runner::run(&client, &job)
    }
}

#[derive(Parser, Debug)]
#[command(name = "tba-schedule", version)]
#[command(about = "Return a csv match schedule for a given event key")]
pub struct ScheduleCli {
    #[command(flatten)]
    pub event: EventArgs,

    /// Format csv with blue alliance first
    #[arg(short = 'b', long = "bluefirst")]
    pub blue_first: bool,

    /// Keep the "frc" prefix on team numbers
    #[arg(short = 'p', long = "keepprefix")]
    pub keep_prefix: bool,

    /// Don't print match numbers before team numbers
    #[arg(short = 'n', long = "hidenumbers")]
    pub hide_numbers: bool,
}

impl ScheduleCli {
    pub fn options(&self) -> ScheduleOptions {
        ScheduleOptions {
            blue_first: self.blue_first,
            keep_prefix: self.keep_prefix,
            hide_numbers: self.hide_numbers,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.event.run(Export::Schedule(self.options()))
    }
}

#[derive(Parser, Debug)]
#[command(name = "tba-teams", version)]
#[command(about = "Return a csv team list for a given event key")]
pub struct TeamsCli {
    #[command(flatten)]
    pub event: EventArgs,
}

impl TeamsCli {
    pub fn run(&self) -> Result<RunSummary> {
        self.event.run(Export::Teams)
    }
}

#[derive(Parser, Debug)]
#[command(name = "tba-breakdown", version)]
#[command(about = "Return a csv match breakdown for a given 2022 event")]
pub struct BreakdownCli {
    #[command(flatten)]
    pub event: EventArgs,
}

impl BreakdownCli {
    pub fn run(&self) -> Result<RunSummary> {
        self.event.run(Export::Breakdown)
    }
}

/// Print the failure (if any) and leave with its exit code.
pub fn finish(result: Result<RunSummary>) {
    if let Err(e) = result {
        logd!("{e:?}");
        match e {
            TbaError::Http { .. } => eprintln!("Failed to get event information! {e}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(e.exit_code());
    }
}
