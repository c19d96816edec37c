// src/bin/teams.rs
use clap::Parser;
use tba_csv::{cli, log};

fn main() {
    let _ = color_eyre::install();

    let args = cli::TeamsCli::parse();
    log::init(args.event.verbose);

    cli::finish(args.run());
}
