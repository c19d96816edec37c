// src/bin/breakdown.rs
use clap::Parser;
use tba_csv::{cli, log};

fn main() {
    let _ = color_eyre::install();

    let args = cli::BreakdownCli::parse();
    log::init(args.event.verbose);

    cli::finish(args.run());
}
