//! `shellrc` binary entry point.
use std::process::ExitCode;

use clap::Parser;

use shellrc_cli::{cli, commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    match commands::generate::run(&args, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::report_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
