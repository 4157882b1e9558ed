use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unarc_core::run_archive;

use crate::cli::Cli;
use crate::exit_codes::Exit;
use crate::report::ConsoleReporter;

mod cli;
mod exit_codes;
mod report;

const LOG_ENV: &str = "UNARC_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match execute(&cli) {
        Ok(exit) => exit.into(),
        Err(err) => {
            eprintln!("unarc: error: {err:#}");
            Exit::FatalError.into()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: &Cli) -> anyhow::Result<Exit> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let kind = match cli.resolve_type() {
        Ok(kind) => kind,
        Err(err) => {
            eprintln!("unarc: error: {err}");
            return Ok(err.exit());
        }
    };

    let ctx = cli.context();
    let mut reporter = ConsoleReporter::new(std::io::stdout().lock(), cli.report_style());

    let summary = run_archive(&cli.archive, kind, &ctx, &mut reporter)
        .context("An error occurred while walking the archive.");
    // Lines already decided are flushed even when the walk failed.
    let summary = match summary {
        Ok(summary) => summary,
        Err(err) => {
            reporter.finish().ok();
            return Err(err);
        }
    };

    reporter.summary(&summary);
    reporter.finish().context("failed to write report")?;
    Ok(Exit::Success)
}
