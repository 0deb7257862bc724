//! HealthScope BD CLI.

use std::io::{self, IsTerminal};

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(error = %error, "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Command::Symptoms(args) => commands::run_symptoms(args)?,
        Command::Analyze(args) => {
            let config = commands::load_session_config(cli.config.as_deref(), cli.delay_ms)?;
            commands::run_analyze(args, config)?
        }
        Command::Districts(args) => commands::run_districts(args)?,
        Command::Hotspots(args) => commands::run_hotspots(args)?,
        Command::Report(args) => {
            let accepted = commands::run_report(args)?;
            return Ok(if accepted { 0 } else { 2 });
        }
        Command::Tips => commands::run_tips()?,
    }
    Ok(0)
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    LogConfig::from_flags(cli.verbose, cli.quiet)
        .with_format(format)
        .with_ansi(io::stderr().is_terminal())
}
