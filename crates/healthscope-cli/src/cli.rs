//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "healthscope",
    version,
    about = "HealthScope BD - symptom checker and disease hotspots for Bangladesh",
    long_about = "Match symptoms against a table of common conditions, browse disease \
                  hotspot layers, and file community case reports.\n\n\
                  Results are heuristics, not a diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Session config file (JSON).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Pause before each analysis, in milliseconds (overrides the config file).
    #[arg(long = "delay-ms", value_name = "MS", global = true)]
    pub delay_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List selectable symptoms.
    Symptoms(SymptomsArgs),

    /// Rank conditions for a set of symptom ids.
    Analyze(AnalyzeArgs),

    /// List the districts of a division.
    Districts(DistrictsArgs),

    /// Show hotspot layers and their statistics.
    Hotspots(HotspotsArgs),

    /// Validate and submit a community case report.
    Report(ReportArgs),

    /// Print health tips.
    Tips,
}

#[derive(Args)]
pub struct SymptomsArgs {
    /// Filter by label or id; falls back to fuzzy matching.
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Symptom ids in selection order (e.g., fever cough).
    #[arg(value_name = "SYMPTOM", required = true)]
    pub symptoms: Vec<String>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DistrictsArgs {
    /// Division key (e.g., dhaka).
    #[arg(value_name = "DIVISION")]
    pub division: String,
}

#[derive(Args)]
pub struct HotspotsArgs {
    /// Layers to show instead of the aggregate layer.
    #[arg(long = "show", value_name = "KEY")]
    pub show: Vec<String>,

    /// Restyle layers with the red gradient.
    #[arg(long)]
    pub red: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub disease: Option<String>,

    /// mild, moderate or severe.
    #[arg(long)]
    pub severity: Option<String>,

    #[arg(long)]
    pub division: Option<String>,

    /// District form value (e.g., cox's_bazar).
    #[arg(long)]
    pub district: Option<String>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
