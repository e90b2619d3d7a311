use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "machine-health",
    version,
    about = "Machine health scoring from sensor readings"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Part(PartCommand),
    Rules(RulesCommand),
}

/// Score a full reading set and print a health report.
#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file holding a machine type and its part readings
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// TOML file with scoring rule overrides
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

/// Score a single part reading.
#[derive(Args)]
pub struct PartCommand {
    /// Machine type name, e.g. weldingRobot
    pub machine: String,

    /// Part name, e.g. errorRate
    pub part: String,

    /// Raw sensor reading
    pub value: f64,

    /// TOML file with scoring rule overrides
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

/// List registered parts and their scoring rules.
#[derive(Args)]
pub struct RulesCommand {
    /// Restrict the listing to one machine type
    pub machine: Option<String>,

    /// TOML file with scoring rule overrides
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
