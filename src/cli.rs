use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codetect",
    version,
    about = "Estimates how likely source code is AI-generated"
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
    /// Analyze one source file
    Analyze(AnalyzeCommand),
    /// Analyze every allowed file under a directory
    Batch(BatchCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Likelihood at or above which the exit code flags the file
    #[arg(long)]
    pub flag_threshold: Option<f64>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Likelihood at or above which a file counts as flagged
    #[arg(long)]
    pub flag_threshold: Option<f64>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
