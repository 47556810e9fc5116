mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod report;
mod types;

use crate::error::DetectError;
use crate::types::report::{AnalysisReport, BatchReport};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEGRADED: i32 = 1;
    pub const FLAGGED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, DetectError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let root = std::env::current_dir()?;
            let loaded = config::load_config(&root)?;

            let source = input::read_source(&cmd.file, loaded.as_ref())?;
            let analysis = analyze::analyze(&source.text);
            let analysis_report = AnalysisReport::new(&source.name, &source.text, analysis);

            let rendered = report::render(&analysis_report, output_format(&cmd.format))?;
            println!("{rendered}");

            let threshold = cmd
                .flag_threshold
                .unwrap_or_else(|| types::config::flag_threshold(loaded.as_ref()));
            if analysis_report.probability >= threshold {
                Ok(exit_code::FLAGGED)
            } else if analysis_report.degraded {
                Ok(exit_code::DEGRADED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.path.exists() {
                return Err(DetectError::PathNotFound(cmd.path.display().to_string()));
            }
            let loaded = config::load_config(&cmd.path)?;
            let allowed = types::config::allowed_extensions(loaded.as_ref());
            let threshold = cmd
                .flag_threshold
                .unwrap_or_else(|| types::config::flag_threshold(loaded.as_ref()));

            let mut reports = Vec::new();
            let mut any_degraded = false;
            for file in input::filesystem::list_source_files(&cmd.path, &allowed) {
                match input::read_source(&file, loaded.as_ref()) {
                    Ok(source) => {
                        let analysis = analyze::analyze(&source.text);
                        any_degraded |= analysis.degraded;
                        reports.push(AnalysisReport::new(&source.name, &source.text, analysis));
                    }
                    // Unreadable files do not abort the sweep.
                    Err(err) => warn!("skipping {}: {err}", file.display()),
                }
            }

            let batch = BatchReport::new(&cmd.path.display().to_string(), reports, threshold);
            let rendered = report::render_batch(&batch, output_format(&cmd.format))?;
            println!("{rendered}");

            if batch.flagged_count > 0 {
                Ok(exit_code::FLAGGED)
            } else if any_degraded {
                Ok(exit_code::DEGRADED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
