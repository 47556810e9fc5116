pub mod json;
pub mod md;
pub mod text;

use crate::error::DetectError;
use crate::types::report::{AnalysisReport, BatchReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, DetectError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(DetectError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(report: &BatchReport, format: OutputFormat) -> Result<String, DetectError> {
    match format {
        OutputFormat::Text => Ok(text::to_text_batch(report)),
        OutputFormat::Json => json::to_json_batch(report).map_err(DetectError::Json),
        OutputFormat::Md => Ok(md::to_markdown_batch(report)),
    }
}
