pub mod filesystem;
pub mod notebook;

use crate::error::{DetectError, Result};
use crate::types::config::{self, DetectConfig};
use std::path::Path;
use tracing::debug;

/// One file's decoded source text, ready for analysis.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

pub fn allowed_file(path: &Path, allowed: &[String]) -> bool {
    extension_of(path)
        .map(|ext| allowed.iter().any(|entry| *entry == ext))
        .unwrap_or(false)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Reads and validates one source file: extension gate, UTF-8 decode, empty
/// check, and notebook code-cell extraction for `.ipynb` input. The analysis
/// core only ever sees text that passed all of these.
pub fn read_source(path: &Path, config: Option<&DetectConfig>) -> Result<SourceFile> {
    let display_name = path.display().to_string();
    if !path.exists() {
        return Err(DetectError::PathNotFound(display_name));
    }
    if !path.is_file() {
        return Err(DetectError::NotAFile(display_name));
    }

    let allowed = config::allowed_extensions(config);
    if !allowed_file(path, &allowed) {
        return Err(DetectError::DisallowedExtension(display_name));
    }

    let bytes = std::fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|_| DetectError::Decode(display_name.clone()))?;
    if content.is_empty() {
        return Err(DetectError::EmptyFile(display_name));
    }

    let text = if extension_of(path).as_deref() == Some("ipynb") {
        debug!("extracting code cells from notebook {}", display_name);
        let code = notebook::extract_code(&content)?;
        if code.trim().is_empty() {
            return Err(DetectError::NoCodeCells(display_name));
        }
        code
    } else {
        content
    };

    Ok(SourceFile {
        name: display_name,
        text,
    })
}
