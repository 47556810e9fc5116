use crate::error::{DetectError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    #[serde(default)]
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

/// Notebook cell sources are either a list of line strings or one string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Lines(Vec::new())
    }
}

/// Concatenates the sources of all `code` cells, in cell order, joined by
/// newline. List-valued sources are flattened in order; string-valued
/// sources are appended directly.
pub fn extract_code(content: &str) -> Result<String> {
    let notebook: Notebook = serde_json::from_str(content)
        .map_err(|err| DetectError::NotebookParse(err.to_string()))?;

    let mut segments = Vec::new();
    for cell in notebook.cells {
        if cell.cell_type != "code" {
            continue;
        }
        match cell.source {
            CellSource::Lines(lines) => segments.extend(lines),
            CellSource::Text(text) => segments.push(text),
        }
    }

    Ok(segments.join("\n"))
}
