use serde::Serialize;

/// Lexical measurements extracted from one block of source text.
///
/// The feature set is closed: every analysis produces all fifteen fields,
/// and `Default` is the all-zero/false vector used for empty input and for
/// the degraded fallback result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodeFeatures {
    pub avg_line_length: f64,
    pub blank_line_ratio: f64,
    pub indent_consistency: f64,
    pub max_indent_depth: usize,
    pub avg_name_length: f64,
    pub naming_consistency: f64,
    pub naming_complexity: f64,
    pub comment_ratio: f64,
    pub comment_frequency: f64,
    pub has_docstrings: bool,
    pub has_type_hints: bool,
    pub has_parameter_docs: bool,
    pub has_return_docs: bool,
    pub line_complexity: f64,
    pub nested_depth: usize,
}

impl CodeFeatures {
    /// Number of documentation signals present, out of four.
    pub fn doc_signal_count(&self) -> usize {
        [
            self.has_docstrings,
            self.has_type_hints,
            self.has_parameter_docs,
            self.has_return_docs,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}
