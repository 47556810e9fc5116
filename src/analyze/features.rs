use crate::types::features::CodeFeatures;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[a-zA-Z_]\w*\b").expect("valid regex"))
}

fn camel_case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]+([A-Z][a-z]*)*$").expect("valid regex"))
}

fn pascal_case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z][a-z]+([A-Z][a-z]*)*$").expect("valid regex"))
}

fn snake_case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z_]+$").expect("valid regex"))
}

fn line_comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#[^\n]*").expect("valid regex"))
}

fn block_comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""""[\s\S]*?"""|'''[\s\S]*?'''"#).expect("valid regex"))
}

fn type_hint_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r":\s*[A-Za-z_][A-Za-z0-9_]*(\[[^\]]*\])?").expect("valid regex")
    })
}

fn control_flow_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"if|elif|else|for|while|try|except|with").expect("valid regex"))
}

const PARAMETER_DOC_MARKERS: &[&str] = &["@param", ":param", "Args:"];
const RETURN_DOC_MARKERS: &[&str] = &["@return", ":return", "Returns:"];

/// Extracts the fixed lexical feature set from raw source text.
///
/// Total over all inputs. Empty text yields the all-zero vector; every
/// ratio substitutes a denominator of 1 when the natural one is 0.
pub fn extract(code: &str) -> CodeFeatures {
    if code.is_empty() {
        return CodeFeatures::default();
    }

    // A trailing newline contributes a final blank line, as in split('\n').
    let lines: Vec<&str> = code.split('\n').collect();
    let line_count = lines.len().max(1) as f64;

    let non_blank: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let blank_count = lines.len() - non_blank.len();

    let avg_line_length = mean(
        &non_blank
            .iter()
            .map(|line| line.trim().chars().count() as f64)
            .collect::<Vec<_>>(),
    );
    let blank_line_ratio = blank_count as f64 / line_count;

    let indents: Vec<usize> = non_blank.iter().map(|line| leading_columns(line)).collect();
    let indent_columns: Vec<f64> = indents.iter().map(|columns| *columns as f64).collect();
    let indent_consistency = population_std(&indent_columns);
    let max_indent_depth = indents.iter().copied().max().unwrap_or(0);

    let identifiers: Vec<&str> = identifier_pattern()
        .find_iter(code)
        .map(|found| found.as_str())
        .collect();
    let (avg_name_length, naming_consistency, naming_complexity) = naming_features(&identifiers);

    let line_comments: Vec<&str> = line_comment_pattern()
        .find_iter(code)
        .map(|found| found.as_str())
        .collect();
    let block_comments: Vec<&str> = block_comment_pattern()
        .find_iter(code)
        .map(|found| found.as_str())
        .collect();
    let comment_chars: usize = line_comments
        .iter()
        .chain(block_comments.iter())
        .map(|span| span.chars().count())
        .sum();
    let source_chars = code.chars().count().max(1) as f64;
    let comment_ratio = comment_chars as f64 / source_chars;
    let comment_frequency = (line_comments.len() + block_comments.len()) as f64 / line_count;

    let has_docstrings = !block_comments.is_empty();
    let has_type_hints = type_hint_pattern().is_match(code);
    let has_parameter_docs = PARAMETER_DOC_MARKERS.iter().any(|mark| code.contains(mark));
    let has_return_docs = RETURN_DOC_MARKERS.iter().any(|mark| code.contains(mark));

    let line_complexity = control_flow_pattern().find_iter(code).count() as f64 / line_count;
    let nested_depth = lines
        .iter()
        .map(|line| leading_indent_units(line))
        .max()
        .unwrap_or(0);

    debug!(
        lines = lines.len(),
        identifiers = identifiers.len(),
        comments = line_comments.len() + block_comments.len(),
        "feature extraction complete"
    );

    CodeFeatures {
        avg_line_length,
        blank_line_ratio,
        indent_consistency,
        max_indent_depth,
        avg_name_length,
        naming_consistency,
        naming_complexity,
        comment_ratio,
        comment_frequency,
        has_docstrings,
        has_type_hints,
        has_parameter_docs,
        has_return_docs,
        line_complexity,
        nested_depth,
    }
}

fn naming_features(identifiers: &[&str]) -> (f64, f64, f64) {
    if identifiers.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let total = identifiers.len() as f64;

    let avg_name_length = identifiers
        .iter()
        .map(|name| name.chars().count() as f64)
        .sum::<f64>()
        / total;

    let camel_case = identifiers
        .iter()
        .filter(|name| camel_case_pattern().is_match(name))
        .count();
    let pascal_case = identifiers
        .iter()
        .filter(|name| pascal_case_pattern().is_match(name))
        .count();
    let snake_case = identifiers
        .iter()
        .filter(|name| snake_case_pattern().is_match(name))
        .count();
    let dominant = camel_case.max(pascal_case).max(snake_case) as f64;

    let distinct_lengths: HashSet<usize> = identifiers
        .iter()
        .map(|name| name.chars().count())
        .collect();

    (
        avg_name_length,
        dominant / total,
        distinct_lengths.len() as f64 / total,
    )
}

fn leading_columns(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Whole 4-space units of leading indentation, a structural nesting proxy.
fn leading_indent_units(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count() / 4
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
