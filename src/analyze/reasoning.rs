use crate::types::features::CodeFeatures;

/// Renders the reasoning text for a feature vector and its probability.
///
/// Always four sections joined by blank lines: code structure, patterns,
/// documentation, and a closing conclusion. Deterministic for a given
/// feature vector, and never empty.
pub fn render(features: &CodeFeatures, probability: f64) -> String {
    let mut sections = Vec::new();

    sections.push(format!(
        "Code Structure Analysis:\n\
         - Average line length: {:.1} characters\n\
         - Blank line ratio: {}\n\
         - Maximum indentation depth: {} levels\n\
         - Line complexity: {:.2} control structures per line",
        features.avg_line_length,
        percent(features.blank_line_ratio),
        features.max_indent_depth,
        features.line_complexity
    ));

    sections.push(format!(
        "Pattern Analysis:\n\
         - Indentation consistency: {}\n\
         - Naming convention consistency: {}\n\
         - Name complexity score: {:.2}",
        if features.indent_consistency < 1.0 {
            "High"
        } else {
            "Variable"
        },
        percent(features.naming_consistency),
        features.naming_complexity
    ));

    let doc_status = documentation_status(features);
    sections.push(format!(
        "Documentation Analysis:\n\
         - Documentation level: {} ({})\n\
         - Comment ratio: {}\n\
         - Comment frequency: {:.2} comments per line",
        doc_status,
        documentation_details(features),
        percent(features.comment_ratio),
        features.comment_frequency
    ));

    sections.push(format!(
        "Based on the comprehensive analysis of code patterns, this code exhibits \
         {probability:.1}% likelihood of being AI-generated. \
         This assessment is derived from the combination of {}structured code patterns, \
         {} naming conventions, and {} documentation practices.",
        if probability > 70.0 {
            "highly "
        } else if probability > 40.0 {
            "moderately "
        } else {
            "loosely "
        },
        if features.naming_consistency > 0.8 {
            "systematic"
        } else {
            "natural"
        },
        doc_status.to_lowercase()
    ));

    sections.join("\n\n")
}

/// "Comprehensive" at three or more documentation signals, "Partial" at one
/// or two, "Minimal" at none.
pub fn documentation_status(features: &CodeFeatures) -> &'static str {
    match features.doc_signal_count() {
        count if count >= 3 => "Comprehensive",
        0 => "Minimal",
        _ => "Partial",
    }
}

fn documentation_details(features: &CodeFeatures) -> String {
    let mut found = Vec::new();
    if features.has_docstrings {
        found.push("docstrings");
    }
    if features.has_type_hints {
        found.push("type hints");
    }
    if features.has_parameter_docs {
        found.push("parameter documentation");
    }
    if features.has_return_docs {
        found.push("return value documentation");
    }

    if found.is_empty() {
        "no formal documentation found".to_string()
    } else {
        format!("including {}", found.join(", "))
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
