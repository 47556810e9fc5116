use crate::types::features::CodeFeatures;

/// Fixed per-feature contribution table.
///
/// The values are constants of the scoring model, not tunables: each awarded
/// predicate contributes its full weight, with no partial credit.
/// `avg_name_length` carries a weight but no awarding predicate.
#[derive(Debug, Clone)]
pub struct Weights {
    pub avg_line_length: f64,
    pub blank_line_ratio: f64,
    pub indent_consistency: f64,
    pub max_indent_depth: f64,
    pub avg_name_length: f64,
    pub naming_consistency: f64,
    pub naming_complexity: f64,
    pub comment_ratio: f64,
    pub comment_frequency: f64,
    pub has_docstrings: f64,
    pub has_type_hints: f64,
    pub has_parameter_docs: f64,
    pub has_return_docs: f64,
    pub line_complexity: f64,
    pub nested_depth: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            avg_line_length: 0.10,
            blank_line_ratio: 0.05,
            indent_consistency: 0.15,
            max_indent_depth: 0.05,
            avg_name_length: 0.10,
            naming_consistency: 0.15,
            naming_complexity: 0.05,
            comment_ratio: 0.10,
            comment_frequency: 0.05,
            has_docstrings: 0.05,
            has_type_hints: 0.05,
            has_parameter_docs: 0.05,
            has_return_docs: 0.05,
            line_complexity: 0.10,
            nested_depth: 0.05,
        }
    }
}

/// Probability in [0, 100] that the measured code is AI-generated.
///
/// Each predicate encodes an empirical prior about generated code. The
/// result is an explainable rule score, not a calibrated classifier.
pub fn probability(features: &CodeFeatures, weights: &Weights) -> f64 {
    let mut awarded = 0.0;

    if (30.0..=80.0).contains(&features.avg_line_length) {
        awarded += weights.avg_line_length;
    }
    if (0.1..=0.3).contains(&features.blank_line_ratio) {
        awarded += weights.blank_line_ratio;
    }
    if features.indent_consistency < 1.0 {
        awarded += weights.indent_consistency;
    }
    if features.max_indent_depth >= 3 {
        awarded += weights.max_indent_depth;
    }
    if features.naming_consistency > 0.8 {
        awarded += weights.naming_consistency;
    }
    if features.naming_complexity > 0.6 {
        awarded += weights.naming_complexity;
    }
    if features.comment_ratio > 0.2 {
        awarded += weights.comment_ratio;
    }
    if (0.2..=0.5).contains(&features.comment_frequency) {
        awarded += weights.comment_frequency;
    }
    if features.has_docstrings {
        awarded += weights.has_docstrings;
    }
    if features.has_type_hints {
        awarded += weights.has_type_hints;
    }
    if features.has_parameter_docs {
        awarded += weights.has_parameter_docs;
    }
    if features.has_return_docs {
        awarded += weights.has_return_docs;
    }
    if features.line_complexity > 0.3 {
        awarded += weights.line_complexity;
    }
    if features.nested_depth >= 3 {
        awarded += weights.nested_depth;
    }

    (awarded * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_features_score_the_indent_weight_only() {
        let score = probability(&CodeFeatures::default(), &Weights::default());
        assert!((score - 15.0).abs() < 1e-9);
    }

    #[test]
    fn probability_is_clamped_to_hundred() {
        let features = CodeFeatures {
            avg_line_length: 60.0,
            blank_line_ratio: 0.2,
            indent_consistency: 0.0,
            max_indent_depth: 8,
            avg_name_length: 12.0,
            naming_consistency: 0.95,
            naming_complexity: 0.7,
            comment_ratio: 0.3,
            comment_frequency: 0.3,
            has_docstrings: true,
            has_type_hints: true,
            has_parameter_docs: true,
            has_return_docs: true,
            line_complexity: 0.5,
            nested_depth: 4,
        };
        let score = probability(&features, &Weights::default());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn range_predicates_include_their_bounds() {
        let low = CodeFeatures {
            avg_line_length: 30.0,
            blank_line_ratio: 0.1,
            comment_frequency: 0.2,
            ..CodeFeatures::default()
        };
        let high = CodeFeatures {
            avg_line_length: 80.0,
            blank_line_ratio: 0.3,
            comment_frequency: 0.5,
            ..CodeFeatures::default()
        };
        let base = probability(&CodeFeatures::default(), &Weights::default());
        let expected = base + (0.10 + 0.05 + 0.05) * 100.0;
        assert!((probability(&low, &Weights::default()) - expected).abs() < 1e-9);
        assert!((probability(&high, &Weights::default()) - expected).abs() < 1e-9);
    }

    #[test]
    fn documentation_flags_never_decrease_the_score() {
        let base = CodeFeatures {
            avg_line_length: 50.0,
            naming_consistency: 0.9,
            ..CodeFeatures::default()
        };
        let base_score = probability(&base, &Weights::default());

        for flag in 0..4 {
            let mut flipped = base.clone();
            match flag {
                0 => flipped.has_docstrings = true,
                1 => flipped.has_type_hints = true,
                2 => flipped.has_parameter_docs = true,
                _ => flipped.has_return_docs = true,
            }
            assert!(probability(&flipped, &Weights::default()) >= base_score);
        }
    }

    #[test]
    fn average_name_length_alone_awards_nothing() {
        let features = CodeFeatures {
            avg_name_length: 12.0,
            indent_consistency: 2.0,
            ..CodeFeatures::default()
        };
        let score = probability(&features, &Weights::default());
        assert_eq!(score, 0.0);
    }
}
