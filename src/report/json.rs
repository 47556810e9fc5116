use crate::types::report::{AnalysisReport, BatchReport};

pub fn to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn to_json_batch(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::features::CodeFeatures;
    use crate::types::report::Analysis;

    #[test]
    fn json_report_embeds_probability_and_features() {
        let report = AnalysisReport::new(
            "lib.py",
            "print(1)\n",
            Analysis {
                probability: 25.0,
                reasoning: "reasoning".to_string(),
                features: CodeFeatures::default(),
                degraded: false,
            },
        );

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"probability\": 25.0"));
        assert!(rendered.contains("\"avg_line_length\""));
        assert!(rendered.contains("\"has_docstrings\": false"));
    }

    #[test]
    fn json_batch_embeds_counts() {
        let batch = BatchReport::new("src", Vec::new(), 70.0);
        let rendered = to_json_batch(&batch).expect("json should serialize");
        assert!(rendered.contains("\"file_count\": 0"));
    }
}
