use crate::types::features::CodeFeatures;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Result of one analysis call: a bounded probability plus the reasoning
/// text derived from the same feature values.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub probability: f64,
    pub reasoning: String,
    pub features: CodeFeatures,
    /// True when the fallback result replaced a failed analysis.
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub generated_at: String,
    pub detector_version: String,
    pub sha256: String,
    pub probability: f64,
    pub degraded: bool,
    pub reasoning: String,
    pub features: CodeFeatures,
}

impl AnalysisReport {
    pub fn new(source_name: &str, text: &str, analysis: Analysis) -> Self {
        Self {
            source: source_name.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            detector_version: env!("CARGO_PKG_VERSION").to_string(),
            sha256: sha256_hex(text.as_bytes()),
            probability: analysis.probability,
            degraded: analysis.degraded,
            reasoning: analysis.reasoning,
            features: analysis.features,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub root: String,
    pub generated_at: String,
    pub detector_version: String,
    pub file_count: usize,
    pub flagged_count: usize,
    pub mean_probability: f64,
    pub reports: Vec<AnalysisReport>,
}

impl BatchReport {
    pub fn new(root: &str, reports: Vec<AnalysisReport>, flag_threshold: f64) -> Self {
        let flagged_count = reports
            .iter()
            .filter(|report| report.probability >= flag_threshold)
            .count();
        let mean_probability = if reports.is_empty() {
            0.0
        } else {
            reports.iter().map(|report| report.probability).sum::<f64>() / reports.len() as f64
        };

        Self {
            root: root.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            detector_version: env!("CARGO_PKG_VERSION").to_string(),
            file_count: reports.len(),
            flagged_count,
            mean_probability,
            reports,
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis(probability: f64) -> Analysis {
        Analysis {
            probability,
            reasoning: "reasoning".to_string(),
            features: CodeFeatures::default(),
            degraded: false,
        }
    }

    #[test]
    fn report_fingerprints_the_analyzed_text() {
        let report = AnalysisReport::new("lib.py", "print(1)\n", sample_analysis(25.0));
        assert_eq!(report.sha256.len(), 64);
        let again = AnalysisReport::new("lib.py", "print(1)\n", sample_analysis(25.0));
        assert_eq!(report.sha256, again.sha256);
    }

    #[test]
    fn batch_report_counts_flagged_files_against_threshold() {
        let reports = vec![
            AnalysisReport::new("a.py", "a", sample_analysis(80.0)),
            AnalysisReport::new("b.py", "b", sample_analysis(40.0)),
            AnalysisReport::new("c.py", "c", sample_analysis(70.0)),
        ];
        let batch = BatchReport::new("src", reports, 70.0);
        assert_eq!(batch.file_count, 3);
        assert_eq!(batch.flagged_count, 2);
        assert!((batch.mean_probability - 190.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_batch_has_zero_mean() {
        let batch = BatchReport::new("src", Vec::new(), 70.0);
        assert_eq!(batch.file_count, 0);
        assert_eq!(batch.mean_probability, 0.0);
    }
}
