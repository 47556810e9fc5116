use crate::types::report::{AnalysisReport, BatchReport};

pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str("# Code Origin Report\n\n");
    output.push_str(&format!("- Source: {}\n", report.source));
    output.push_str(&format!("- Generated: {}\n", report.generated_at));
    output.push_str(&format!("- Content SHA-256: {}\n", report.sha256));
    output.push_str(&format!(
        "- AI-generated likelihood: {:.1}%\n",
        report.probability
    ));
    if report.degraded {
        output.push_str("- Note: analysis degraded to the fallback result\n");
    }
    output.push_str("\n## Reasoning\n\n");
    output.push_str(&report.reasoning);
    output.push('\n');
    output
}

pub fn to_markdown_batch(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Code Origin Batch Report\n\n");
    output.push_str(&format!("- Root: {}\n", report.root));
    output.push_str(&format!("- Generated: {}\n", report.generated_at));
    output.push_str(&format!("- Files analyzed: {}\n", report.file_count));
    output.push_str(&format!("- Flagged: {}\n", report.flagged_count));
    output.push_str(&format!(
        "- Mean likelihood: {:.1}%\n",
        report.mean_probability
    ));

    output.push_str("\n## Files\n\n");
    if report.reports.is_empty() {
        output.push_str("- none\n");
    } else {
        for entry in &report.reports {
            output.push_str(&format!("- {}: {:.1}%\n", entry.source, entry.probability));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::features::CodeFeatures;
    use crate::types::report::Analysis;

    fn sample_report() -> AnalysisReport {
        AnalysisReport::new(
            "lib.py",
            "print(1)\n",
            Analysis {
                probability: 25.0,
                reasoning: "Code Structure Analysis:\n- sample".to_string(),
                features: CodeFeatures::default(),
                degraded: false,
            },
        )
    }

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Code Origin Report"));
        assert!(rendered.contains("## Reasoning"));
        assert!(rendered.contains("AI-generated likelihood: 25.0%"));
    }

    #[test]
    fn markdown_batch_lists_files() {
        let batch = BatchReport::new("src", vec![sample_report()], 70.0);
        let rendered = to_markdown_batch(&batch);
        assert!(rendered.contains("# Code Origin Batch Report"));
        assert!(rendered.contains("- lib.py: 25.0%"));
    }
}
