use crate::types::report::{AnalysisReport, BatchReport};

pub fn to_text(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("source: {}\n", report.source));
    output.push_str(&format!("sha256: {}\n", report.sha256));
    output.push_str(&format!(
        "AI-generated likelihood: {:.1}%\n",
        report.probability
    ));
    if report.degraded {
        output.push_str("note: analysis degraded to the fallback result\n");
    }
    output.push('\n');
    output.push_str(&report.reasoning);
    output.push('\n');
    output
}

pub fn to_text_batch(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("root: {}\n", report.root));
    output.push_str(&format!("files analyzed: {}\n", report.file_count));
    output.push_str(&format!("flagged: {}\n", report.flagged_count));
    output.push_str(&format!(
        "mean likelihood: {:.1}%\n\n",
        report.mean_probability
    ));

    if report.reports.is_empty() {
        output.push_str("no analyzable files\n");
    } else {
        for entry in &report.reports {
            output.push_str(&format!("- {:.1}% {}\n", entry.probability, entry.source));
        }
    }

    output
}
