// Markdown topic report.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{PipelineError, Result, Stage};
use crate::topics::lda::FitOutcome;
use crate::topics::report::TopicReport;

/// Render the report with a short fit summary and a prevalence table.
pub fn render_topic_report(
    report: &TopicReport,
    outcome: &FitOutcome,
    documents: usize,
) -> String {
    let mut md = String::new();
    let status = if outcome.converged {
        format!("converged after {} iterations", outcome.iterations)
    } else {
        format!(
            "stopped at the {}-iteration budget (last change {:.2e})",
            outcome.iterations, outcome.final_change
        )
    };

    // Writing to a String cannot fail.
    let _ = writeln!(md, "# Topic report\n");
    let _ = writeln!(md, "{} topics over {documents} documents, {status}.\n", report.len());

    for topic in &report.topics {
        let _ = writeln!(md, "- {topic}");
    }

    let _ = writeln!(md, "\n| Topic | Prevalence |\n|---:|---:|");
    for topic in &report.topics {
        let _ = writeln!(md, "| {} | {:.3} |", topic.display_number(), topic.prevalence);
    }

    md
}

pub fn write_topic_report(
    path: &Path,
    report: &TopicReport,
    outcome: &FitOutcome,
    documents: usize,
) -> Result<()> {
    fs::write(path, render_topic_report(report, outcome, documents))
        .map_err(|e| PipelineError::io(Stage::Output, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::report::TopicSummary;

    #[test]
    fn renders_topic_lines() {
        let report = TopicReport {
            topics: vec![TopicSummary {
                index: 0,
                terms: vec!["tax".into(), "tariff".into()],
                prevalence: 1.0,
            }],
        };
        let outcome = FitOutcome {
            iterations: 4,
            converged: true,
            final_change: 1e-5,
        };
        let md = render_topic_report(&report, &outcome, 12);
        assert!(md.contains("- Topic 1: tax, tariff"));
        assert!(md.contains("1 topics over 12 documents, converged after 4 iterations."));
        assert!(md.contains("| 1 | 1.000 |"));
    }
}
