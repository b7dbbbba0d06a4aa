use crate::report::types::Report;
use crate::statistics::types::{TestResult, Verdict};

pub const HEADING: &str = "# AB Test Demo - 1 sided";
pub const ONE_SIDED_NOTE: &str =
    "Note - this is a one sided test with Distribution 2 > Distribution 1";

pub fn plot_title(result: &TestResult) -> String {
    format!("p-value {:.4}, z score {:.2}", result.p_value, result.z_score)
}

pub fn verdict_line(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Significant => "Evaluation: Significant Difference found :)",
        Verdict::NotSignificant => "Evaluation: Not Significant Difference found :(",
    }
}

pub fn percent_line(result: &TestResult) -> String {
    format!(
        "Dist 2 > Dist 1 {:.2}% of the time, equivalent to 1 - p_value or 1 - {:.4}",
        (1.0 - result.p_value) * 100.0,
        result.p_value
    )
}

pub fn format_text(report: &Report) -> String {
    let mut lines = vec![
        HEADING.to_string(),
        ONE_SIDED_NOTE.to_string(),
        String::new(),
        verdict_line(report.verdict).to_string(),
        report.title.clone(),
        percent_line(&report.result),
        format!(
            "Critical z at alpha {}: {:.4}",
            report.settings.alpha, report.critical_z
        ),
    ];
    if let Some(path) = &report.plot_path {
        lines.push(format!("Histogram written to {}", path.display()));
    }
    lines.join("\n")
}
