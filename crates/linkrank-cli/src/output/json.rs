//! JSON output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let output = serde_json::json!({
        "sampling": {
            "samples": report.samples,
            "ranks": report.sampled,
        },
        "iteration": {
            "iterations": report.iterations,
            "ranks": report.iterated,
        },
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
