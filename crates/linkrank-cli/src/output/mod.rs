//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::RankVector;

/// Both rank estimates of one run
pub struct RankReport<'a> {
    pub samples: usize,
    pub sampled: &'a RankVector,
    pub iterations: usize,
    pub iterated: &'a RankVector,
}

/// Format a ranking report
pub fn format_report(report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Md => markdown::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}
