//! Markdown output formatter

use super::RankReport;
use linkrank_core::RankVector;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    output.push_str(&format!("## Sampling (n = {})\n\n", report.samples));
    push_table(&mut output, report.sampled);

    output.push_str(&format!(
        "## Iteration ({} iterations)\n\n",
        report.iterations
    ));
    push_table(&mut output, report.iterated);

    output
}

fn push_table(output: &mut String, ranks: &RankVector) {
    output.push_str("| Page | Rank |\n|------|------|\n");
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
    }
    output.push('\n');
}
