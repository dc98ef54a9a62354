//! CSV output formatter

use super::RankReport;
use linkrank_core::RankVector;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("method,page,rank\n");
    push_rows(&mut output, "sampling", report.sampled);
    push_rows(&mut output, "iteration", report.iterated);
    output
}

fn push_rows(output: &mut String, method: &str, ranks: &RankVector) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("{},{},{}\n", method, escape_csv(page), rank));
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
