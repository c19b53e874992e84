//! Category score summary.

use super::{double_rule, format_score, single_rule};
use crate::extract::extract_summary;
use crate::report::LighthouseReport;
use colored::Colorize;

/// Renders the URL, fetch time, and one score line per category in the report.
pub fn format(report: &LighthouseReport) -> String {
    let summary = extract_summary(report);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", double_rule()));
    out.push_str(&format!("{}\n", "LIGHTHOUSE AUDIT SUMMARY".bold()));
    out.push_str(&format!("{}\n", double_rule()));
    out.push_str(&format!("\n📍 URL: {}\n", summary.url));
    out.push_str(&format!("⏰ Fetch Time: {}\n\n", summary.fetch_time));

    out.push_str(&format!("{}\n", "CATEGORY SCORES".bold()));
    out.push_str(&format!("{}\n", single_rule()));
    for category in &summary.scores {
        out.push_str(&format!(
            "{title:<20} {score}\n",
            title = category.title,
            score = format_score(category.score),
        ));
    }

    out.push_str(&format!("\n{}\n", double_rule()));
    out
}
