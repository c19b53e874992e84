//! Actionable report: every failing audit across categories, ranked by weight.

use super::{clean_description, display_value, double_rule, format_score, single_rule, summary};
use crate::config::ReportConfig;
use crate::extract::extract_failed_audits;
use crate::report::LighthouseReport;
use colored::Colorize;

pub const CLOSING_TIP: &str = "💡 TIP: Focus on high-impact issues (higher weight) first.\n    \
Each 10-point score improvement can significantly affect user experience.";

pub fn format(report: &LighthouseReport, limits: &ReportConfig) -> String {
    let mut out = summary::format(report);

    out.push_str(&format!("\n\n{}\n", "🔧 ACTIONABLE RECOMMENDATIONS".bold()));
    out.push_str(&format!("{}\n", single_rule()));
    out.push_str("\nTop issues to fix (sorted by impact):\n\n");

    let failed = extract_failed_audits(report);
    let ranked = failed.ranked();
    if ranked.is_empty() {
        out.push_str(&format!("{}\n\n", "No failing audits.".green()));
    }

    for (i, (category, audit)) in ranked.iter().take(limits.max_actionable).enumerate() {
        out.push_str(&format!(
            "{}. [{}] {}\n",
            i + 1,
            category.label().cyan(),
            audit.title.bold()
        ));
        out.push_str(&format!(
            "   Score: {} | Impact Weight: {}\n",
            format_score(Some(audit.score)),
            audit.weight
        ));

        let description = clean_description(&audit.description);
        if !description.is_empty() {
            out.push_str(&format!("   → {description}\n"));
        }
        if let Some(value) = display_value(&audit.display_value) {
            out.push_str(&format!("   → {}\n", value.dimmed()));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", double_rule()));
    out.push_str(&format!("\n{CLOSING_TIP}\n\n"));
    out
}
