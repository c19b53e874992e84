//! Detailed report: summary, performance opportunities, and failed audits
//! grouped by category.

use super::{display_value, double_rule, format_score, single_rule, summary};
use crate::config::ReportConfig;
use crate::extract::{extract_failed_audits, extract_opportunities};
use crate::report::LighthouseReport;
use colored::Colorize;

/// Renders the detailed report.
///
/// Sections rendered (in order):
/// 1. **Summary** — see [`summary::format`].
/// 2. **Opportunities** — the `max_opportunities` largest savings, omitted when there are none.
/// 3. **Failed audits** — up to `max_failed_per_category` per category with failures.
pub fn format(report: &LighthouseReport, limits: &ReportConfig) -> String {
    let mut out = summary::format(report);

    let opportunities = extract_opportunities(report);
    if !opportunities.is_empty() {
        out.push_str(&format!("\n{}\n", "⚡ PERFORMANCE OPPORTUNITIES".bold()));
        out.push_str(&format!("{}\n", single_rule()));
        for (i, opp) in opportunities
            .iter()
            .take(limits.max_opportunities)
            .enumerate()
        {
            out.push_str(&format!("\n{}. {}\n", i + 1, opp.title));
            if opp.savings_ms > 0.0 {
                out.push_str(&format!(
                    "   Potential Savings: {}\n",
                    format!("~{}ms", opp.savings_ms).green()
                ));
            }
            if let Some(value) = display_value(&opp.display_value) {
                out.push_str(&format!("   {}\n", value.dimmed()));
            }
        }
    }

    let failed = extract_failed_audits(report);

    out.push_str(&format!("\n\n{}\n", "📊 FAILED AUDITS BY CATEGORY".bold()));
    out.push_str(&format!("{}\n", single_rule()));

    for (category, audits) in failed.iter() {
        if audits.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", category.heading().bold()));
        for (i, audit) in audits
            .iter()
            .take(limits.max_failed_per_category)
            .enumerate()
        {
            out.push_str(&format!(
                "  {}. [{}] {}\n",
                i + 1,
                format_score(Some(audit.score)),
                audit.title
            ));
            if let Some(value) = display_value(&audit.display_value) {
                out.push_str(&format!("      {}\n", value.dimmed()));
            }
        }
    }

    out.push_str(&format!("\n{}\n", double_rule()));
    out
}
