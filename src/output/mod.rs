//! Text rendering of Lighthouse reports.
//!
//! Three report styles are supported, plus their combination:
//!
//! | Format | Module | Contents |
//! |--------|--------|----------|
//! | [`Summary`](ReportFormat::Summary)       | [`summary`]    | URL, fetch time, category scores |
//! | [`Detailed`](ReportFormat::Detailed)     | [`detailed`]   | Summary, top opportunities, failed audits per category |
//! | [`Actionable`](ReportFormat::Actionable) | [`actionable`] | Summary, failed audits across categories ranked by weight |
//! | [`All`](ReportFormat::All)               | all three      | Each of the above, in that order |
//!
//! Use [`format_report`] to render a [`LighthouseReport`] in any of them.

pub mod actionable;
pub mod detailed;
pub mod summary;

use crate::config::ReportConfig;
use crate::report::LighthouseReport;

/// Shown in place of a score for informative audits.
pub const NO_SCORE: &str = "N/A";
/// Everything from this marker on is dropped from audit descriptions.
pub const LEARN_MORE_MARKER: &str = "[Learn more](";

const WIDTH: usize = 80;

/// Report styles selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Category scores only.
    Summary,
    /// Scores, performance opportunities, and failed audits per category.
    Detailed,
    /// Scores and the highest-impact failed audits across all categories.
    Actionable,
    /// Summary, detailed, and actionable reports one after another.
    #[default]
    All,
}

/// Renders `report` in the requested [`ReportFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use lighthouse_report::config::ReportConfig;
/// use lighthouse_report::output::{format_report, ReportFormat};
/// # use lighthouse_report::report::LighthouseReport;
/// # fn example(report: &LighthouseReport) {
/// let text = format_report(report, ReportFormat::Summary, &ReportConfig::default());
/// print!("{text}");
/// # }
/// ```
pub fn format_report(
    report: &LighthouseReport,
    format: ReportFormat,
    limits: &ReportConfig,
) -> String {
    match format {
        ReportFormat::Summary => summary::format(report),
        ReportFormat::Detailed => detailed::format(report, limits),
        ReportFormat::Actionable => actionable::format(report, limits),
        ReportFormat::All => {
            let mut out = summary::format(report);
            out.push_str(&detailed::format(report, limits));
            out.push_str(&actionable::format(report, limits));
            out
        }
    }
}

/// Three-tier rating of a score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 0.9 and above.
    High,
    /// 0.5 up to, not including, 0.9.
    Medium,
    /// Below 0.5.
    Low,
}

impl ScoreTier {
    pub fn of(score: f64) -> ScoreTier {
        if score >= 0.9 {
            ScoreTier::High
        } else if score >= 0.5 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            ScoreTier::High => "🟢",
            ScoreTier::Medium => "🟡",
            ScoreTier::Low => "🔴",
        }
    }
}

/// Formats a score as a tier indicator plus a truncated percentage.
///
/// # Examples
///
/// ```
/// use lighthouse_report::output::format_score;
///
/// assert_eq!(format_score(Some(0.9)), "🟢 90");
/// assert_eq!(format_score(Some(0.4999)), "🔴 49");
/// assert_eq!(format_score(None), "N/A");
/// ```
pub fn format_score(score: Option<f64>) -> String {
    match score {
        None => NO_SCORE.to_string(),
        Some(score) => {
            let percent = (score * 100.0).trunc() as i64;
            format!("{} {}", ScoreTier::of(score).indicator(), percent)
        }
    }
}

/// Returns the part of `description` preceding the first [`LEARN_MORE_MARKER`], trimmed.
///
/// # Examples
///
/// ```
/// use lighthouse_report::output::clean_description;
///
/// assert_eq!(
///     clean_description("Serve images in modern formats. [Learn more](https://web.dev/)."),
///     "Serve images in modern formats."
/// );
/// ```
pub fn clean_description(description: &str) -> &str {
    let end = description.find(LEARN_MORE_MARKER).unwrap_or(description.len());
    description[..end].trim()
}

fn double_rule() -> String {
    "=".repeat(WIDTH)
}

fn single_rule() -> String {
    "-".repeat(WIDTH)
}

/// `Some` only for a present, non-empty display value.
fn display_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
