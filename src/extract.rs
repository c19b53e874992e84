//! Derived views over a [`LighthouseReport`].
//!
//! Each function here is pure and total: it never fails on a decoded report
//! and never mutates it. Missing optional fields fall back to the defaults
//! declared at the top of this module.
//!
//! | Function | View |
//! |----------|------|
//! | [`extract_summary`] | URL, fetch time, user agent, per-category scores |
//! | [`extract_opportunities`] | Audits with a savings estimate, largest first |
//! | [`extract_diagnostics`] | Non-debug audits scoring below 1.0, in report order |
//! | [`extract_failed_audits`] | Failing audits per category, heaviest weight first |

use crate::report::{
    AuditResult, Category, LighthouseReport, DETAILS_DEBUGDATA, DETAILS_OPPORTUNITY,
};

/// Savings assumed when an opportunity has no `overallSavingsMs`.
pub const DEFAULT_SAVINGS_MS: f64 = 0.0;
/// Weight assumed when an audit reference carries none.
pub const DEFAULT_WEIGHT: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub url: String,
    pub fetch_time: String,
    pub user_agent: String,
    pub scores: Vec<CategoryScore>,
}

/// Score line for one category present in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    /// Report key, e.g. `best-practices`. Kept verbatim so unknown categories still show.
    pub key: String,
    pub title: String,
    pub score: Option<f64>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: Option<f64>,
    pub savings_ms: f64,
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: f64,
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedAudit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: f64,
    pub weight: f64,
    pub display_value: Option<String>,
}

/// Failed audits grouped by category.
///
/// Always holds exactly one list per [`Category`], in [`Category::ALL`] order,
/// even when the report omits that category.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedAudits {
    groups: Vec<(Category, Vec<FailedAudit>)>,
}

impl FailedAudits {
    pub fn get(&self, category: Category) -> &[FailedAudit] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, audits)| audits.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[FailedAudit])> {
        self.groups.iter().map(|(c, audits)| (*c, audits.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, audits)| audits.len()).sum()
    }

    /// Merges every category into one list, heaviest weight first.
    ///
    /// Ties keep category order, then per-category order.
    pub fn ranked(&self) -> Vec<(Category, &FailedAudit)> {
        let mut all: Vec<(Category, &FailedAudit)> = self
            .groups
            .iter()
            .flat_map(|(c, audits)| audits.iter().map(move |a| (*c, a)))
            .collect();
        all.sort_by(|a, b| b.1.weight.total_cmp(&a.1.weight));
        all
    }
}

pub fn extract_summary(report: &LighthouseReport) -> Summary {
    let scores = report
        .categories
        .iter()
        .map(|(key, category)| CategoryScore {
            key: key.to_string(),
            title: category.title.clone(),
            score: category.score,
            description: category.description.clone(),
        })
        .collect();

    Summary {
        url: report.final_displayed_url.clone(),
        fetch_time: report.fetch_time.clone(),
        user_agent: report.user_agent.clone(),
        scores,
    }
}

/// Returns every `opportunity` audit, sorted by estimated savings (largest first).
pub fn extract_opportunities(report: &LighthouseReport) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = report
        .audits
        .iter()
        .filter(|(_, audit)| audit.details_kind() == Some(DETAILS_OPPORTUNITY))
        .map(|(id, audit)| Opportunity {
            id: id.to_string(),
            title: audit.title.clone(),
            description: audit.description.clone(),
            score: audit.score,
            savings_ms: audit
                .details
                .as_ref()
                .and_then(|d| d.overall_savings_ms)
                .unwrap_or(DEFAULT_SAVINGS_MS),
            display_value: audit.display_value.clone(),
        })
        .collect();

    // sort_by is stable: equal savings keep report order.
    opportunities.sort_by(|a, b| b.savings_ms.total_cmp(&a.savings_ms));
    opportunities
}

/// Returns scored, non-debug audits below 1.0 in report order.
pub fn extract_diagnostics(report: &LighthouseReport) -> Vec<Diagnostic> {
    report
        .audits
        .iter()
        .filter(|(_, audit)| audit.details_kind() != Some(DETAILS_DEBUGDATA))
        .filter_map(|(id, audit)| {
            let score = failing_score(audit)?;
            Some(Diagnostic {
                id: id.to_string(),
                title: audit.title.clone(),
                description: audit.description.clone(),
                score,
                display_value: audit.display_value.clone(),
            })
        })
        .collect()
}

/// Collects failing audits for each of the four categories.
///
/// References to audits missing from the report, and audits without a
/// score, are skipped.
pub fn extract_failed_audits(report: &LighthouseReport) -> FailedAudits {
    let groups = Category::ALL
        .into_iter()
        .map(|category| {
            let Some(result) = report.categories.get(category.key()) else {
                return (category, Vec::new());
            };

            let mut failed: Vec<FailedAudit> = result
                .audit_refs
                .iter()
                .filter_map(|audit_ref| {
                    let audit = report.audits.get(&audit_ref.id)?;
                    let score = failing_score(audit)?;
                    Some(FailedAudit {
                        id: audit_ref.id.clone(),
                        title: audit.title.clone(),
                        description: audit.description.clone(),
                        score,
                        weight: audit_ref.weight.unwrap_or(DEFAULT_WEIGHT),
                        display_value: audit.display_value.clone(),
                    })
                })
                .collect();

            failed.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            (category, failed)
        })
        .collect();

    FailedAudits { groups }
}

fn failing_score(audit: &AuditResult) -> Option<f64> {
    audit.score.filter(|_| audit.is_failed())
}
