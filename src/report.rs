//! Typed view of a Lighthouse JSON report.
//!
//! Only the fields the extractors consume are modelled; everything else in
//! the document is ignored here and survives untouched in the raw
//! [`serde_json::Value`] that [`read_json`] and [`write_json`] work with.
//!
//! `categories` and `audits` are decoded into an [`IndexMap`] so that
//! iteration follows the order of the source document. A `null` where a
//! string, list, or object is expected decodes as if the key were missing.

use crate::error::{LighthouseError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

/// `details.type` of audits that carry a savings estimate.
pub const DETAILS_OPPORTUNITY: &str = "opportunity";
/// `details.type` of audits that only hold debugging payloads.
pub const DETAILS_DEBUGDATA: &str = "debugdata";

/// One of the four Lighthouse grading buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl Category {
    /// Every category, in the order reports present them.
    pub const ALL: [Category; 4] = [
        Category::Performance,
        Category::Accessibility,
        Category::BestPractices,
        Category::Seo,
    ];

    /// Key used for this category in the report and on the Lighthouse command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Accessibility => "accessibility",
            Category::BestPractices => "best-practices",
            Category::Seo => "seo",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Section heading, e.g. `BEST PRACTICES`.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Performance => "PERFORMANCE",
            Category::Accessibility => "ACCESSIBILITY",
            Category::BestPractices => "BEST PRACTICES",
            Category::Seo => "SEO",
        }
    }

    /// Inline tag, e.g. `Best Practices`.
    pub fn label(self) -> &'static str {
        match self {
            Category::Performance => "Performance",
            Category::Accessibility => "Accessibility",
            Category::BestPractices => "Best Practices",
            Category::Seo => "SEO",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Lighthouse device emulation preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    #[default]
    Desktop,
    Mobile,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Desktop => "desktop",
            Preset::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a JSON `null` to the field's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The decoded Lighthouse document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LighthouseReport {
    #[serde(deserialize_with = "null_as_default")]
    pub lighthouse_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub final_displayed_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fetch_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_agent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: IndexMap<String, CategoryResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub audits: IndexMap<String, AuditResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryResult {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub score: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audit_refs: Vec<AuditRef>,
}

/// Reference from a category to one of its audits.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuditRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditResult {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// `None` marks an informative audit that is never counted as failed.
    pub score: Option<f64>,
    pub display_value: Option<String>,
    pub details: Option<AuditDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditDetails {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub overall_savings_ms: Option<f64>,
}

impl AuditResult {
    /// `details.type`, when the audit has details.
    pub fn details_kind(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.kind.as_deref())
    }

    /// A failed audit has a score strictly below 1.0.
    pub fn is_failed(&self) -> bool {
        matches!(self.score, Some(score) if score < 1.0)
    }
}

impl LighthouseReport {
    /// Builds the typed view from an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`LighthouseError::InvalidJson`] when a consumed field has an
    /// unexpected shape (for example `categories` not being an object).
    pub fn from_value(raw: &serde_json::Value) -> Result<LighthouseReport> {
        Ok(LighthouseReport::deserialize(raw)?)
    }
}

/// Parses a JSON document from text.
pub fn parse_json(text: &str) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(text)?)
}

/// Reads a previously saved report from disk.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| LighthouseError::io(path, e))?;
    parse_json(&content)
}

/// Writes the raw document to `path`, pretty-printed with two-space indentation.
pub fn write_json(raw: &serde_json::Value, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(raw)?;
    std::fs::write(path, content).map_err(|e| LighthouseError::io(path, e))?;
    tracing::debug!(path = %path.display(), "saved raw report");
    Ok(())
}
