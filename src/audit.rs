//! Audit orchestration.
//!
//! [`check_installed`] verifies the Lighthouse CLI is reachable; [`run_audit`]
//! then runs it through the returned [`LighthouseRunner`], decodes the typed
//! [`LighthouseReport`], and optionally saves the raw document.
//! [`load_saved`] produces the same [`AuditRun`] from a report saved earlier.

use crate::config::LighthouseConfig;
use crate::error::{LighthouseError, Result};
use crate::report::{self, LighthouseReport};
use crate::runner::{AuditRequest, LighthouseRunner};
use std::path::Path;

/// A decoded report together with the document it was decoded from.
#[derive(Debug, Clone)]
pub struct AuditRun {
    /// The document exactly as Lighthouse produced it.
    pub raw: serde_json::Value,
    pub report: LighthouseReport,
}

impl AuditRun {
    pub fn from_raw(raw: serde_json::Value) -> Result<AuditRun> {
        let report = LighthouseReport::from_value(&raw)?;
        tracing::debug!(
            version = %report.lighthouse_version,
            categories = report.categories.len(),
            audits = report.audits.len(),
            "decoded report"
        );
        Ok(AuditRun { raw, report })
    }
}

/// Verifies the configured Lighthouse command is installed and answers `--version`.
///
/// # Errors
///
/// Returns [`LighthouseError::NotInstalled`] when the program is missing or
/// its version check fails.
pub fn check_installed(config: &LighthouseConfig) -> Result<LighthouseRunner> {
    let runner = LighthouseRunner::new(config);
    match runner.version() {
        Some(version) => {
            tracing::info!(%version, "using lighthouse");
            Ok(runner)
        }
        None => Err(LighthouseError::NotInstalled {
            program: runner.program().to_string(),
        }),
    }
}

/// Runs a complete Lighthouse audit.
///
/// # Pipeline
///
/// 1. Runs the audit and parses stdout.
/// 2. Decodes the typed report.
/// 3. If `output_path` is given, writes the raw document there. Nothing is
///    written when an earlier step failed.
///
/// Obtain `runner` from [`check_installed`] so a missing tool is reported
/// before any audit starts.
///
/// # Examples
///
/// ```rust,no_run
/// use lighthouse_report::{audit, config::Config, runner::AuditRequest};
///
/// let config = Config::default();
/// let runner = audit::check_installed(&config.lighthouse)?;
/// let request = AuditRequest::new("https://example.com");
/// let run = audit::run_audit(&runner, &request, None)?;
/// println!("{}", run.report.final_displayed_url);
/// # Ok::<(), lighthouse_report::error::LighthouseError>(())
/// ```
pub fn run_audit(
    runner: &LighthouseRunner,
    request: &AuditRequest,
    output_path: Option<&Path>,
) -> Result<AuditRun> {
    let raw = runner.run(request)?;
    let run = AuditRun::from_raw(raw)?;

    if let Some(path) = output_path {
        report::write_json(&run.raw, path)?;
    }

    Ok(run)
}

/// Loads a report previously saved with `--output`.
pub fn load_saved(path: &Path) -> Result<AuditRun> {
    AuditRun::from_raw(report::read_json(path)?)
}
