//! # lighthouse-report
//!
//! Runs [Google Lighthouse] against a URL and renders its JSON report as
//! readable terminal text.
//!
//! `lighthouse-report` shells out to the `lighthouse` CLI, captures the JSON
//! document it prints, and reshapes it into summary, detailed, and actionable
//! views: category scores, performance opportunities ranked by estimated
//! savings, and failing audits ranked by their weight in each category.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lighthouse_report::{audit, config::Config, output, runner::AuditRequest};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let request = AuditRequest::new("https://example.com");
//! let runner = audit::check_installed(&config.lighthouse)?;
//! let run = audit::run_audit(&runner, &request, None)?;
//!
//! let text = output::format_report(&run.report, output::ReportFormat::Actionable, &config.report);
//! print!("{text}");
//! # Ok::<(), lighthouse_report::error::LighthouseError>(())
//! ```
//!
//! ## Architecture
//!
//! Data flows one way: raw JSON → derived views → text.
//!
//! 1. **[`config`]** — load settings from `lighthouse-report.toml`.
//! 2. **[`runner`]** — build the Lighthouse command line and execute it.
//! 3. **[`audit`]** — check the tool is installed, run it, decode and save the report.
//! 4. **[`report`]** — typed view of the Lighthouse JSON document.
//! 5. **[`extract`]** — pure functions deriving summary, opportunities,
//!    diagnostics, and failed audits.
//! 6. **[`output`]** — render the derived views as text.
//!
//! [Google Lighthouse]: https://developer.chrome.com/docs/lighthouse

pub mod audit;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod report;
pub mod runner;
