use clap::Parser;
use lighthouse_report::output::ReportFormat;
use lighthouse_report::report::{Category, Preset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lighthouse-report",
    version,
    about = "Run a Google Lighthouse audit on a webpage and summarize the results"
)]
pub struct Cli {
    /// URL to audit (can be local or remote)
    #[arg(required_unless_present = "input")]
    pub url: Option<String>,

    /// Path to save the JSON report
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Render a previously saved JSON report instead of running Lighthouse
    #[arg(long, short, conflicts_with_all = ["url", "output"])]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(long, short, default_value = "all", value_enum)]
    pub format: ReportFormat,

    /// Device preset
    #[arg(long, short, default_value = "desktop", value_enum)]
    pub preset: Preset,

    /// Categories to audit (default: all)
    #[arg(long, short, num_args = 1.., value_enum)]
    pub categories: Vec<Category>,

    /// Flags passed to Chrome (default: --headless)
    #[arg(long, allow_hyphen_values = true)]
    pub chrome_flags: Option<String>,

    /// Lighthouse executable to run
    #[arg(long)]
    pub lighthouse_bin: Option<String>,

    /// Abort the audit after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
