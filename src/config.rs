//! Configuration loading.
//!
//! The default configuration file is `lighthouse-report.toml` in the current
//! working directory. Every field has a default, so the file can be omitted
//! entirely:
//!
//! ```toml
//! [lighthouse]
//! command = ["npx", "lighthouse"]
//! chrome_flags = "--headless --no-sandbox"
//! timeout_secs = 300
//!
//! [report]
//! max_opportunities = 10
//! max_failed_per_category = 5
//! max_actionable = 15
//! ```

use std::path::Path;
use std::time::Duration;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "lighthouse-report.toml";

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// How to invoke the Lighthouse CLI.
    pub lighthouse: LighthouseConfig,
    /// How many entries each report section shows.
    pub report: ReportConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct LighthouseConfig {
    /// Program followed by any leading arguments, e.g. `["npx", "lighthouse"]`.
    pub command: Vec<String>,
    /// Passed through as `--chrome-flags=<value>`.
    pub chrome_flags: String,
    /// Kill the audit after this many seconds. Unset waits indefinitely.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Opportunities listed in the detailed report.
    pub max_opportunities: usize,
    /// Failed audits listed per category in the detailed report.
    pub max_failed_per_category: usize,
    /// Issues listed in the actionable report.
    pub max_actionable: usize,
}

impl Default for LighthouseConfig {
    fn default() -> Self {
        LighthouseConfig {
            command: vec!["lighthouse".to_string()],
            chrome_flags: "--headless".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            max_opportunities: 10,
            max_failed_per_category: 5,
            max_actionable: 15,
        }
    }
}

impl LighthouseConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, the TOML fails to parse, or `lighthouse.command` is empty.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                if config.lighthouse.command.is_empty() {
                    return Err(format!(
                        "Invalid config {}: lighthouse.command must name a program",
                        path.display()
                    ));
                }
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}
