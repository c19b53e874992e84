//! Invocation of the external [Lighthouse](https://github.com/GoogleChrome/lighthouse) CLI.
//!
//! The runner builds the command line for an [`AuditRequest`], executes it,
//! and hands back the JSON document Lighthouse wrote to stdout:
//!
//! ```text
//! lighthouse <url> --output=json --output-path=stdout --preset=<preset>
//!            --chrome-flags=<flags> --quiet --only-categories=<c> ...
//! ```
//!
//! Stdout and stderr are drained on helper threads while the calling thread
//! waits for exit, so an optional timeout can kill a hung audit.

use crate::config::LighthouseConfig;
use crate::error::{LighthouseError, Result};
use crate::report::{self, Category, Preset};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Parameters of a single audit run.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub url: String,
    pub preset: Preset,
    /// Categories to restrict the audit to. Empty means all four.
    pub categories: Vec<Category>,
    pub chrome_flags: String,
}

impl AuditRequest {
    pub fn new(url: impl Into<String>) -> Self {
        AuditRequest {
            url: url.into(),
            preset: Preset::default(),
            categories: Vec::new(),
            chrome_flags: LighthouseConfig::default().chrome_flags,
        }
    }

    /// Categories that will actually be requested.
    pub fn effective_categories(&self) -> &[Category] {
        if self.categories.is_empty() {
            &Category::ALL
        } else {
            &self.categories
        }
    }
}

/// Builds the Lighthouse arguments (everything after the program) for `request`.
///
/// # Examples
///
/// ```
/// use lighthouse_report::report::Category;
/// use lighthouse_report::runner::{build_args, AuditRequest};
///
/// let mut request = AuditRequest::new("https://example.com");
/// request.categories = vec![Category::Seo];
/// let args = build_args(&request);
/// assert_eq!(args[0], "https://example.com");
/// assert_eq!(args.last().unwrap(), "--only-categories=seo");
/// ```
pub fn build_args(request: &AuditRequest) -> Vec<String> {
    let mut args = vec![
        request.url.clone(),
        "--output=json".to_string(),
        "--output-path=stdout".to_string(),
        format!("--preset={}", request.preset),
        format!("--chrome-flags={}", request.chrome_flags),
        "--quiet".to_string(),
    ];

    for category in request.effective_categories() {
        args.push(format!("--only-categories={}", category.key()));
    }

    args
}

/// Handle on the configured Lighthouse command.
#[derive(Debug, Clone)]
pub struct LighthouseRunner {
    program: String,
    leading_args: Vec<String>,
    timeout: Option<Duration>,
}

impl LighthouseRunner {
    pub fn new(config: &LighthouseConfig) -> Self {
        let mut command = config.command.iter().cloned();
        LighthouseRunner {
            program: command.next().unwrap_or_else(|| "lighthouse".to_string()),
            leading_args: command.collect(),
            timeout: config.timeout(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns `true` if the command can be found and answers `--version`.
    pub fn is_available(&self) -> bool {
        self.version().is_some()
    }

    /// Returns the version string printed by `<command> --version`.
    pub fn version(&self) -> Option<String> {
        if !program_exists(&self.program) {
            tracing::debug!(program = %self.program, "not found on PATH");
            return None;
        }

        let output = self
            .command()
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            tracing::debug!(status = %output.status, "`--version` failed");
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Runs an audit and returns the parsed JSON document.
    ///
    /// # Errors
    ///
    /// - [`LighthouseError::Spawn`] if the process cannot be started.
    /// - [`LighthouseError::Failed`] on a non-zero exit, with captured stderr.
    /// - [`LighthouseError::Timeout`] if the configured timeout elapses.
    /// - [`LighthouseError::InvalidJson`] if stdout is not a JSON document.
    pub fn run(&self, request: &AuditRequest) -> Result<serde_json::Value> {
        let args = build_args(request);
        tracing::debug!(program = %self.program, ?args, "spawning lighthouse");

        let start = Instant::now();
        let mut child = self
            .command()
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(LighthouseError::Spawn)?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = loop {
            if let Some(status) = child.try_wait().map_err(LighthouseError::Spawn)? {
                break status;
            }
            if let Some(limit) = self.timeout {
                if start.elapsed() >= limit {
                    // Reader threads are left behind: browser processes
                    // spawned by Lighthouse may still hold the pipes open.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(LighthouseError::Timeout(limit));
                }
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();
        tracing::info!(
            %status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            stdout_bytes = stdout.len(),
            "lighthouse finished"
        );

        if !status.success() {
            return Err(LighthouseError::Failed {
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        report::parse_json(&String::from_utf8_lossy(&stdout))
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args);
        cmd
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

/// Returns `true` if `program` is an existing path or an executable on `PATH`.
fn program_exists(program: &str) -> bool {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.is_file();
    }
    which_exists(program)
}

/// Returns `true` if an executable named `cmd` exists on `PATH`.
///
/// On Unix the file must also have an executable permission bit set.
pub fn which_exists(cmd: &str) -> bool {
    std::env::var_os("PATH")
        .map(|path| {
            std::env::split_paths(&path).any(|dir| {
                let candidate = dir.join(cmd);
                if !candidate.is_file() {
                    // npm installs `lighthouse.cmd` shims on Windows.
                    #[cfg(windows)]
                    {
                        return dir.join(format!("{cmd}.cmd")).is_file()
                            || dir.join(format!("{cmd}.exe")).is_file();
                    }
                    #[cfg(not(windows))]
                    {
                        return false;
                    }
                }
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::metadata(&candidate)
                        .map(|m| m.permissions().mode() & 0o111 != 0)
                        .unwrap_or(false)
                }
                #[cfg(not(unix))]
                {
                    true
                }
            })
        })
        .unwrap_or(false)
}
