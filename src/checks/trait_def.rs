//! Check trait abstraction for the deployment checklist
//!
//! Every check implements the `Check` trait and appends its findings to one shared
//! `CheckResult`. A finding is either an issue (blocks deployment) or a warning
//! (review before deployment). Missing files are findings, not errors.

use crate::core::config::PreflightConfig;
use crate::core::error::PreflightResult;
use std::path::{Path, PathBuf};

/// Severity level of a recorded finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  /// Advisory, never affects the exit status
  Warning,
  /// Deployment-blocking
  Issue,
}

impl Severity {
  /// Marker printed in front of each finding
  pub fn icon(self) -> &'static str {
    match self {
      Severity::Warning => "⚠️ ",
      Severity::Issue => "❌",
    }
  }
}

/// Accumulated outcome of one checklist run
///
/// Counts only ever increase. Every issue bumps `failed_count`, so
/// `failed_count == issues.len()` holds once the run is over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
  pub passed_count: usize,
  pub failed_count: usize,
  pub issues: Vec<String>,
  pub warnings: Vec<String>,
}

impl CheckResult {
  pub fn new() -> Self {
    Self::default()
  }

  /// Count one satisfied condition
  pub fn pass(&mut self) {
    self.passed_count += 1;
  }

  /// Record a deployment-blocking issue
  pub fn issue(&mut self, message: impl Into<String>) {
    self.issues.push(message.into());
    self.failed_count += 1;
  }

  /// Record an advisory warning
  pub fn warn(&mut self, message: impl Into<String>) {
    self.warnings.push(message.into());
  }

  /// Findings recorded at the given severity, in recording order
  pub fn findings(&self, severity: Severity) -> &[String] {
    match severity {
      Severity::Issue => &self.issues,
      Severity::Warning => &self.warnings,
    }
  }

  /// True when nothing blocks deployment (warnings allowed)
  pub fn is_deployable(&self) -> bool {
    self.issues.is_empty()
  }

  /// True when there is nothing to report at all
  pub fn is_clean(&self) -> bool {
    self.issues.is_empty() && self.warnings.is_empty()
  }
}

/// Context passed to checks
#[derive(Debug, Clone)]
pub struct CheckContext {
  /// Project directory all checklist paths are relative to
  pub project_root: PathBuf,
  /// Checklist tables (built-in or from preflight.toml)
  pub config: PreflightConfig,
}

impl CheckContext {
  pub fn new(project_root: impl Into<PathBuf>, config: PreflightConfig) -> Self {
    Self {
      project_root: project_root.into(),
      config,
    }
  }

  /// Resolve a checklist path against the project root
  pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
    self.project_root.join(relative)
  }
}

/// Checklist step
///
/// Each check inspects the project root and appends to the shared result.
/// Checks never decide whether later checks run; the runner always runs all of them.
///
/// # Example
///
/// ```rust,ignore
/// use crate::checks::{Check, CheckContext, CheckResult};
///
/// struct ReadmeCheck;
///
/// impl Check for ReadmeCheck {
///   fn name(&self) -> &str {
///     "readme"
///   }
///
///   fn description(&self) -> &str {
///     "Verifies a README ships with the project"
///   }
///
///   fn heading(&self) -> &str {
///     "Checking documentation"
///   }
///
///   fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
///     if ctx.path("README.md").exists() {
///       result.pass();
///     } else {
///       result.warn("README.md not found");
///     }
///     Ok(())
///   }
/// }
/// ```
pub trait Check {
  /// Unique name for this check (kebab-case)
  fn name(&self) -> &str;

  /// Human-readable description of what this check validates
  fn description(&self) -> &str;

  /// Progress heading printed before the check runs
  fn heading(&self) -> &str;

  /// Run the check, recording findings into `result`
  ///
  /// An `Err` means the check could not finish (e.g. a present file that cannot be read);
  /// the runner turns it into an issue.
  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()>;
}
