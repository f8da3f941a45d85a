//! Check runner for executing the checklist in order

use super::trait_def::{Check, CheckContext, CheckResult};

/// Check runner that executes every registered check once, in registration order
pub struct CheckRunner {
  checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
  /// Create a new check runner
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check to the runner
  pub fn add_check(&mut self, check: Box<dyn Check>) {
    self.checks.push(check);
  }

  /// Run all checks and accumulate their findings into one result
  ///
  /// No check is skipped because an earlier one failed.
  pub fn run_all(&self, ctx: &CheckContext) -> CheckResult {
    let mut result = CheckResult::new();

    for check in &self.checks {
      println!("\n🔍 {}...", check.heading());

      if let Err(err) = check.run(ctx, &mut result) {
        // A check that cannot finish still must not stop the run
        result.issue(format!("Check '{}' failed to run: {}", check.name(), err));
      }
    }

    result
  }

  /// Get all registered checks
  pub fn checks(&self) -> &[Box<dyn Check>] {
    &self.checks
  }
}

impl Default for CheckRunner {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a runner with the built-in deployment checklist
pub fn create_default_runner() -> CheckRunner {
  let mut runner = CheckRunner::new();

  runner.add_check(Box::new(super::env_file::EnvFileCheck));
  runner.add_check(Box::new(super::tls::TlsMaterialCheck));
  runner.add_check(Box::new(super::artifacts::RequiredFilesCheck));
  runner.add_check(Box::new(super::directories::RequiredDirsCheck));
  runner.add_check(Box::new(super::ignore_file::IgnoreFileCheck));
  runner.add_check(Box::new(super::build_script::BuildScriptCheck));
  runner.add_check(Box::new(super::security_headers::SecurityHeadersCheck));

  runner
}
