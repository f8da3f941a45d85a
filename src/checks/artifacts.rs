//! Deployment artifact existence checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::PreflightResult;

/// Check that every Docker/web-server artifact needed for deployment exists
pub struct RequiredFilesCheck;

impl Check for RequiredFilesCheck {
  fn name(&self) -> &str {
    "required-files"
  }

  fn description(&self) -> &str {
    "Validates deployment artifacts (Dockerfile, compose file, entrypoint, nginx config) exist"
  }

  fn heading(&self) -> &str {
    "Checking Docker configuration"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    for file in &ctx.config.artifacts.files {
      if ctx.path(file).exists() {
        println!("  ✓ {} found", file);
        result.pass();
      } else {
        result.issue(format!("Required file not found: {}", file));
      }
    }

    Ok(())
  }
}
