//! HTTP security header configuration in the web-server config

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::{PreflightResult, ResultExt};
use crate::utils::{missing_literals, read_text};

/// Check that the web-server config sets the expected security headers
pub struct SecurityHeadersCheck;

impl Check for SecurityHeadersCheck {
  fn name(&self) -> &str {
    "security-headers"
  }

  fn description(&self) -> &str {
    "Validates the web-server config sets HTTP security headers"
  }

  fn heading(&self) -> &str {
    "Checking security headers configuration"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    let headers = &ctx.config.headers;
    let config_path = ctx.path(&headers.config_file);

    // Absence is reported by required-files, not here
    if !config_path.exists() {
      return Ok(());
    }

    let content = read_text(&config_path).with_context(|| format!("Failed to read {}", headers.config_file))?;
    let missing = missing_literals(&content, &headers.required);

    if missing.is_empty() {
      println!("  ✓ Security headers configured");
      result.pass();
    } else {
      result.warn(format!("Missing security headers: {}", missing.join(", ")));
    }

    Ok(())
  }
}
