//! Ignore-file coverage of sensitive paths

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::{PreflightResult, ResultExt};
use crate::utils::{missing_literals, read_text};

/// Check that secrets, keys, backups and logs are kept out of version control
pub struct IgnoreFileCheck;

impl Check for IgnoreFileCheck {
  fn name(&self) -> &str {
    "ignore-file"
  }

  fn description(&self) -> &str {
    "Validates the ignore file lists sensitive paths (env file, keys, backups, logs)"
  }

  fn heading(&self) -> &str {
    "Checking .gitignore configuration"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    let ignore = &ctx.config.ignore;
    let ignore_path = ctx.path(&ignore.file);

    if !ignore_path.exists() {
      result.warn(format!("{} not found", ignore.file));
      return Ok(());
    }

    let content = read_text(&ignore_path).with_context(|| format!("Failed to read {}", ignore.file))?;
    let missing = missing_literals(&content, &ignore.patterns);

    if missing.is_empty() {
      println!("  ✓ {} properly configured", ignore.file);
      result.pass();
    } else {
      result.warn(format!("Missing patterns in {}: {}", ignore.file, missing.join(", ")));
    }

    Ok(())
  }
}
