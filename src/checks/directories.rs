//! Required directory checks
//!
//! Absent directories are created on the spot, so this check never blocks deployment.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::{PreflightResult, ResultExt};
use std::fs;

/// Check that runtime directories exist, creating any that are missing
pub struct RequiredDirsCheck;

impl Check for RequiredDirsCheck {
  fn name(&self) -> &str {
    "required-dirs"
  }

  fn description(&self) -> &str {
    "Ensures runtime directories (logs, backups, TLS) exist, creating missing ones"
  }

  fn heading(&self) -> &str {
    "Checking directory structure"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    for dir in &ctx.config.directories.required {
      let dir_path = ctx.path(dir);

      if dir_path.exists() {
        println!("  ✓ {} directory exists", dir);
        result.pass();
        continue;
      }

      result.warn(format!("Directory not found: {} (will be created)", dir));
      fs::create_dir_all(&dir_path).with_context(|| format!("Failed to create directory {}", dir))?;
      println!("  📁 Created: {}", dir);
    }

    Ok(())
  }
}
