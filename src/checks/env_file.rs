//! Environment file validation
//!
//! Presence, permissions, required assignments and default/placeholder values.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::{PreflightResult, ResultExt};
use crate::utils::{is_world_readable, missing_literals, read_text};

/// Check that validates the deployment environment file
pub struct EnvFileCheck;

impl Check for EnvFileCheck {
  fn name(&self) -> &str {
    "env-file"
  }

  fn description(&self) -> &str {
    "Validates the environment file: presence, permissions, required variables, weak values"
  }

  fn heading(&self) -> &str {
    "Checking environment configuration"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    let env = &ctx.config.env;
    let env_path = ctx.path(&env.file);

    if !env_path.exists() {
      result.issue(format!("{} file not found", env.file));
      return Ok(());
    }

    if is_world_readable(&env_path).with_context(|| format!("Failed to read permissions of {}", env.file))? {
      result.warn(format!("{} file is world-readable (consider chmod 600)", env.file));
    }

    let content = read_text(&env_path).with_context(|| format!("Failed to read {}", env.file))?;

    let assignments: Vec<String> = env.required_vars.iter().map(|var| format!("{}=", var)).collect();
    let missing: Vec<&str> = missing_literals(&content, &assignments)
      .into_iter()
      .map(|assignment| assignment.trim_end_matches('='))
      .collect();

    if missing.is_empty() {
      println!("  ✓ All required environment variables present");
      result.pass();
    } else {
      result.issue(format!("Missing environment variables: {}", missing.join(", ")));
    }

    // Heuristic only: the pattern is searched across the whole file, the variable just labels the warning
    let lowered = content.to_lowercase();
    for weak in &env.weak_values {
      if lowered.contains(&weak.pattern.to_lowercase()) {
        result.warn(format!("Possible weak/default value for {}", weak.var));
      }
    }

    Ok(())
  }
}
