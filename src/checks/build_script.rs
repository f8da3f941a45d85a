//! Build script presence

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::PreflightResult;

pub struct BuildScriptCheck;

impl Check for BuildScriptCheck {
  fn name(&self) -> &str {
    "build-script"
  }

  fn description(&self) -> &str {
    "Checks the secure build script is present"
  }

  fn heading(&self) -> &str {
    "Checking code compilation setup"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    let script = &ctx.config.build.script;

    if ctx.path(script).exists() {
      println!("  ✓ Build script ({}) found", script);
      result.pass();
    } else {
      result.warn(format!("{} not found", script));
    }

    Ok(())
  }
}
