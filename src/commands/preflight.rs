//! The checklist command: run every check, print the summary, derive the exit status

use crate::checks::{Check, CheckContext, create_default_runner};
use crate::commands::resolve_project_root;
use crate::core::config::PreflightConfig;
use crate::core::error::{ExitCode, PreflightResult};
use crate::ui::report::{exit_code, render_banner, render_summary};
use std::path::{Path, PathBuf};

/// Run the full checklist against a project directory
///
/// Returns the exit code the process should terminate with. Only configuration
/// problems surface as `Err`; checklist findings never do.
pub fn run_preflight(dir: Option<PathBuf>, config_path: Option<PathBuf>) -> PreflightResult<ExitCode> {
  let project_root = resolve_project_root(dir)?;
  let config = load_config(&project_root, config_path.as_deref())?;

  println!("{}", render_banner(&config.project_name));

  let ctx = CheckContext::new(project_root, config);
  let result = create_default_runner().run_all(&ctx);

  print!("{}", render_summary(&result, &ctx.config));

  Ok(exit_code(&result))
}

/// Print the registered checks in run order without inspecting anything
pub fn run_list_checks() -> PreflightResult<ExitCode> {
  let runner = create_default_runner();

  println!("📋 Registered checks:");
  for check in runner.checks() {
    print_check(check.as_ref());
  }

  Ok(ExitCode::Success)
}

fn print_check(check: &dyn Check) {
  println!("   • {}: {}", check.name(), check.description());
}

fn load_config(project_root: &Path, config_path: Option<&Path>) -> PreflightResult<PreflightConfig> {
  match config_path {
    Some(path) => PreflightConfig::load_from(path),
    None => PreflightConfig::load(project_root),
  }
}
