//! `deploy-preflight init` - write the built-in checklist tables to preflight.toml

use crate::commands::resolve_project_root;
use crate::core::config::PreflightConfig;
use crate::core::error::{ExitCode, PreflightResult};
use std::path::PathBuf;

/// Write preflight.toml into the project root
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_init(dir: Option<PathBuf>, force: bool) -> PreflightResult<ExitCode> {
  let project_root = resolve_project_root(dir)?;

  println!("📦 Project root: {}", project_root.display());

  let config_path = PreflightConfig::default().save(&project_root, force)?;

  println!("✅ Wrote {}", config_path.display());
  println!("   Edit the tables to match your deployment, then run `deploy-preflight`.");

  Ok(ExitCode::Success)
}
