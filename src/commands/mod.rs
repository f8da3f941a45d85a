//! CLI commands for deploy-preflight
//!
//! - **preflight** (default): run the deployment checklist and report
//! - **init**: write the built-in checklist tables to preflight.toml

pub mod init;
pub mod preflight;

pub use init::run_init;
pub use preflight::{run_list_checks, run_preflight};

use crate::core::error::{PreflightError, PreflightResult};
use std::env;
use std::path::PathBuf;

/// Project root from `--dir`, defaulting to the current directory
pub(crate) fn resolve_project_root(dir: Option<PathBuf>) -> PreflightResult<PathBuf> {
  let root = match dir {
    Some(dir) => dir,
    None => env::current_dir()?,
  };

  if !root.is_dir() {
    return Err(PreflightError::with_help(
      format!("Project directory not found: {}", root.display()),
      "Pass an existing directory with --dir, or run from the project root",
    ));
  }

  Ok(root)
}
