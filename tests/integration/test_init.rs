//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_init_writes_builtin_tables() -> Result<()> {
  let project = TestProject::new()?;

  let run = run_preflight(&project.path, &["init"])?;
  assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);

  assert!(project.exists("preflight.toml"));
  let config = project.read_file("preflight.toml")?;
  assert!(config.contains("SECRET_KEY"));
  assert!(config.contains("Dockerfile.prod"));
  assert!(config.contains("Strict-Transport-Security"));
  for header in ["[env]", "[artifacts]", "[headers]"] {
    assert!(config.lines().any(|line| line == header), "missing {} in:\n{}", header, config);
  }

  Ok(())
}

#[test]
fn test_init_config_drives_identical_run() -> Result<()> {
  let project = TestProject::ready()?;
  run_preflight(&project.path, &["init"])?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(0), "stdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
  assert!(run.stdout.contains("✅ Checks passed: 13"));

  Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
  let project = TestProject::new()?;
  project.write("preflight.toml", "project_name = \"Keep Me\"\n")?;

  let run = run_preflight(&project.path, &["init"])?;
  assert_eq!(run.code, Some(2));
  assert!(run.stderr.contains("already exists"));
  assert!(project.read_file("preflight.toml")?.contains("Keep Me"));

  let forced = run_preflight(&project.path, &["init", "--force"])?;
  assert_eq!(forced.code, Some(0));
  assert!(!project.read_file("preflight.toml")?.contains("Keep Me"));

  Ok(())
}

#[test]
fn test_init_unwritable_target_is_system_error() -> Result<()> {
  let project = TestProject::new()?;
  project.mkdir("preflight.toml")?;

  let run = run_preflight(&project.path, &["init", "--force"])?;

  assert_eq!(run.code, Some(3), "stderr:\n{}", run.stderr);
  assert!(run.stderr.contains("Failed to write config"));

  Ok(())
}

#[test]
fn test_init_honours_dir_before_and_after_subcommand() -> Result<()> {
  let cwd = TestProject::new()?;
  let backend = TestProject::new()?;
  let frontend = TestProject::new()?;

  let backend_dir = backend.path.to_string_lossy().into_owned();
  let run = run_preflight(&cwd.path, &["--dir", &backend_dir, "init"])?;
  assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
  assert!(backend.exists("preflight.toml"));

  let frontend_dir = frontend.path.to_string_lossy().into_owned();
  let run = run_preflight(&cwd.path, &["init", "--dir", &frontend_dir])?;
  assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
  assert!(frontend.exists("preflight.toml"));

  assert!(!cwd.exists("preflight.toml"));

  Ok(())
}

#[test]
fn test_init_rejects_config_flag() -> Result<()> {
  let project = TestProject::new()?;

  let run = run_preflight(&project.path, &["--config", "ops/checklist.toml", "init"])?;

  assert_eq!(run.code, Some(2));
  assert!(run.stderr.contains("init cannot be combined"));
  assert!(!project.exists("preflight.toml"));

  Ok(())
}
