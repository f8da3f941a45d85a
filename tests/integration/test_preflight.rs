//! Tests for the default checklist run

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_ready_project_passes_cleanly() -> Result<()> {
  let project = TestProject::ready()?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(0), "stdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
  assert!(run.stdout.contains("Deployment - Security Check"));
  assert!(run.stdout.contains("✅ Checks passed: 13"));
  assert!(run.stdout.contains("❌ Checks failed: 0"));
  assert!(run.stdout.contains("⚠️  Warnings: 0"));
  assert!(run.stdout.contains("🎉 All security checks passed! Ready for deployment."));
  assert!(run.stdout.contains("docker-compose -f docker-compose.prod.yml up -d"));
  assert!(!run.stdout.contains("CRITICAL ISSUES"));

  Ok(())
}

#[test]
fn test_empty_directory_fails_and_creates_dirs() -> Result<()> {
  let project = TestProject::new()?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(1));
  assert!(run.stdout.contains("  ❌ .env file not found"));
  assert!(run.stdout.contains("  ❌ Required file not found: Dockerfile.prod"));
  assert!(run.stdout.contains("❌ Checks failed: 5"));
  assert!(run.stdout.contains("  ⚠️  nginx_ssl directory not found"));
  assert!(run.stdout.contains("  📁 Created: logs"));
  assert!(run.stdout.contains("❌ Critical issues found. Please fix before deployment."));
  for dir in ["logs", "db_backups", "nginx_ssl"] {
    assert!(project.exists(dir), "{} should have been created", dir);
  }

  Ok(())
}

#[test]
fn test_missing_env_does_not_stop_later_checks() -> Result<()> {
  let project = TestProject::ready()?;
  project.remove(".env")?;
  project.remove("entrypoint.prod.sh")?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(1));
  assert_eq!(run.stdout.matches(".env file not found").count(), 1);
  assert!(run.stdout.contains("Required file not found: entrypoint.prod.sh"));
  assert!(run.stdout.contains("✓ Security headers configured"));
  assert!(run.stdout.contains("❌ Checks failed: 2"));

  Ok(())
}

#[test]
fn test_warnings_alone_exit_zero() -> Result<()> {
  let project = TestProject::ready()?;
  project.remove("build_secure.py")?;
  project.write(".gitignore", ".env\n")?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(0));
  assert!(run.stdout.contains("  ⚠️  build_secure.py not found"));
  assert!(run.stdout.contains("  ⚠️  Missing patterns in .gitignore: *.pem, *.key, db_backups, logs"));
  assert!(run.stdout.contains("No critical issues found. Review warnings before deployment."));
  assert!(!run.stdout.contains("Next steps"));

  Ok(())
}

#[test]
fn test_insecure_secret_key_is_flagged() -> Result<()> {
  let project = TestProject::ready()?;
  let env = STRONG_ENV.replace("SECRET_KEY=8f3a9c1e5b7d2046aa91e0c4", "SECRET_KEY=django-insecure-xyz");
  project.write_private(".env", &env)?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(0));
  assert!(run.stdout.contains("Possible weak/default value for SECRET_KEY"));

  Ok(())
}

#[test]
fn test_missing_headers_warn_without_blocking() -> Result<()> {
  let project = TestProject::ready()?;
  project.write("nginx.prod.conf", "server {\n    listen 443 ssl;\n}\n")?;

  let run = run_preflight(&project.path, &[])?;

  assert_eq!(run.code, Some(0));
  assert!(run.stdout.contains(
    "Missing security headers: X-Frame-Options, X-Content-Type-Options, X-XSS-Protection, Strict-Transport-Security"
  ));

  Ok(())
}

#[test]
fn test_dir_flag_inspects_other_directory() -> Result<()> {
  let project = TestProject::ready()?;
  let elsewhere = TestProject::new()?;

  let dir = project.path.to_string_lossy().into_owned();
  let run = run_preflight(&elsewhere.path, &["--dir", &dir])?;

  assert_eq!(run.code, Some(0));
  assert!(!elsewhere.exists("logs"));

  Ok(())
}

#[test]
fn test_missing_dir_is_user_error() -> Result<()> {
  let project = TestProject::new()?;

  let run = run_preflight(&project.path, &["--dir", "does-not-exist"])?;

  assert_eq!(run.code, Some(2));
  assert!(run.stderr.contains("Project directory not found"));

  Ok(())
}

#[test]
fn test_list_checks_in_run_order() -> Result<()> {
  let project = TestProject::new()?;

  let run = run_preflight(&project.path, &["--list-checks"])?;

  assert_eq!(run.code, Some(0));
  let names: Vec<&str> = run
    .stdout
    .lines()
    .filter_map(|line| line.trim().strip_prefix("• "))
    .filter_map(|line| line.split(':').next())
    .collect();
  assert_eq!(
    names,
    vec![
      "env-file",
      "tls-material",
      "required-files",
      "required-dirs",
      "ignore-file",
      "build-script",
      "security-headers",
    ]
  );
  // Listing must not touch the project
  assert!(!project.exists("logs"));

  Ok(())
}

#[test]
fn test_list_checks_rejects_dir() -> Result<()> {
  let project = TestProject::new()?;

  let dir = project.path.to_string_lossy().into_owned();
  let run = run_preflight(&project.path, &["--list-checks", "--dir", &dir])?;

  assert_eq!(run.code, Some(2));
  assert!(!run.stdout.contains("Registered checks"));

  Ok(())
}
