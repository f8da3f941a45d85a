//! Human-readable rendering of a checklist run
//!
//! Rendering is kept separate from printing so the summary text can be tested.

use crate::checks::{CheckResult, Severity};
use crate::core::config::PreflightConfig;
use crate::core::error::ExitCode;

const RULE_WIDTH: usize = 60;
const BANNER_WIDTH: usize = 55;

/// Banner printed before the first check
pub fn render_banner(project_name: &str) -> String {
  let border = "═".repeat(BANNER_WIDTH);
  let title = format!("     {} - Security Check", project_name);
  let subtitle = "     Validating deployment configuration";

  format!(
    "╔{border}╗\n║{title:<width$}║\n║{subtitle:<width$}║\n╚{border}╝\n",
    width = BANNER_WIDTH
  )
}

/// Summary printed after the last check
pub fn render_summary(result: &CheckResult, config: &PreflightConfig) -> String {
  let rule = "=".repeat(RULE_WIDTH);
  let mut lines = vec![
    String::new(),
    rule.clone(),
    "📊 SECURITY CHECK SUMMARY".to_string(),
    rule.clone(),
    String::new(),
    format!("✅ Checks passed: {}", result.passed_count),
    format!("❌ Checks failed: {}", result.failed_count),
    format!("⚠️  Warnings: {}", result.warnings.len()),
  ];

  for (severity, heading) in [
    (Severity::Issue, "🚨 CRITICAL ISSUES (Must fix before deployment):"),
    (Severity::Warning, "⚠️  WARNINGS (Should address):"),
  ] {
    let findings = result.findings(severity);
    if findings.is_empty() {
      continue;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(findings.iter().map(|f| format!("  {} {}", severity.icon(), f)));
  }

  lines.push(String::new());
  if result.is_clean() {
    lines.push("🎉 All security checks passed! Ready for deployment.".to_string());
    lines.push(String::new());
    lines.push("Next steps:".to_string());
    for (step, args) in ["build", "up -d", "logs -f"].iter().enumerate() {
      lines.push(format!("  {}. docker-compose -f {} {}", step + 1, config.compose_file, args));
    }
  } else if result.is_deployable() {
    lines.push("✅ No critical issues found. Review warnings before deployment.".to_string());
  } else {
    lines.push("❌ Critical issues found. Please fix before deployment.".to_string());
  }

  lines.push(String::new());
  lines.push(rule);

  let mut out = lines.join("\n");
  out.push('\n');
  out
}

/// Exit status for a finished run: failure iff any issue was recorded
pub fn exit_code(result: &CheckResult) -> ExitCode {
  if result.is_deployable() {
    ExitCode::Success
  } else {
    ExitCode::Blocked
  }
}
