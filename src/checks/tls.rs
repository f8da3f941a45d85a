//! TLS certificate material checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::PreflightResult;

/// Check that the certificate chain and private key are in place
pub struct TlsMaterialCheck;

impl Check for TlsMaterialCheck {
  fn name(&self) -> &str {
    "tls-material"
  }

  fn description(&self) -> &str {
    "Validates the TLS directory holds a full-chain certificate and a private key"
  }

  fn heading(&self) -> &str {
    "Checking SSL certificates"
  }

  fn run(&self, ctx: &CheckContext, result: &mut CheckResult) -> PreflightResult<()> {
    let tls = &ctx.config.tls;
    let tls_dir = ctx.path(&tls.dir);

    // A missing directory is advisory; required-dirs creates it later in the run
    if !tls_dir.exists() {
      result.warn(format!("{} directory not found", tls.dir));
      return Ok(());
    }

    if tls_dir.join(&tls.cert_file).exists() {
      println!("  ✓ SSL certificate found");
      result.pass();
    } else {
      result.issue(format!("SSL certificate ({}) not found", tls.cert_file));
    }

    if tls_dir.join(&tls.key_file).exists() {
      println!("  ✓ SSL private key found");
      result.pass();
    } else {
      result.issue(format!("SSL private key ({}) not found", tls.key_file));
    }

    Ok(())
  }
}
