//! Deployment checklist infrastructure
//!
//! Every check implements the `Check` trait and appends to one shared `CheckResult`.
//! The runner executes them in a fixed order and never short-circuits.
//!
//! # Built-in Checks (run order)
//!
//! - **env-file**: environment file presence, permissions, required variables, weak values
//! - **tls-material**: full-chain certificate and private key in the TLS directory
//! - **required-files**: Dockerfile, compose file, entrypoint, nginx config
//! - **required-dirs**: logs/backups/TLS directories (created when missing)
//! - **ignore-file**: sensitive paths listed in .gitignore
//! - **build-script**: secure build script present
//! - **security-headers**: HTTP security headers in the nginx config
//!
//! # Example
//!
//! ```rust,ignore
//! let ctx = CheckContext::new(".", PreflightConfig::default());
//! let result = create_default_runner().run_all(&ctx);
//!
//! for issue in &result.issues {
//!   println!("❌ {}", issue);
//! }
//! ```

mod artifacts;
mod build_script;
mod directories;
mod env_file;
mod ignore_file;
mod runner;
mod security_headers;
mod tls;
mod trait_def;

pub use runner::create_default_runner;
pub use trait_def::{Check, CheckContext, CheckResult, Severity};

// Individual checks are registered in create_default_runner() rather than exported
