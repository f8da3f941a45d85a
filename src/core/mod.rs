//! Core building blocks for deploy-preflight
//!
//! - **config**: checklist tables (built-in defaults, preflight.toml overrides)
//! - **error**: tool error types with contextual help messages and exit codes

pub mod config;
pub mod error;
