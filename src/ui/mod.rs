//! Terminal output for deploy-preflight

pub mod report;
