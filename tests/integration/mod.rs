//! Integration tests for deploy-preflight
//!
//! Each test builds a throwaway project directory and runs the compiled binary against it.

mod test_init;
mod test_preflight;
