//! Error types for deploy-preflight with contextual messages and exit codes
//!
//! Checklist findings (issues and warnings) are data and never travel through
//! this module. `PreflightError` covers failures of the tool itself: a broken
//! preflight.toml, an unwritable project root, bad arguments.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for deploy-preflight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Checklist completed with no blocking issues (warnings allowed)
  Success = 0,
  /// Checklist recorded at least one blocking issue
  Blocked = 1,
  /// User error (config, invalid args, refusing to overwrite)
  User = 2,
  /// System error (I/O outside the checklist)
  System = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for deploy-preflight
#[derive(Debug)]
pub enum PreflightError {
  /// Configuration errors
  Config(ConfigError),

  /// I/O errors, optionally with what was being attempted
  Io {
    source: io::Error,
    context: Option<String>,
  },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl PreflightError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    PreflightError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    PreflightError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  ///
  /// I/O errors keep their variant so they still exit as system errors.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      PreflightError::Message { message, context, help } => PreflightError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      PreflightError::Io { source, context } => PreflightError::Io {
        source,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      other => other,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      PreflightError::Config(_) => ExitCode::User,
      PreflightError::Io { .. } => ExitCode::System,
      PreflightError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      PreflightError::Config(e) => e.help_message(),
      PreflightError::Message { help, .. } => help.clone(),
      PreflightError::Io { .. } => None,
    }
  }
}

impl fmt::Display for PreflightError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PreflightError::Config(e) => write!(f, "{}", e),
      PreflightError::Io { source, context } => {
        if let Some(ctx) = context {
          writeln!(f, "{}", ctx)?;
        }
        write!(f, "I/O error: {}", source)
      }
      PreflightError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for PreflightError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PreflightError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for PreflightError {
  fn from(err: io::Error) -> Self {
    PreflightError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<ConfigError> for PreflightError {
  fn from(err: ConfigError) -> Self {
    PreflightError::Config(err)
  }
}

impl From<toml_edit::de::Error> for PreflightError {
  fn from(err: toml_edit::de::Error) -> Self {
    PreflightError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for PreflightError {
  fn from(err: toml_edit::ser::Error) -> Self {
    PreflightError::message(format!("TOML serialization error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Explicit --config path does not exist
  NotFound { path: PathBuf },

  /// A field failed validation
  Invalid { field: String, reason: String },

  /// preflight.toml already exists and --force was not given
  AlreadyExists { path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Run `deploy-preflight init` to write a preflight.toml with the built-in tables.".to_string())
      }
      ConfigError::Invalid { .. } => Some("Fix the field or delete it to fall back to the built-in default.".to_string()),
      ConfigError::AlreadyExists { .. } => Some("Pass --force to overwrite the existing file.".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Configuration file not found: {}", path.display())
      }
      ConfigError::Invalid { field, reason } => {
        write!(f, "Invalid config field '{}': {}", field, reason)
      }
      ConfigError::AlreadyExists { path } => {
        write!(f, "Configuration already exists: {}", path.display())
      }
    }
  }
}

/// Result type alias for deploy-preflight
pub type PreflightResult<T> = Result<T, PreflightError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> PreflightResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> PreflightResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<PreflightError>,
{
  fn context(self, ctx: impl Into<String>) -> PreflightResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> PreflightResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &PreflightError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
