use crate::core::error::{ConfigError, PreflightError, PreflightResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment file inspected by the env-file check
pub const ENV_FILE: &str = ".env";

/// Variables that must be assigned (`NAME=`) in the environment file
pub const REQUIRED_ENV_VARS: &[&str] = &[
  "SECRET_KEY",
  "DB_PASSWORD",
  "DB_NAME",
  "DB_USER",
  "ALLOWED_HOSTS",
  "DEBUG",
  "DJANGO_ENV",
];

/// (variable, suspicious substring) pairs; matched case-insensitively over the whole file
pub const WEAK_VALUES: &[(&str, &str)] = &[
  ("SECRET_KEY", "django-insecure"),
  ("DB_PASSWORD", "postgres"),
  ("DEBUG", "True"),
  ("SECRET_KEY", "change"),
  ("SECRET_KEY", "your-secret"),
];

pub const TLS_DIR: &str = "nginx_ssl";
pub const TLS_CERT_FILE: &str = "fullchain.pem";
pub const TLS_KEY_FILE: &str = "privkey.pem";

/// Deployment artifacts that block deployment when absent
pub const REQUIRED_FILES: &[&str] = &[
  "Dockerfile.prod",
  "docker-compose.prod.yml",
  "entrypoint.prod.sh",
  "nginx.prod.conf",
];

/// Directories created on demand by the required-dirs check
pub const REQUIRED_DIRS: &[&str] = &["logs", "db_backups", "nginx_ssl"];

pub const IGNORE_FILE: &str = ".gitignore";

/// Sensitive paths that should appear in the ignore file
pub const IGNORE_PATTERNS: &[&str] = &[".env", "*.pem", "*.key", "db_backups", "logs"];

pub const BUILD_SCRIPT: &str = "build_secure.py";

pub const WEB_SERVER_CONFIG: &str = "nginx.prod.conf";

pub const SECURITY_HEADERS: &[&str] = &[
  "X-Frame-Options",
  "X-Content-Type-Options",
  "X-XSS-Protection",
  "Strict-Transport-Security",
];

pub const DEFAULT_PROJECT_NAME: &str = "Deployment";
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.prod.yml";

/// File name written by `deploy-preflight init`
pub const CONFIG_FILE_NAME: &str = "preflight.toml";

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// Checklist tables for deploy-preflight
///
/// Searched in order: preflight.toml, .preflight.toml, .config/preflight.toml.
/// Every field is optional; anything left out keeps the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreflightConfig {
  /// Title shown in the banner
  pub project_name: String,
  /// Compose file named in the next-steps guidance
  pub compose_file: String,
  pub env: EnvConfig,
  pub tls: TlsConfig,
  pub artifacts: ArtifactsConfig,
  pub directories: DirectoriesConfig,
  pub ignore: IgnoreConfig,
  pub build: BuildConfig,
  pub headers: HeadersConfig,
}

impl Default for PreflightConfig {
  fn default() -> Self {
    Self {
      project_name: DEFAULT_PROJECT_NAME.to_string(),
      compose_file: DEFAULT_COMPOSE_FILE.to_string(),
      env: EnvConfig::default(),
      tls: TlsConfig::default(),
      artifacts: ArtifactsConfig::default(),
      directories: DirectoriesConfig::default(),
      ignore: IgnoreConfig::default(),
      build: BuildConfig::default(),
      headers: HeadersConfig::default(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
  pub file: String,
  pub required_vars: Vec<String>,
  pub weak_values: Vec<WeakValue>,
}

impl Default for EnvConfig {
  fn default() -> Self {
    Self {
      file: ENV_FILE.to_string(),
      required_vars: strings(REQUIRED_ENV_VARS),
      weak_values: WEAK_VALUES
        .iter()
        .map(|(var, pattern)| WeakValue {
          var: var.to_string(),
          pattern: pattern.to_string(),
        })
        .collect(),
    }
  }
}

/// A default or placeholder value that should never reach production
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeakValue {
  /// Variable named in the warning
  pub var: String,
  /// Substring searched for, ignoring case
  pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TlsConfig {
  pub dir: String,
  pub cert_file: String,
  pub key_file: String,
}

impl Default for TlsConfig {
  fn default() -> Self {
    Self {
      dir: TLS_DIR.to_string(),
      cert_file: TLS_CERT_FILE.to_string(),
      key_file: TLS_KEY_FILE.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactsConfig {
  pub files: Vec<String>,
}

impl Default for ArtifactsConfig {
  fn default() -> Self {
    Self {
      files: strings(REQUIRED_FILES),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoriesConfig {
  pub required: Vec<String>,
}

impl Default for DirectoriesConfig {
  fn default() -> Self {
    Self {
      required: strings(REQUIRED_DIRS),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IgnoreConfig {
  pub file: String,
  pub patterns: Vec<String>,
}

impl Default for IgnoreConfig {
  fn default() -> Self {
    Self {
      file: IGNORE_FILE.to_string(),
      patterns: strings(IGNORE_PATTERNS),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
  pub script: String,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      script: BUILD_SCRIPT.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadersConfig {
  pub config_file: String,
  pub required: Vec<String>,
}

impl Default for HeadersConfig {
  fn default() -> Self {
    Self {
      config_file: WEB_SERVER_CONFIG.to_string(),
      required: strings(SECURITY_HEADERS),
    }
  }
}

impl PreflightConfig {
  /// Find config file in search order: preflight.toml, .preflight.toml, .config/preflight.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join(CONFIG_FILE_NAME),
      path.join(".preflight.toml"),
      path.join(".config").join(CONFIG_FILE_NAME),
    ];

    candidates.into_iter().find(|p| p.is_file())
  }

  /// Load config for a project root, falling back to the built-in tables
  pub fn load(project_root: &Path) -> PreflightResult<Self> {
    match Self::find_config_path(project_root) {
      Some(config_path) => Self::load_from(&config_path),
      None => Ok(Self::default()),
    }
  }

  /// Load config from an explicit file
  pub fn load_from(config_path: &Path) -> PreflightResult<Self> {
    if !config_path.is_file() {
      return Err(
        ConfigError::NotFound {
          path: config_path.to_path_buf(),
        }
        .into(),
      );
    }

    // An unreadable config is the user's to fix, unlike other I/O failures
    let content = fs::read_to_string(config_path).map_err(|err| {
      PreflightError::message(format!("Failed to read config from {}", config_path.display()))
        .context(format!("I/O error: {}", err))
    })?;
    let config: PreflightConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .validate()
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Save config as preflight.toml in the project root
  pub fn save(&self, project_root: &Path, force: bool) -> PreflightResult<PathBuf> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
      return Err(ConfigError::AlreadyExists { path: config_path }.into());
    }

    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(config_path)
  }

  /// Reject empty paths and empty table entries
  pub fn validate(&self) -> PreflightResult<()> {
    let paths = [
      ("env.file", &self.env.file),
      ("tls.dir", &self.tls.dir),
      ("tls.cert_file", &self.tls.cert_file),
      ("tls.key_file", &self.tls.key_file),
      ("ignore.file", &self.ignore.file),
      ("build.script", &self.build.script),
      ("headers.config_file", &self.headers.config_file),
      ("compose_file", &self.compose_file),
    ];
    for (field, value) in paths {
      if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
      }
    }

    let tables = [
      ("env.required_vars", &self.env.required_vars),
      ("artifacts.files", &self.artifacts.files),
      ("directories.required", &self.directories.required),
      ("ignore.patterns", &self.ignore.patterns),
      ("headers.required", &self.headers.required),
    ];
    for (field, entries) in tables {
      if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(invalid(field, "entries must not be empty"));
      }
    }

    for weak in &self.env.weak_values {
      if weak.var.trim().is_empty() || weak.pattern.is_empty() {
        return Err(invalid("env.weak_values", "each entry needs a var and a pattern"));
      }
    }

    Ok(())
  }
}

fn invalid(field: &str, reason: &str) -> PreflightError {
  ConfigError::Invalid {
    field: field.to_string(),
    reason: reason.to_string(),
  }
  .into()
}
