use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use sprout_util::errors::SproutError;

use crate::DEFAULT_PACKAGE_MANAGER;

/// Global user configuration loaded from `~/.sprout/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub install: InstallConfig,
}

/// Template settings from `[template]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Overrides the template built into the binary.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Dependency installation settings from `[install]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default, rename = "on-failure")]
    pub on_failure: InstallPolicy,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            on_failure: InstallPolicy::default(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_PACKAGE_MANAGER.to_string()
}

fn default_args() -> Vec<String> {
    vec!["install".to_string()]
}

/// What to do when the package manager fails or cannot be started.
///
/// Installation never rolls back the generated project; the policy only
/// decides how loudly the failure is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallPolicy {
    /// Report success regardless of the installer's outcome.
    Ignore,
    /// Report success, but print a warning.
    #[default]
    Warn,
    /// Exit with an error.
    Fail,
}

impl FromStr for InstallPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown install policy '{other}' (expected ignore, warn or fail)"
            )),
        }
    }
}

impl fmt::Display for InstallPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Fail => "fail",
        };
        f.write_str(s)
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.sprout/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| SproutError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            SproutError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the Sprout data directory (`~/.sprout/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".sprout")
}
