//! Operation: install dependencies with the external package manager.

use std::path::Path;

use sprout_core::config::{InstallConfig, InstallPolicy};
use sprout_util::errors::SproutError;
use sprout_util::process::CommandBuilder;
use sprout_util::progress;

/// How the package manager run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Succeeded,
    /// The installer ran and exited unsuccessfully. `code` is `None` when it
    /// was killed by a signal.
    Failed { code: Option<i32> },
    /// The installer could not be started at all.
    SpawnFailed { reason: String },
    Skipped,
}

impl InstallOutcome {
    /// Human-readable reason for a failed run, `None` otherwise.
    fn failure_message(&self, program: &str) -> Option<String> {
        match self {
            Self::Succeeded | Self::Skipped => None,
            Self::Failed { code: Some(code) } => {
                Some(format!("`{program}` exited with status {code}"))
            }
            Self::Failed { code: None } => Some(format!("`{program}` was terminated")),
            Self::SpawnFailed { reason } => Some(format!("could not run `{program}`: {reason}")),
        }
    }
}

/// The package-manager invocation run inside a new project.
#[derive(Debug, Clone)]
pub struct Installer {
    program: String,
    args: Vec<String>,
}

impl Installer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &InstallConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command for `project_dir`.
    ///
    /// On Windows package managers ship as `.cmd` shims, which only resolve
    /// through the command interpreter.
    pub fn command(&self, project_dir: &Path) -> CommandBuilder {
        let builder = if cfg!(windows) {
            CommandBuilder::new("cmd").args(["/C", self.program.as_str()])
        } else {
            CommandBuilder::new(self.program.as_str())
        };
        builder.args(self.args.iter().cloned()).cwd(project_dir)
    }

    /// Run the installer with inherited stdio and wait for it to exit.
    pub fn run(&self, project_dir: &Path) -> InstallOutcome {
        let cmd = self.command(project_dir);
        progress::status("Installing", &format!("dependencies with `{}`", cmd.display()));

        match cmd.run_inherited() {
            Ok(status) if status.success() => InstallOutcome::Succeeded,
            Ok(status) => InstallOutcome::Failed {
                code: status.code(),
            },
            Err(e) => InstallOutcome::SpawnFailed {
                reason: e.to_string(),
            },
        }
    }
}

/// Decide whether an install outcome aborts the run.
///
/// Only [`InstallPolicy::Fail`] turns a failed install into an error; the
/// project directory is kept either way.
pub fn apply_policy(
    outcome: &InstallOutcome,
    policy: InstallPolicy,
    program: &str,
) -> miette::Result<()> {
    let Some(message) = outcome.failure_message(program) else {
        return Ok(());
    };

    match policy {
        InstallPolicy::Ignore => {
            tracing::debug!("Ignoring install failure: {message}");
            Ok(())
        }
        InstallPolicy::Warn => {
            progress::status_warn("Warning", &format!("dependency installation failed: {message}"));
            Ok(())
        }
        InstallPolicy::Fail => Err(SproutError::InstallFailed { message }.into()),
    }
}
