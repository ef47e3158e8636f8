use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Sprout operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SproutError {
    /// No project name was given, or it was empty.
    #[error("Please pass a project name as an argument")]
    #[diagnostic(code(sprout::missing_argument), help("Usage: sprout <project-name>"))]
    MissingArgument,

    /// The target project directory is already occupied.
    #[error("Folder already exists: {}", path.display())]
    #[diagnostic(
        code(sprout::directory_exists),
        help("Pick another project name or remove the existing folder")
    )]
    DirectoryAlreadyExists { path: PathBuf },

    /// Copying the template tree into the project directory failed.
    #[error("Failed to copy template from {}: {message}", path.display())]
    #[diagnostic(code(sprout::template_copy))]
    TemplateCopyFailed { path: PathBuf, message: String },

    /// The copied `package.json` could not be read or parsed.
    #[error("Failed to load manifest {}: {message}", path.display())]
    #[diagnostic(
        code(sprout::manifest_parse),
        help("The template's package.json must be a JSON object")
    )]
    ManifestParseFailed { path: PathBuf, message: String },

    /// The patched `package.json` could not be written back.
    #[error("Failed to write manifest {}: {message}", path.display())]
    #[diagnostic(code(sprout::manifest_write))]
    ManifestWriteFailed { path: PathBuf, message: String },

    /// Dependency installation failed and the install policy is `fail`.
    #[error("Dependency installation failed: {message}")]
    #[diagnostic(
        code(sprout::install),
        help("The project was created; run the install manually inside it")
    )]
    InstallFailed { message: String },

    /// Invalid or unreadable global configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.sprout/config.toml for syntax errors"))]
    Config { message: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `miette::Result<T>`.
pub type SproutResult<T> = miette::Result<T>;
