//! CLI argument definitions for Sprout.
//!
//! Uses `clap` derive macros. The surface is a single positional project name
//! plus a handful of options that override `~/.sprout/config.toml`.

use std::path::PathBuf;

use clap::Parser;
use sprout_core::config::InstallPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "sprout",
    version,
    about = "Create a new project from a template",
    long_about = "Sprout creates a directory named after your project, copies the built-in \
                  template into it, sets the name in package.json and installs dependencies."
)]
pub struct Cli {
    /// Project name, also used as the directory name
    pub name: Option<String>,

    /// Template directory to copy instead of the built-in one
    #[arg(long, env = "SPROUT_TEMPLATE_DIR", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Do not run the package manager after scaffolding
    #[arg(long)]
    pub skip_install: bool,

    /// What to do when dependency installation fails: ignore, warn, fail
    #[arg(long, value_name = "POLICY")]
    pub on_install_failure: Option<InstallPolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
