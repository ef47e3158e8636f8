//! Operation: scaffold a new project from the template.
//!
//! The steps run strictly in order: allocate the project directory for an
//! already resolved name, copy the template, patch `package.json`, install
//! dependencies.
//! Until the manifest is patched the new directory is held by a
//! [`DirGuard`](sprout_util::fs::DirGuard), so any earlier failure removes
//! it again. Installation happens after the guard is committed and never
//! rolls anything back.

use std::path::PathBuf;

use sprout_core::config::InstallPolicy;
use sprout_core::context::InvocationContext;
use sprout_core::manifest;
use sprout_core::template::Template;
use sprout_util::progress;

use crate::ops_install::{apply_policy, InstallOutcome, Installer};

/// Inputs for [`scaffold`] besides the invocation context.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub template: Template,
    /// `None` skips dependency installation.
    pub installer: Option<Installer>,
    pub on_install_failure: InstallPolicy,
}

/// What a successful scaffold produced.
#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    pub project_name: String,
    pub project_dir: PathBuf,
    pub files_copied: usize,
    pub install: InstallOutcome,
}

/// Create the project described by `ctx` according to `opts`.
///
/// The context is resolved by the caller first, so a missing name is
/// reported before anything else is read.
pub fn scaffold(
    ctx: &InvocationContext,
    opts: &ScaffoldOptions,
) -> miette::Result<ScaffoldResult> {
    tracing::debug!(
        "Scaffolding {} in {} from {}",
        ctx.project_name(),
        ctx.base_dir().display(),
        opts.template
    );

    let guard = ctx.allocate_project_dir()?;
    progress::status("Creating", ctx.project_name());

    let files_copied = opts.template.materialize(guard.path())?;
    manifest::patch_name(guard.path(), ctx.project_name())?;
    let project_dir = guard.commit();

    let install = match &opts.installer {
        Some(installer) => {
            let outcome = installer.run(&project_dir);
            apply_policy(&outcome, opts.on_install_failure, installer.program())?;
            outcome
        }
        None => {
            tracing::debug!("Skipping dependency installation");
            InstallOutcome::Skipped
        }
    };

    Ok(ScaffoldResult {
        project_name: ctx.project_name().to_string(),
        project_dir,
        files_copied,
        install,
    })
}
