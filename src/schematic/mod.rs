//! The themes add-on pipeline
//!
//! A fixed ordered chain of three idempotent steps applied to a project tree:
//! 1. schedule a dependency-installation task (unless skipped),
//! 2. ensure the manifest declares the themes package,
//! 3. ensure the primary stylesheet imports the chosen theme.
//!
//! Re-running the chain on an already-mutated tree produces no further change.

pub mod manifest;
pub mod styles;

use crate::tasks::{InstallTask, TaskScheduler};
use crate::tree::{FileTree, TreeError};
use crate::workspace::ProjectConfig;
use thiserror::Error;

/// Package the schematic installs.
pub const THEMES_PACKAGE: &str = "@kikstart-playground/themes";
/// Version constraint used when the manifest has no entry yet.
pub const THEMES_VERSION: &str = "^1.3.3";

#[derive(Error, Debug)]
pub enum SchematicError {
    #[error("Can not read styles from project configuration")]
    ConfigUnreadable,
    #[error("Can not find stylesheet: {0}")]
    StylesheetMissing(String),
    #[error("Invalid manifest {path}: {reason}")]
    ManifestInvalid { path: String, reason: String },
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Caller-supplied options for one schematic run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Project to operate on; `None` means the workspace default project.
    pub project: Option<String>,
    /// Theme variant to import (selects the package subpath).
    pub theme: String,
    /// Skip scheduling the install task.
    pub skip_install: bool,
}

/// Run the pipeline against a project tree.
///
/// `config` must already be resolved for the target project (default-project
/// lookup happens once, at the call site). Steps run strictly in sequence;
/// the first error aborts the run. The install task is scheduled before the
/// stylesheet guards run, matching the source behavior, so a failed run can
/// leave a task queued (see DESIGN.md).
pub fn run(
    tree: &mut dyn FileTree,
    config: &ProjectConfig,
    scheduler: &mut dyn TaskScheduler,
    options: &Options,
) -> Result<(), SchematicError> {
    add_tasks(scheduler, options);
    manifest::add_package(tree)?;
    styles::add_styles(tree, config, options)?;
    Ok(())
}

/// Step 1: register the install request.
fn add_tasks(scheduler: &mut dyn TaskScheduler, options: &Options) {
    if !options.skip_install {
        scheduler.schedule(InstallTask::new("."));
    }
}
