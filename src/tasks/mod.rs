//! Install task scheduling and execution
//!
//! The pipeline only *requests* an install; execution happens after all tree
//! edits have been applied. Scheduling is a request, not a tree mutation, so
//! it carries no idempotence guard.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{info, warn};

const MAX_OUTPUT_LEN: usize = 10000;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Package manager not found: {0}")]
    PackageManagerNotFound(String),
    #[error("Install failed with exit code {code:?}: {stderr}")]
    InstallFailed { code: Option<i32>, stderr: String },
    #[error("Failed to spawn install: {0}")]
    SpawnError(String),
}

/// A scheduled dependency-installation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTask {
    /// Directory the package manager runs in, relative to the workspace root.
    pub working_dir: PathBuf,
}

impl InstallTask {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

/// Port through which the pipeline registers install requests.
pub trait TaskScheduler {
    fn schedule(&mut self, task: InstallTask);
}

/// Queue of pending install tasks, drained after tree edits commit.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<InstallTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[InstallTask] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Execute all queued tasks against the workspace root, in order.
    ///
    /// Stops on the first failure.
    pub fn run_all(&self, workspace_root: &Path) -> Result<(), TaskError> {
        for task in &self.tasks {
            run_install(task, workspace_root)?;
        }
        Ok(())
    }
}

impl TaskScheduler for TaskQueue {
    fn schedule(&mut self, task: InstallTask) {
        info!(working_dir = %task.working_dir.display(), "Install task scheduled");
        self.tasks.push(task);
    }
}

/// Run one install task by spawning the package manager.
fn run_install(task: &InstallTask, workspace_root: &Path) -> Result<(), TaskError> {
    let npm = which::which("npm")
        .map_err(|_| TaskError::PackageManagerNotFound("npm".to_string()))?;

    let working_dir = workspace_root.join(&task.working_dir);
    info!(working_dir = %working_dir.display(), "Installing dependencies");

    let output = Command::new(npm)
        .arg("install")
        .current_dir(&working_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| TaskError::SpawnError(e.to_string()))?;

    if output.status.success() {
        info!(exit_code = ?output.status.code(), "Install completed successfully");
        Ok(())
    } else {
        let stderr = truncate_output(&String::from_utf8_lossy(&output.stderr));
        warn!(exit_code = ?output.status.code(), stderr = %stderr, "Install failed");
        Err(TaskError::InstallFailed {
            code: output.status.code(),
            stderr,
        })
    }
}

fn truncate_output(s: &str) -> String {
    let s = s.trim();
    if s.len() > MAX_OUTPUT_LEN {
        format!("{}... [truncated]", &s[..MAX_OUTPUT_LEN])
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_records_in_order() {
        let mut queue = TaskQueue::new();
        assert!(queue.is_empty());

        queue.schedule(InstallTask::new("."));
        queue.schedule(InstallTask::new("apps/app"));

        assert_eq!(queue.tasks().len(), 2);
        assert_eq!(queue.tasks()[0], InstallTask::new("."));
    }

    #[test]
    fn test_truncate_output() {
        let long = "x".repeat(MAX_OUTPUT_LEN + 5);
        let truncated = truncate_output(&long);
        assert!(truncated.ends_with("... [truncated]"));
        assert_eq!(truncate_output("  ok  "), "ok");
    }
}
