//! Workspace configuration parsing (angular.json / workspace.json)

use crate::tree::FileTree;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Workspace config files probed in order.
const CONFIG_FILES: [&str; 2] = ["angular.json", "workspace.json"];

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("No workspace config found (looked for angular.json, workspace.json)")]
    ConfigNotFound,
    #[error("Failed to read workspace config: {0}")]
    ReadError(String),
    #[error("Failed to parse workspace config: {0}")]
    ParseError(String),
    #[error("Project not found in workspace: {0}")]
    ProjectNotFound(String),
    #[error("Workspace has no default project and none was given")]
    NoDefaultProject,
}

/// Workspace configuration from angular.json or workspace.json
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WorkspaceConfig {
    #[serde(default, rename = "defaultProject")]
    pub default_project: Option<String>,
    #[serde(default)]
    pub projects: HashMap<String, ProjectConfig>,
}

/// Per-project configuration (read-only view)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub architect: ArchitectSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ArchitectSection {
    #[serde(default)]
    pub build: BuildTarget,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BuildTarget {
    #[serde(default)]
    pub options: BuildOptions,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BuildOptions {
    #[serde(default)]
    pub styles: Vec<String>,
}

impl WorkspaceConfig {
    /// Load the workspace config through the tree port.
    ///
    /// Probes angular.json first, then workspace.json (Nx layout).
    pub fn load(tree: &dyn FileTree) -> Result<Self, WorkspaceError> {
        for file in CONFIG_FILES {
            if tree.exists(file) {
                let content = tree
                    .read(file)
                    .map_err(|e| WorkspaceError::ReadError(e.to_string()))?;
                return serde_json::from_str(&content)
                    .map_err(|e| WorkspaceError::ParseError(e.to_string()));
            }
        }
        Err(WorkspaceError::ConfigNotFound)
    }

    /// Resolve the project the schematic operates on.
    ///
    /// An explicit name wins; otherwise the workspace's default project is
    /// used. Resolved once at pipeline entry, never re-queried.
    pub fn resolve_project(&self, name: Option<&str>) -> Result<&ProjectConfig, WorkspaceError> {
        let name = match name {
            Some(n) => n,
            None => self
                .default_project
                .as_deref()
                .ok_or(WorkspaceError::NoDefaultProject)?,
        };

        self.projects
            .get(name)
            .ok_or_else(|| WorkspaceError::ProjectNotFound(name.to_string()))
    }
}

impl ProjectConfig {
    /// The ordered build-time stylesheet list for this project.
    pub fn styles(&self) -> &[String] {
        &self.architect.build.options.styles
    }
}
