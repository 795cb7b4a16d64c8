//! Workspace configuration reading
//!
//! This module provides:
//! - Workspace config parsing (angular.json / workspace.json)
//! - Default-project resolution
//! - Per-project build options lookup (the configured stylesheet list)

pub mod config;

pub use config::{ProjectConfig, WorkspaceConfig, WorkspaceError};
