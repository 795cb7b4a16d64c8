//! kikstart-schematics - add-on installer for the kikstart themes package
//!
//! Registers the themes dependency in package.json, queues an install task,
//! and appends a theme import to the project's primary stylesheet. All file
//! access goes through the [`tree::FileTree`] port so the pipeline runs
//! against a workspace on disk or an in-memory tree in tests.

pub mod schematic;
pub mod tasks;
pub mod tree;
pub mod util;
pub mod workspace;
