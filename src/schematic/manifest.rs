//! Manifest (package.json) dependency registration

use crate::schematic::{SchematicError, THEMES_PACKAGE, THEMES_VERSION};
use crate::tree::FileTree;
use serde_json::{json, Value};
use tracing::info;

const MANIFEST_PATH: &str = "package.json";

/// Update a JSON document in the tree through a mutation closure.
///
/// The document is written back only when the mutation actually changed it,
/// so re-running an already-applied update leaves the file byte-identical.
/// Key order is preserved across the round trip.
pub fn update_json_in_tree<F>(
    tree: &mut dyn FileTree,
    path: &str,
    update: F,
) -> Result<(), SchematicError>
where
    F: FnOnce(&mut Value),
{
    let content = tree.read(path)?;
    let mut document: Value =
        serde_json::from_str(&content).map_err(|e| SchematicError::ManifestInvalid {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    let before = document.clone();
    update(&mut document);

    if document != before {
        let serialized = serde_json::to_string_pretty(&document)
            .map_err(|e| SchematicError::ManifestInvalid {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        tree.overwrite(path, &format!("{}\n", serialized))?;
    }
    Ok(())
}

/// Ensure the manifest declares a dependency on the themes package.
///
/// Creates the `dependencies` section if absent and inserts the package with
/// its default version constraint. An existing entry is left untouched so a
/// user-pinned version is never overwritten.
pub fn add_package(tree: &mut dyn FileTree) -> Result<(), SchematicError> {
    update_json_in_tree(tree, MANIFEST_PATH, |manifest| {
        let Some(root) = manifest.as_object_mut() else {
            return;
        };

        let dependencies = root
            .entry("dependencies")
            .or_insert_with(|| json!({}));

        if let Some(dependencies) = dependencies.as_object_mut() {
            if !dependencies.contains_key(THEMES_PACKAGE) {
                info!(package = THEMES_PACKAGE, version = THEMES_VERSION, "Adding dependency");
                dependencies.insert(THEMES_PACKAGE.to_string(), json!(THEMES_VERSION));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryTree;

    #[test]
    fn test_creates_dependencies_section() {
        let mut tree = MemoryTree::new().with_file("package.json", r#"{"name": "app"}"#);
        add_package(&mut tree).unwrap();

        let manifest: Value = serde_json::from_str(&tree.read("package.json").unwrap()).unwrap();
        assert_eq!(
            manifest["dependencies"][THEMES_PACKAGE],
            json!(THEMES_VERSION)
        );
        // Existing keys survive
        assert_eq!(manifest["name"], json!("app"));
    }

    #[test]
    fn test_preserves_existing_pin() {
        let mut tree = MemoryTree::new().with_file(
            "package.json",
            r#"{"dependencies": {"@kikstart-playground/themes": "^2.0.0"}}"#,
        );
        add_package(&mut tree).unwrap();

        let manifest: Value = serde_json::from_str(&tree.read("package.json").unwrap()).unwrap();
        assert_eq!(manifest["dependencies"][THEMES_PACKAGE], json!("^2.0.0"));
    }

    #[test]
    fn test_no_write_when_unchanged() {
        let mut tree = MemoryTree::new().with_file("package.json", r#"{"name": "app"}"#);
        add_package(&mut tree).unwrap();
        let first = tree.read("package.json").unwrap();

        add_package(&mut tree).unwrap();
        assert_eq!(tree.read("package.json").unwrap(), first);
    }

    #[test]
    fn test_preserves_key_order() {
        let mut tree = MemoryTree::new().with_file(
            "package.json",
            r#"{"name": "app", "dependencies": {"zzz": "1.0.0", "aaa": "2.0.0"}}"#,
        );
        add_package(&mut tree).unwrap();

        let content = tree.read("package.json").unwrap();
        let zzz = content.find("\"zzz\"").unwrap();
        let aaa = content.find("\"aaa\"").unwrap();
        assert!(zzz < aaa, "existing dependency order must be preserved");
    }

    #[test]
    fn test_invalid_manifest() {
        let mut tree = MemoryTree::new().with_file("package.json", "not json");
        assert!(matches!(
            add_package(&mut tree),
            Err(SchematicError::ManifestInvalid { .. })
        ));
    }
}
