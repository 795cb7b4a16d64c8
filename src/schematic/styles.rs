//! Stylesheet import insertion

use crate::schematic::{Options, SchematicError, THEMES_PACKAGE};
use crate::tree::FileTree;
use crate::workspace::ProjectConfig;
use tracing::{error, info};

/// Build the import line for the target stylesheet.
///
/// SCSS targets import the package's SCSS subpath so theme variables stay
/// available; anything else gets the compiled CSS bundle.
fn style_import(style_path: &str, theme: &str) -> String {
    if style_path.ends_with(".scss") {
        format!("@import \"~{}/scss/{}\";", THEMES_PACKAGE, theme)
    } else {
        format!("@import \"~{}/css/{}.css\";", THEMES_PACKAGE, theme)
    }
}

/// Ensure the project's primary stylesheet imports the chosen theme.
///
/// The target is the first entry of the project's configured styles list.
/// Both guard checks run before any write, so a failed run leaves the
/// stylesheet untouched.
pub fn add_styles(
    tree: &mut dyn FileTree,
    config: &ProjectConfig,
    options: &Options,
) -> Result<(), SchematicError> {
    let styles = config.styles();
    if styles.is_empty() {
        error!("Can not read styles");
        return Err(SchematicError::ConfigUnreadable);
    }
    let style_path = &styles[0];

    if !tree.exists(style_path) {
        error!(path = %style_path, "Can not find stylesheet");
        return Err(SchematicError::StylesheetMissing(style_path.clone()));
    }
    let content = tree.read(style_path)?;

    let import = style_import(style_path, &options.theme);
    if !content.contains(&import) {
        info!(path = %style_path, "Updating stylesheet");
        tree.overwrite(style_path, &format!("{}\n{}", content, import))?;
    }
    Ok(())
}
