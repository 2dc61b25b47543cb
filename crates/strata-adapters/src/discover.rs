//! Two-origin style discovery: bundled styles plus an optional override
//! directory.
//!
//! The override directory is usually taken from `$STRATA_STYLES_DIR` or the
//! CLI `--styles-dir` flag; passing `None` runs on the bundled set alone. An
//! override file with the same stem as a bundled style replaces that style's
//! descriptor entirely.

use std::path::Path;

use tracing::{info, instrument, warn};

use strata_core::domain::{repository, StyleSet};
use strata_core::error::CatalogueResult;

use crate::{bundled, style_loader};

/// Build the complete style table for one server start.
///
/// # Errors
///
/// [`crate::style_loader::load_dir`] errors when the override directory
/// exists but cannot be read; bundled styles alone never fail.
#[instrument(skip(override_dir), fields(override_dir = ?override_dir.map(Path::display)))]
pub fn discover_styles(override_dir: Option<&Path>) -> CatalogueResult<StyleSet> {
    let overrides = match override_dir {
        Some(dir) => style_loader::load_dir(dir)?,
        None => Vec::new(),
    };

    let styles = repository::discover(bundled::bundled_sources(), overrides);

    if styles.is_empty() {
        // Unreachable while anything ships bundled, but a server with zero
        // styles can render nothing and deserves a loud signal.
        warn!("style discovery produced an empty table");
    } else {
        info!(count = styles.len(), "style table ready");
    }

    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_override_dir_yields_bundled_set() {
        let styles = discover_styles(None).unwrap();
        assert!(styles.contains("default"));
        assert!(styles.contains("contours"));
        assert!(styles.contains("arrows"));
        assert!(styles.contains("vector"));
    }

    #[test]
    fn override_file_replaces_bundled_style() {
        let temp = TempDir::new().unwrap();
        // A "default" that no longer uses a palette.
        fs::write(temp.path().join("default.xml"), "<Raster>$layerName</Raster>").unwrap();

        let styles = discover_styles(Some(temp.path())).unwrap();
        let default = styles.get("default").unwrap();
        assert!(!default.uses_palette());
        assert!(default.needs_named_layer());
    }

    #[test]
    fn override_dir_adds_new_styles() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("isolines.xml"), "$layerName").unwrap();

        let bundled_only = discover_styles(None).unwrap();
        let styles = discover_styles(Some(temp.path())).unwrap();
        assert_eq!(styles.len(), bundled_only.len() + 1);
        assert!(styles.contains("isolines"));
    }

    #[test]
    fn missing_override_dir_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("never-created");
        let styles = discover_styles(Some(&gone)).unwrap();
        assert!(styles.contains("default"));
    }
}
