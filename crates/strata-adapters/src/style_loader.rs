//! Filesystem style loader.
//!
//! Reads style templates from a flat directory of `.xml` files. The file stem
//! becomes the style name, so `styles/isolines.xml` defines the style
//! `isolines`. Subdirectories are not descended into.
//!
//! # Directory layout expected
//!
//! ```text
//! styles/
//! ├── default.xml      ← style "default"
//! ├── isolines.xml     ← style "isolines"
//! └── notes.txt        ← ignored (wrong extension)
//! ```

use std::{fs, path::Path};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use strata_core::domain::TemplateSource;
use strata_core::error::{CatalogueError, CatalogueResult};

/// Load every `.xml` template directly under `dir`.
///
/// A missing directory is not an error: deployments without local styles get
/// an empty list and run on the bundled set alone. Files that cannot be read,
/// or whose name yields no UTF-8 stem, are skipped with a `WARN` log so one
/// bad file never hides the rest of the directory.
///
/// # Errors
///
/// [`CatalogueError::Configuration`] when `dir` exists but cannot be walked
/// (permissions, I/O failure).
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_dir(dir: &Path) -> CatalogueResult<Vec<TemplateSource>> {
    if !dir.exists() {
        debug!("styles directory does not exist, nothing to load");
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| CatalogueError::Configuration {
            message: format!("failed to read styles directory '{}': {e}", dir.display()),
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "xml") {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping style file with non-UTF-8 name");
            continue;
        };

        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(style = name, "loaded style template");
                sources.push(TemplateSource::new(name, text));
            }
            Err(e) => {
                // One unreadable file must not block the others.
                warn!(path = %path.display(), error = %e, "skipping unreadable style file");
            }
        }
    }

    debug!(count = sources.len(), "finished loading styles directory");
    Ok(sources)
}
