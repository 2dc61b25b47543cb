//! Style template scanner.
//!
//! Turns one template's raw text into a [`StyleDescriptor`] by looking for
//! two placeholder grammars:
//!
//! - `$paletteName` - the style colours its output through a palette.
//! - `$layerName` / `$layerName-<role>` - the style plots the named layer
//!   itself, or a child of it identified by role (`\w+` after the dash).
//!
//! Scanning is a pure function over the whole text: line order, repetition,
//! and surrounding content are irrelevant, and no input ever makes it fail.
//! Malformed or empty text simply yields a descriptor with every field at its
//! default.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use super::style::StyleDescriptor;

const PALETTE_TOKEN: &str = "$paletteName";

/// Matches one layer placeholder. Capture 1 is the role when the occurrence
/// is suffixed; an occurrence without a `-<role>` suffix leaves it empty.
fn layer_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$layerName(?:-(\w+))?").expect("layer token pattern"))
}

/// Scan template text into a descriptor named `name`.
///
/// Duplicated placeholders collapse: `$layerName-mask` twice still yields a
/// single `mask` entry, and a second `$paletteName` changes nothing.
pub fn scan(name: &str, text: &str) -> StyleDescriptor {
    let uses_palette = text.contains(PALETTE_TOKEN);

    let mut needs_named_layer = false;
    let mut required_child_roles = BTreeSet::new();

    for capture in layer_token().captures_iter(text) {
        match capture.get(1) {
            Some(role) => {
                required_child_roles.insert(role.as_str().to_owned());
            }
            // `$layerName` with no role suffix: the style plots the layer itself.
            None => needs_named_layer = true,
        }
    }

    StyleDescriptor::new(name, uses_palette, needs_named_layer, required_child_roles)
}
