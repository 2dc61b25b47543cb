//! Style discovery: from template sources to the immutable [`StyleSet`].
//!
//! Discovery runs once, single-threaded, before the catalogue serves lookups.
//! Two origins feed it: the bundled styles packaged with the server, and an
//! optional override directory on the deployment. Precedence is not an
//! artefact of insertion order - each origin is scanned into its own table
//! and the two are combined by an explicit right-biased merge.

use tracing::debug;

use super::scanner;
use super::style::{StyleSet, TemplateSource};

/// Scan one origin's sources into a table.
///
/// A later source with the same name replaces an earlier one within the same
/// origin, matching the merge rule across origins. Scanning is total, so no
/// source is ever rejected here; unreadable resources were already skipped by
/// the adapter that produced the `TemplateSource` list.
pub fn scan_sources<I>(sources: I) -> StyleSet
where
    I: IntoIterator<Item = TemplateSource>,
{
    let mut set = StyleSet::new();
    for source in sources {
        let descriptor = scanner::scan(source.name(), source.text());
        debug!(
            style = source.name(),
            palette = descriptor.uses_palette(),
            named_layer = descriptor.needs_named_layer(),
            roles = descriptor.required_child_roles().len(),
            "scanned style template"
        );
        if set.insert(descriptor).is_some() {
            debug!(style = source.name(), "duplicate name within origin, replaced");
        }
    }
    set
}

/// Right-biased union: every entry of `overrides` replaces the `base` entry
/// with the same name in full. No field-level merging.
pub fn override_merge(base: StyleSet, overrides: StyleSet) -> StyleSet {
    let mut merged = base;
    for descriptor in overrides.iter() {
        if merged.insert(descriptor.clone()).is_some() {
            debug!(style = descriptor.name(), "override replaces bundled style");
        }
    }
    merged
}

/// Full discovery: bundled pass, override pass, merge.
///
/// Both origins may be empty; an empty result is a valid outcome and leaves
/// the catalogue usable with zero supported styles.
pub fn discover(
    bundled: impl IntoIterator<Item = TemplateSource>,
    overrides: impl IntoIterator<Item = TemplateSource>,
) -> StyleSet {
    let merged = override_merge(scan_sources(bundled), scan_sources(overrides));
    debug!(count = merged.len(), "style discovery complete");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, text: &str) -> TemplateSource {
        TemplateSource::new(name, text)
    }

    #[test]
    fn empty_origins_yield_empty_table() {
        let set = discover(vec![], vec![]);
        assert!(set.is_empty());
    }

    #[test]
    fn bundled_only_discovery() {
        let set = discover(
            vec![
                source("default", "$layerName $paletteName"),
                source("arrows", "$layerName-dir"),
            ],
            vec![],
        );
        assert_eq!(set.len(), 2);
        assert!(set.get("default").unwrap().uses_palette());
        assert!(!set.get("arrows").unwrap().needs_named_layer());
    }

    #[test]
    fn override_wins_in_full() {
        // Bundled "default" uses a palette and the named layer; the override
        // drops the palette and adds a role. The survivor must equal the
        // override descriptor exactly - no merged hybrid.
        let set = discover(
            vec![source("default", "$layerName $paletteName")],
            vec![source("default", "$layerName-mask")],
        );

        let d = set.get("default").unwrap();
        assert!(!d.uses_palette());
        assert!(!d.needs_named_layer());
        assert_eq!(
            d.required_child_roles().iter().collect::<Vec<_>>(),
            vec!["mask"]
        );
    }

    #[test]
    fn disjoint_names_accumulate() {
        let set = discover(
            vec![source("default", "$layerName")],
            vec![source("extra", "$paletteName $layerName")],
        );
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["default", "extra"]);
    }

    #[test]
    fn override_merge_is_right_biased() {
        let base = scan_sources(vec![source("a", "$layerName"), source("b", "$layerName")]);
        let overrides = scan_sources(vec![source("b", "$paletteName")]);
        let merged = override_merge(base, overrides);

        assert_eq!(merged.len(), 2);
        assert!(merged.get("a").unwrap().needs_named_layer());
        assert!(merged.get("b").unwrap().uses_palette());
        assert!(!merged.get("b").unwrap().needs_named_layer());
    }
}
