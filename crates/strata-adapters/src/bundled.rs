//! Styles compiled into the binary.
//!
//! The four stock templates ship inside the crate via `include_str!`, so a
//! deployment always has a working style table even with no styles directory
//! configured. Deployments extend or replace these through the override
//! directory handled by [`crate::discover`].

use strata_core::domain::TemplateSource;

/// Name/text pairs for every bundled style, in no particular order.
const BUNDLED: &[(&str, &str)] = &[
    ("default", include_str!("../styles/default.xml")),
    ("contours", include_str!("../styles/contours.xml")),
    ("arrows", include_str!("../styles/arrows.xml")),
    ("vector", include_str!("../styles/vector.xml")),
];

/// All styles that ship with the server.
pub fn bundled_sources() -> Vec<TemplateSource> {
    BUNDLED
        .iter()
        .map(|(name, text)| TemplateSource::new(*name, *text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::domain::scanner;

    #[test]
    fn every_bundled_style_has_a_unique_name() {
        let sources = bundled_sources();
        let mut names: Vec<_> = sources.iter().map(TemplateSource::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), sources.len());
    }

    #[test]
    fn bundled_styles_scan_to_expected_descriptors() {
        let sources = bundled_sources();
        let by_name = |n: &str| {
            let s = sources.iter().find(|s| s.name() == n).unwrap();
            scanner::scan(s.name(), s.text())
        };

        let default = by_name("default");
        assert!(default.needs_named_layer());
        assert!(default.uses_palette());
        assert!(default.required_child_roles().is_empty());

        let contours = by_name("contours");
        assert!(contours.needs_named_layer());
        assert!(!contours.uses_palette());

        let arrows = by_name("arrows");
        assert!(!arrows.needs_named_layer());
        assert_eq!(
            arrows.required_child_roles().iter().collect::<Vec<_>>(),
            vec!["dir"]
        );

        let vector = by_name("vector");
        assert!(!vector.needs_named_layer());
        assert!(vector.uses_palette());
        assert_eq!(
            vector.required_child_roles().iter().collect::<Vec<_>>(),
            vec!["dir", "mag"]
        );
    }
}
