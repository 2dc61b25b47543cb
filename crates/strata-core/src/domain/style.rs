//! Style descriptors and the immutable style table.
//!
//! A [`StyleDescriptor`] is the structural summary of one style template: it
//! records which placeholders the template text uses, never the text itself.
//! Descriptors are built once during discovery and shared read-only for the
//! lifetime of the catalogue.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Structural descriptor of one style template.
///
/// Two descriptors are equal iff all fields are equal; `name` is the unique
/// key in the [`StyleSet`]. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    /// Logical style name, derived from the resource's base name.
    name: String,
    /// The template references `$paletteName` somewhere.
    uses_palette: bool,
    /// The template plots the named layer itself (`$layerName` unsuffixed).
    needs_named_layer: bool,
    /// Child roles the template references via `$layerName-<role>`.
    ///
    /// Never absent; empty when the style only plots the named layer.
    required_child_roles: BTreeSet<String>,
}

impl StyleDescriptor {
    pub fn new(
        name: impl Into<String>,
        uses_palette: bool,
        needs_named_layer: bool,
        required_child_roles: BTreeSet<String>,
    ) -> Self {
        Self {
            name: name.into(),
            uses_palette,
            needs_named_layer,
            required_child_roles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uses_palette(&self) -> bool {
        self.uses_palette
    }

    pub fn needs_named_layer(&self) -> bool {
        self.needs_named_layer
    }

    pub fn required_child_roles(&self) -> &BTreeSet<String> {
        &self.required_child_roles
    }
}

/// One discovered template resource: a name plus raw text.
///
/// Ephemeral - consumed by the scanner during discovery and dropped. The name
/// is the style's logical name, already stripped of path and extension by the
/// adapter that found the resource.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    name: String,
    text: String,
}

impl TemplateSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Immutable name-keyed descriptor table.
///
/// Backed by a `BTreeMap` so that enumeration order is deterministic: two
/// lookups over the same table always report the same styles in the same
/// order, regardless of discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleSet {
    styles: BTreeMap<String, StyleDescriptor>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, replacing any existing entry with the same name
    /// in full. Returns the replaced descriptor, if any.
    pub fn insert(&mut self, descriptor: StyleDescriptor) -> Option<StyleDescriptor> {
        self.styles.insert(descriptor.name().to_owned(), descriptor)
    }

    pub fn get(&self, name: &str) -> Option<&StyleDescriptor> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDescriptor> {
        self.styles.values()
    }

    /// Style names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl FromIterator<StyleDescriptor> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleDescriptor>>(iter: I) -> Self {
        let mut set = Self::new();
        for descriptor in iter {
            set.insert(descriptor);
        }
        set
    }
}
