//! Layer identities and the variable metadata shape the backend supplies.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Protocol-visible token naming a dataset+variable pair.
///
/// Opaque to the core: only the deployment's codec knows how to compose or
/// decompose one. Treated as an unstructured string everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Read-only view of a variable's metadata shape.
///
/// Supplied per-request by the external dataset provider; the core never
/// caches or owns one beyond the call that received it. A composite variable
/// exposes its scalar components through role-keyed children (role keys are
/// unique per parent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableShape {
    variable_id: String,
    is_scalar: bool,
    children: BTreeMap<String, VariableShape>,
}

impl VariableShape {
    /// A scalar variable: directly readable as a single numeric field.
    pub fn scalar(variable_id: impl Into<String>) -> Self {
        Self {
            variable_id: variable_id.into(),
            is_scalar: true,
            children: BTreeMap::new(),
        }
    }

    /// A composite variable with no directly readable field of its own.
    pub fn composite(variable_id: impl Into<String>) -> Self {
        Self {
            variable_id: variable_id.into(),
            is_scalar: false,
            children: BTreeMap::new(),
        }
    }

    /// Attach a child under `role`, replacing any previous child of that role.
    pub fn with_child(mut self, role: impl Into<String>, child: VariableShape) -> Self {
        self.children.insert(role.into(), child);
        self
    }

    pub fn variable_id(&self) -> &str {
        &self.variable_id
    }

    pub fn is_scalar(&self) -> bool {
        self.is_scalar
    }

    /// The child under `role`, or `None` when absent.
    pub fn child_with_role(&self, role: &str) -> Option<&VariableShape> {
        self.children.get(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

/// Completed placeholder→layer-name binding for one (layer, style) pair.
///
/// Contains exactly the keys implied by the style's descriptor: `layerName`
/// when the style plots the named layer, and `layerName-<role>` for each
/// required child role. Never constructed partially - the resolver returns
/// it whole or fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaceholderBinding {
    bindings: BTreeMap<String, LayerId>,
}

impl PlaceholderBinding {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, key: impl Into<String>, layer: LayerId) {
        self.bindings.insert(key.into(), layer);
    }

    pub fn get(&self, key: &str) -> Option<&LayerId> {
        self.bindings.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayerId)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_lookup_by_role() {
        let shape = VariableShape::composite("currents")
            .with_child("mag", VariableShape::scalar("currents-mag"))
            .with_child("dir", VariableShape::scalar("currents-dir"));

        assert!(!shape.is_scalar());
        assert_eq!(
            shape.child_with_role("mag").map(VariableShape::variable_id),
            Some("currents-mag")
        );
        assert!(shape.child_with_role("mask").is_none());
        assert_eq!(shape.roles().collect::<Vec<_>>(), vec!["dir", "mag"]);
    }

    #[test]
    fn layer_id_is_opaque_text() {
        let id = LayerId::from("ocean/temp");
        assert_eq!(id.as_str(), "ocean/temp");
        assert_eq!(id.to_string(), "ocean/temp");
    }
}
