//! Binding template placeholders to concrete layer names.
//!
//! Given a chosen (layer, style) pair, produce the map from placeholder keys
//! used in the template (`layerName`, `layerName-<role>`) to the concrete
//! layer identities the deployment's codec assigns them. All-or-nothing: a
//! missing required child fails the whole binding.

use super::error::DomainError;
use super::style::StyleSet;
use super::variable::{LayerId, PlaceholderBinding, VariableShape};

/// Resolve every placeholder of `style_name` for `layer`.
///
/// `dataset_id` is the dataset the layer belongs to, and `compose` is the
/// deployment codec that turns a (dataset, variable) pair into a protocol
/// layer name - child layers are composed from the parent's dataset and the
/// child's variable id.
///
/// # Errors
///
/// - [`DomainError::StyleNotFound`] when `style_name` is absent from `set`.
/// - [`DomainError::RequiredChildMissing`] when the shape lacks a child the
///   style requires; nothing is returned for the roles that did resolve.
pub fn resolve<C>(
    layer: &LayerId,
    style_name: &str,
    set: &StyleSet,
    shape: &VariableShape,
    dataset_id: &str,
    compose: C,
) -> Result<PlaceholderBinding, DomainError>
where
    C: Fn(&str, &str) -> LayerId,
{
    let descriptor = set.get(style_name).ok_or_else(|| DomainError::StyleNotFound {
        style: style_name.to_owned(),
    })?;

    let mut binding = PlaceholderBinding::new();
    if descriptor.needs_named_layer() {
        binding.bind("layerName", layer.clone());
    }

    for role in descriptor.required_child_roles() {
        let child = shape
            .child_with_role(role)
            .ok_or_else(|| DomainError::RequiredChildMissing {
                layer: layer.to_string(),
                role: role.clone(),
            })?;
        binding.bind(
            format!("layerName-{role}"),
            compose(dataset_id, child.variable_id()),
        );
    }

    Ok(binding)
}
