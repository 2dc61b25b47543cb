//! Compatibility matching between style descriptors and variable shapes.

use super::style::{StyleDescriptor, StyleSet};
use super::variable::VariableShape;

/// Can `descriptor` plot a variable of this `shape`?
///
/// Rejection rules, each sufficient on its own and final once triggered:
///
/// 1. A style that plots the named layer itself needs a scalar variable; a
///    composite has no directly readable field.
/// 2. Every required child role must exist on the shape and be scalar.
pub fn is_supported(descriptor: &StyleDescriptor, shape: &VariableShape) -> bool {
    if descriptor.needs_named_layer() && !shape.is_scalar() {
        return false;
    }
    descriptor.required_child_roles().iter().all(|role| {
        shape
            .child_with_role(role)
            .is_some_and(VariableShape::is_scalar)
    })
}

/// All styles in `set` that can plot a variable of this `shape`.
///
/// Output order follows the set's name order, so identical inputs always
/// enumerate identically.
pub fn supported_styles<'a>(
    shape: &VariableShape,
    set: &'a StyleSet,
) -> Vec<&'a StyleDescriptor> {
    set.iter().filter(|d| is_supported(d, shape)).collect()
}
