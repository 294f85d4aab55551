//! Element and backbone-element contracts
//!
//! Concrete generated types hold the shared attributes (element id,
//! extensions, and for backbone elements the modifier extensions) directly
//! in their own fields; these traits recover the uniform view that
//! validation and generic consumers need without class inheritance.

use crate::types::Extension;

/// Common behavior of every element in the model tree.
pub trait Element {
    /// Internal cross-reference id of this element, if any.
    fn element_id(&self) -> Option<&str>;

    /// Additional content attached to this element.
    fn extension(&self) -> &[Extension];

    /// True if this element carries a primitive value. Only primitive
    /// wrappers ever do.
    fn has_value(&self) -> bool {
        false
    }

    /// True if the base attributes or any declared field of this element is
    /// populated. Implementors OR their own field-presence checks into this
    /// base result.
    fn has_children(&self) -> bool {
        self.element_id().is_some() || !self.extension().is_empty()
    }
}

/// An element that may carry modifier extensions: extensions a processor is
/// obligated to understand, or else must treat the containing element as
/// unprocessable.
pub trait BackboneElement: Element {
    fn modifier_extension(&self) -> &[Extension];
}

/// Structural hash over a tuple of field references, computed once at
/// `build()` time and cached in the value. Children contribute their own
/// cached hashes, so the computation per node is shallow.
pub(crate) fn structural_hash<T: std::hash::Hash>(fields: &T) -> u64 {
    use std::hash::Hasher;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    std::hash::Hash::hash(fields, &mut hasher);
    hasher.finish()
}
