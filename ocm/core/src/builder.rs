//! The contract shared by every model builder.
//!
//! Model objects are immutable. They are created with a builder, and changed
//! by copying them back into a builder:
//!
//! ```text
//! Builder::new() --setters--> build() --> Object
//!       ^                                   |
//!       +------------- copy(&object) -------+
//! ```
//!
//! The free functions in this module are the building blocks the generated
//! builders use for their nested attributes.

use crate::error::BuildError;

/// A mutable staging area that produces an immutable model object.
pub trait ObjectBuilder: Default + Clone {
    /// The object produced by [`build`](Self::build).
    type Object;

    /// Returns `true` if no attribute has been set.
    ///
    /// The link flag of resource builders is not an attribute and does not
    /// count.
    fn is_empty(&self) -> bool;

    /// Replaces the state of the builder with a deep copy of `object`.
    fn copy(self, object: &Self::Object) -> Self;

    /// Builds the object, leaving the builder untouched.
    ///
    /// Nested builders are built recursively and the first error is returned
    /// as is.
    fn build(&self) -> Result<Self::Object, BuildError>;
}

/// Builds an optional nested attribute.
pub fn build_nested<B: ObjectBuilder>(
    builder: &Option<B>,
) -> Result<Option<B::Object>, BuildError> {
    builder.as_ref().map(|builder| builder.build()).transpose()
}

/// Builds an optional array of nested attributes, stopping at the first
/// failure.
pub fn build_all<B: ObjectBuilder>(
    builders: &Option<Vec<B>>,
) -> Result<Option<Vec<B::Object>>, BuildError> {
    builders
        .as_ref()
        .map(|builders| builders.iter().map(|builder| builder.build()).collect())
        .transpose()
}

/// Copies an optional nested attribute into a fresh builder.
pub fn copy_nested<B: ObjectBuilder>(object: &Option<B::Object>) -> Option<B> {
    object.as_ref().map(|object| B::default().copy(object))
}

/// Copies an optional array of nested attributes into fresh builders.
pub fn copy_all<B: ObjectBuilder>(objects: &Option<Vec<B::Object>>) -> Option<Vec<B>> {
    objects
        .as_ref()
        .map(|objects| objects.iter().map(|object| B::default().copy(object)).collect())
}
