//! Builder errors.

use std::fmt;

/// Errors returned by [`ObjectBuilder::build`](crate::ObjectBuilder::build).
///
/// None of the model builders can fail today: every combination of
/// attributes, including a link with neither `id` nor `href`, is a valid
/// object. The type keeps `build` fallible so that a failure in a nested
/// builder is returned unchanged by every enclosing builder, without
/// changing the signature of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BuildError {}

impl fmt::Display for BuildError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for BuildError {}
