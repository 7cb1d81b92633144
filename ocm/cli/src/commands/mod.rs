//! Implementation of the `ocm-model` subcommands.
//!
//! Commands return their output as a string; printing is left to `main`.

mod canonicalize;
mod inspect;
mod kinds;

pub use canonicalize::{CanonicalizeOptions, canonicalize};
pub use inspect::{Inspection, inspect};
pub use kinds::render_kinds;
