//! Traits and functions needed to work with any model type.
//!
//! ```
//! use ocm_api_model::prelude::*;
//! ```

pub use ocm_model_core::prelude::*;
pub use ocm_model_core::{BuildError, CodecError};
