//! Error types for building and encoding model objects.
//!
//! - [`BuildError`] - a builder could not produce its object
//! - [`CodecError`] - a document could not be encoded or decoded
//! - [`Error`] - either of the above, for callers that do both

mod build_error;
mod codec_error;

pub use build_error::BuildError;
pub use codec_error::CodecError;

use thiserror::Error;

/// Any failure produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Building an object from its builder failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Encoding or decoding a document failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
