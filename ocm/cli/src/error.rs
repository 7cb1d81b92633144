//! Error types for the `ocm-model` tool.

use std::path::PathBuf;

use ocm_model_core::CodecError;
use thiserror::Error;

/// Errors reported by the tool's commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be decoded or encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The document decoded to something other than a JSON object.
    #[error("expected a JSON object for {kind}")]
    NotAnObject { kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_file() {
        let err = CliError::Open {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to open 'missing.json': "));
    }
}
