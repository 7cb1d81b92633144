//! JSON encoding and decoding errors.

use thiserror::Error;

/// Errors from [`marshal`](crate::codec::marshal) and
/// [`unmarshal`](crate::codec::unmarshal).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be written.
    #[error("failed to encode {type_name}: {source}")]
    Encode {
        /// Rust type that was being encoded.
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not a valid document for the target type.
    #[error("failed to decode {type_name}: {source}")]
    Decode {
        /// Rust type that was being decoded.
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    fn source_error(&self) -> &serde_json::Error {
        match self {
            Self::Encode { source, .. } | Self::Decode { source, .. } => source,
        }
    }

    /// Returns `true` if the input was not well-formed JSON.
    pub fn is_syntax(&self) -> bool {
        self.source_error().is_syntax() || self.source_error().is_eof()
    }

    /// Returns `true` if the input was valid JSON with the wrong shape, for
    /// example a malformed timestamp or a string where a number belongs.
    pub fn is_data(&self) -> bool {
        self.source_error().is_data()
    }

    /// Line of the input where decoding stopped (1-based, 0 if unknown).
    pub fn line(&self) -> usize {
        self.source_error().line()
    }

    /// Column of the input where decoding stopped (1-based, 0 if unknown).
    pub fn column(&self) -> usize {
        self.source_error().column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error(input: &str) -> CodecError {
        let source = serde_json::from_str::<u32>(input).unwrap_err();
        CodecError::Decode {
            type_name: "u32",
            source,
        }
    }

    #[test]
    fn classifies_syntax_errors() {
        let err = decode_error("1x");
        assert!(err.is_syntax());
        assert!(!err.is_data());
    }

    #[test]
    fn classifies_data_errors() {
        let err = decode_error(r#""seven""#);
        assert!(err.is_data());
        assert_eq!(err.line(), 1);
        assert!(err.to_string().starts_with("failed to decode u32"));
    }
}
