//! JSON encoding and decoding of model objects.
//!
//! Model types derive `serde` traits that follow the wire rules of the API:
//! absent attributes are not written, resources start with their `kind`,
//! maps are written with sorted keys and timestamps use RFC 3339. This module
//! only supplies the plumbing around `serde_json`.
//!
//! ## Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use ocm_model_core::codec::{marshal, unmarshal, Source};
//!
//! let mut labels = BTreeMap::new();
//! labels.insert("zone".to_string(), "a".to_string());
//! labels.insert("arch".to_string(), "arm64".to_string());
//!
//! let mut out = Vec::new();
//! marshal(&labels, &mut out).unwrap();
//! assert_eq!(out, br#"{"arch":"arm64","zone":"a"}"#);
//!
//! let parsed: BTreeMap<String, String> = unmarshal(Source::from_reader(&out[..])).unwrap();
//! assert_eq!(parsed, labels);
//! ```

use std::any::type_name;
use std::fmt;
use std::io::{Read, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::CodecError;

/// Input for [`unmarshal`] and [`unmarshal_list`].
pub enum Source<'a> {
    /// A complete document held in a string.
    Text(&'a str),
    /// A complete document held in a byte buffer.
    Bytes(&'a [u8]),
    /// A document read incrementally from any reader.
    Reader(Box<dyn Read + 'a>),
}

impl<'a> Source<'a> {
    /// Wraps a reader (a file, a socket, stdin, ...).
    pub fn from_reader<R: Read + 'a>(reader: R) -> Self {
        Self::Reader(Box::new(reader))
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Writes `object` as compact JSON.
pub fn marshal<T, W>(object: &T, writer: W) -> Result<(), CodecError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let type_name = type_name::<T>();
    trace!(type_name, "encoding");
    serde_json::to_writer(writer, object).map_err(|source| CodecError::Encode { type_name, source })
}

/// Returns `object` as a compact JSON string.
pub fn to_string<T>(object: &T) -> Result<String, CodecError>
where
    T: Serialize + ?Sized,
{
    let type_name = type_name::<T>();
    trace!(type_name, "encoding");
    serde_json::to_string(object).map_err(|source| CodecError::Encode { type_name, source })
}

/// Returns `object` as an indented JSON string.
pub fn to_string_pretty<T>(object: &T) -> Result<String, CodecError>
where
    T: Serialize + ?Sized,
{
    let type_name = type_name::<T>();
    trace!(type_name, "encoding");
    serde_json::to_string_pretty(object)
        .map_err(|source| CodecError::Encode { type_name, source })
}

/// Reads one object from `source`.
///
/// Unknown keys are skipped and a repeated key keeps its last value. The
/// first malformed value (a timestamp that is not RFC 3339, a string where a
/// number belongs, ...) aborts decoding.
pub fn unmarshal<'a, T>(source: impl Into<Source<'a>>) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    let type_name = type_name::<T>();
    let source = source.into();
    trace!(type_name, ?source, "decoding");
    let result = match source {
        Source::Text(text) => decode(text.as_bytes()),
        Source::Bytes(bytes) => decode(bytes),
        Source::Reader(mut reader) => {
            let mut buffer = Vec::new();
            match reader.read_to_end(&mut buffer) {
                Ok(_) => decode(&buffer),
                Err(err) => Err(serde_json::Error::io(err)),
            }
        }
    };
    result.map_err(|source| {
        debug!(type_name, error = %source, "failed to decode document");
        CodecError::Decode { type_name, source }
    })
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::from_slice(bytes) {
        // Derived structs reject repeated keys. A value tree keeps the last
        // occurrence, so retry through it and keep the first error, which
        // has the position, if that fails too.
        Err(err) if err.is_data() => serde_json::from_slice::<Value>(bytes)
            .and_then(serde_json::from_value)
            .map_err(|_| err),
        result => result,
    }
}

/// Writes `items` as a JSON array.
pub fn marshal_list<T, W>(items: &[T], writer: W) -> Result<(), CodecError>
where
    T: Serialize,
    W: Write,
{
    marshal(items, writer)
}

/// Reads a JSON array of objects from `source`.
pub fn unmarshal_list<'a, T>(source: impl Into<Source<'a>>) -> Result<Vec<T>, CodecError>
where
    T: DeserializeOwned,
{
    unmarshal(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Resource;
    use crate::kind::tests::{Widget, widget};
    use tracing_test::traced_test;

    #[test]
    fn every_source_decodes_the_same() {
        let text = r#"{"kind":"Widget","id":"7"}"#.to_string();
        let bytes = text.clone().into_bytes();

        let from_str: Widget = unmarshal(text.as_str()).unwrap();
        let from_string: Widget = unmarshal(&text).unwrap();
        let from_slice: Widget = unmarshal(bytes.as_slice()).unwrap();
        let from_vec: Widget = unmarshal(&bytes).unwrap();
        let from_reader: Widget = unmarshal(Source::from_reader(bytes.as_slice())).unwrap();

        let expected = widget("7");
        for parsed in [from_str, from_string, from_slice, from_vec, from_reader] {
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn lists_are_plain_arrays() {
        let mut out = Vec::new();
        marshal_list(&[widget("1"), widget("2")], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            r#"[{"kind":"Widget","id":"1"},{"kind":"Widget","id":"2"}]"#
        );

        let parsed: Vec<Widget> = unmarshal_list(&out).unwrap();
        assert_eq!(parsed, vec![widget("1"), widget("2")]);
    }

    #[test]
    fn pretty_output_is_indented() {
        let text = to_string_pretty(&widget("1")).unwrap();
        assert!(text.contains("\n  \"kind\": \"Widget\""));
        assert_eq!(to_string(&widget("1")).unwrap(), r#"{"kind":"Widget","id":"1"}"#);
    }

    #[test]
    #[traced_test]
    fn decode_failures_are_reported_and_logged() {
        let err = unmarshal::<Widget>(r#"{"id": 42}"#).unwrap_err();
        assert!(err.is_data());
        assert!(matches!(err, CodecError::Decode { .. }));
        assert!(logs_contain("failed to decode document"));
    }

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let text = r#"{"id":"1","kind":"WidgetLink","id":"2"}"#;
        let from_text: Widget = unmarshal(text).unwrap();
        let from_reader: Widget = unmarshal(Source::from_reader(text.as_bytes())).unwrap();

        for parsed in [from_text, from_reader] {
            assert_eq!(parsed.id.as_deref(), Some("2"));
            assert!(parsed.is_link());
        }
    }

    #[test]
    fn data_errors_keep_their_position() {
        let err = unmarshal::<Widget>("{\n  \"id\": 42\n}").unwrap_err();
        assert!(err.is_data());
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn truncated_input_is_a_syntax_error() {
        let err = unmarshal::<Widget>(r#"{"id": "4"#).unwrap_err();
        assert!(err.is_syntax());
    }
}
