use ocm_model_core::CodecError;
use ocm_model_core::codec::{Source, to_string, to_string_pretty, unmarshal, unmarshal_list};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::document::{DocumentKind, DocumentVisitor};
use crate::error::CliError;

/// Flags of the `canonicalize` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalizeOptions {
    /// The input is a JSON array of documents.
    pub list: bool,
    /// Indent the output.
    pub pretty: bool,
}

/// Decodes a document of type `kind` and encodes it again.
///
/// The result drops unknown keys, writes map keys in order and starts every
/// resource with its `kind`.
pub fn canonicalize(
    kind: DocumentKind,
    source: Source<'_>,
    options: CanonicalizeOptions,
) -> Result<String, CliError> {
    info!(%kind, list = options.list, "canonicalizing");
    kind.accept(Canonicalize { source, options })
}

struct Canonicalize<'a> {
    source: Source<'a>,
    options: CanonicalizeOptions,
}

impl DocumentVisitor for Canonicalize<'_> {
    type Output = Result<String, CliError>;

    fn visit<T>(self, kind: DocumentKind) -> Self::Output
    where
        T: Serialize + DeserializeOwned,
    {
        if self.options.list {
            let items: Vec<T> = unmarshal_list(self.source)?;
            debug!(%kind, count = items.len(), "decoded list");
            Ok(encode(&items, self.options.pretty)?)
        } else {
            let object: T = unmarshal(self.source)?;
            Ok(encode(&object, self.options.pretty)?)
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CodecError> {
    if pretty {
        to_string_pretty(value)
    } else {
        to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const CLUSTER: &str = r#"{
        "name": "prod",
        "id": "1pqa",
        "properties": {"zone": "b", "owner": "sre"},
        "provision_shard": {"id": "shard-1"},
        "kind": "Cluster"
    }"#;

    #[test]
    fn reorders_and_drops_unknown_keys() {
        let out = canonicalize(
            DocumentKind::Cluster,
            Source::from(CLUSTER),
            CanonicalizeOptions::default(),
        )
        .unwrap();

        assert_eq!(
            out,
            r#"{"kind":"Cluster","id":"1pqa","name":"prod","properties":{"owner":"sre","zone":"b"}}"#
        );
    }

    #[test]
    fn lists_are_canonicalized_item_by_item() {
        let input = r#"[{"id":"b","kind":"MachinePoolLink"},{"replicas":3,"id":"a"}]"#;
        let out = canonicalize(
            DocumentKind::MachinePool,
            Source::from(input),
            CanonicalizeOptions {
                list: true,
                pretty: false,
            },
        )
        .unwrap();

        assert_eq!(
            out,
            r#"[{"kind":"MachinePoolLink","id":"b"},{"kind":"MachinePool","id":"a","replicas":3}]"#
        );
    }

    #[test]
    fn pretty_output() {
        let out = canonicalize(
            DocumentKind::Product,
            Source::from(r#"{"id":"rosa"}"#),
            CanonicalizeOptions {
                list: false,
                pretty: true,
            },
        )
        .unwrap();

        assert_eq!(out, "{\n  \"kind\": \"Product\",\n  \"id\": \"rosa\"\n}");
    }

    #[test]
    #[traced_test]
    fn logs_the_kind_being_canonicalized() {
        canonicalize(
            DocumentKind::Subscription,
            Source::from(r#"{"id":"2a"}"#),
            CanonicalizeOptions::default(),
        )
        .unwrap();
        assert!(logs_contain("canonicalizing"));
        assert!(logs_contain("kind=subscription"));
    }

    #[test]
    fn decode_errors_are_returned() {
        let err = canonicalize(
            DocumentKind::Version,
            Source::from(r#"{"end_of_life_timestamp": "soon"}"#),
            CanonicalizeOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Codec(ref codec) if codec.is_data()));
    }
}
