use std::fmt;

use colored::Colorize;
use ocm_model_core::codec::{Source, to_string, unmarshal};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::document::{DocumentKind, DocumentVisitor};
use crate::error::CliError;

/// Summary of a decoded document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    /// The wire kind, for resources.
    pub kind: Option<String>,
    pub id: Option<String>,
    pub href: Option<String>,
    /// Names of the other attributes present, in key order.
    pub attributes: Vec<String>,
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [("kind", &self.kind), ("id", &self.id), ("href", &self.href)];
        for (label, value) in fields {
            if let Some(value) = value {
                writeln!(f, "{} {}", format!("{label}:").as_str().bold(), value)?;
            }
        }
        let attributes = if self.attributes.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            self.attributes.join(", ")
        };
        write!(f, "{} {}", "attributes:".bold(), attributes)
    }
}

/// Decodes a document of type `kind` and reports what it contains.
///
/// Only attributes known to the model are reported; unknown keys in the
/// input are dropped while decoding.
pub fn inspect(kind: DocumentKind, source: Source<'_>) -> Result<Inspection, CliError> {
    info!(%kind, "inspecting");
    kind.accept(Inspect { source })
}

struct Inspect<'a> {
    source: Source<'a>,
}

impl DocumentVisitor for Inspect<'_> {
    type Output = Result<Inspection, CliError>;

    fn visit<T>(self, kind: DocumentKind) -> Self::Output
    where
        T: Serialize + DeserializeOwned,
    {
        let object: T = unmarshal(self.source)?;
        let canonical = to_string(&object)?;
        let Value::Object(mut map) = unmarshal::<Value>(canonical.as_str())? else {
            return Err(CliError::NotAnObject {
                kind: kind.to_string(),
            });
        };

        let mut take = |key: &str| match map.remove(key) {
            Some(Value::String(value)) => Some(value),
            Some(other) => {
                map.insert(key.to_string(), other);
                None
            }
            None => None,
        };
        let wire_kind = take("kind");
        let id = take("id");
        let href = take("href");

        let mut attributes: Vec<String> = map.keys().cloned().collect();
        attributes.sort();
        Ok(Inspection {
            kind: wire_kind,
            id,
            href,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_identity_and_attributes() {
        let inspection = inspect(
            DocumentKind::Cluster,
            Source::from(
                r#"{"kind":"ClusterLink","id":"1pqa","href":"/api/clusters_mgmt/v1/clusters/1pqa","state":"ready","name":"prod","shard":"x"}"#,
            ),
        )
        .unwrap();

        assert_eq!(
            inspection,
            Inspection {
                kind: Some("ClusterLink".to_string()),
                id: Some("1pqa".to_string()),
                href: Some("/api/clusters_mgmt/v1/clusters/1pqa".to_string()),
                attributes: vec!["name".to_string(), "state".to_string()],
            }
        );
    }

    #[test]
    fn plain_types_have_no_kind() {
        let inspection = inspect(
            DocumentKind::QuotaCost,
            Source::from(r#"{"quota_id":"cluster|byoc","allowed":5}"#),
        )
        .unwrap();

        assert_eq!(inspection.kind, None);
        assert_eq!(inspection.attributes, vec!["allowed", "quota_id"]);
    }

    #[test]
    fn display_lists_everything() {
        colored::control::set_override(false);
        let inspection = Inspection {
            kind: Some("Version".to_string()),
            id: Some("openshift-v4.15.3".to_string()),
            href: None,
            attributes: vec!["enabled".to_string(), "raw_id".to_string()],
        };

        assert_eq!(
            inspection.to_string(),
            "kind: Version\nid: openshift-v4.15.3\nattributes: enabled, raw_id"
        );
        assert_eq!(Inspection::default().to_string(), "attributes: (none)");
    }
}
