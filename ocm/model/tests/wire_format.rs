//! Integration tests for the JSON representation of the model types.

use std::io::Cursor;

use chrono::{TimeDelta, TimeZone, Utc};
use ocm_api_model::clustersmgmt::v1::{
    Aws, CidrBlockAccess, CidrBlockAllowAccess, CloudRegion, Cluster, ClusterApi, ClusterState,
    IdentityProvider, IdentityProviderType, ListeningMethod, MachinePool, MachinePoolListBuilder,
    Network, OpenIdIdentityProvider, Value, Version,
};
use ocm_api_model::prelude::*;
use ocm_model_core::codec::{to_string, to_string_pretty};
use serde_json::json;

fn encode<T: serde::Serialize>(object: &T) -> String {
    to_string(object).unwrap()
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn resource_with_only_id_and_href() {
    let cluster = Cluster::builder()
        .id("123")
        .href("/api/clusters_mgmt/v1/clusters/123")
        .build()
        .unwrap();

    assert_eq!(
        encode(&cluster),
        r#"{"kind":"Cluster","id":"123","href":"/api/clusters_mgmt/v1/clusters/123"}"#
    );
}

#[test]
fn links_are_written_with_the_link_kind() {
    let cluster = Cluster::builder()
        .link(true)
        .id("123")
        .href("/api/clusters_mgmt/v1/clusters/123")
        .build()
        .unwrap();

    assert_eq!(
        encode(&cluster),
        r#"{"kind":"ClusterLink","id":"123","href":"/api/clusters_mgmt/v1/clusters/123"}"#
    );
}

#[test]
fn empty_resource_still_has_a_kind() {
    let cluster = Cluster::builder().build().unwrap();
    assert_eq!(encode(&cluster), r#"{"kind":"Cluster"}"#);
    assert_eq!(Cluster::kind_of(None), "ClusterNil");
}

#[test]
fn unset_attributes_are_omitted() {
    let cluster = Cluster::builder()
        .id("1")
        .name("prod")
        .multi_az(true)
        .state(ClusterState::READY)
        .build()
        .unwrap();

    assert_eq!(
        encode(&cluster),
        r#"{"kind":"Cluster","id":"1","multi_az":true,"name":"prod","state":"ready"}"#
    );
}

#[test]
fn set_but_empty_attributes_are_written() {
    let aws = Aws::builder()
        .account_id("")
        .private_link(false)
        .subnet_ids(Vec::<String>::new())
        .tags(Vec::<(String, String)>::new())
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&aws).unwrap(),
        json!({
            "account_id": "",
            "private_link": false,
            "subnet_ids": [],
            "tags": {},
        })
    );
}

#[test]
fn maps_are_written_with_sorted_keys() {
    let cluster = Cluster::builder()
        .properties([("zeta", "1"), ("alpha", "2"), ("mid", "3")])
        .build()
        .unwrap();

    assert_eq!(
        encode(&cluster),
        r#"{"kind":"Cluster","properties":{"alpha":"2","mid":"3","zeta":"1"}}"#
    );
}

#[test]
fn timestamps_use_rfc3339() {
    let cluster = Cluster::builder()
        .creation_timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        .build()
        .unwrap();

    assert_eq!(
        encode(&cluster),
        r#"{"kind":"Cluster","creation_timestamp":"2024-03-01T12:00:00Z"}"#
    );
}

#[test]
fn sub_second_timestamps_keep_their_fraction() {
    let created =
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + TimeDelta::milliseconds(250);
    let cluster = Cluster::builder().creation_timestamp(created).build().unwrap();

    let text = encode(&cluster);
    assert_eq!(
        text,
        r#"{"kind":"Cluster","creation_timestamp":"2024-03-01T12:00:00.250Z"}"#
    );
    let parsed: Cluster = unmarshal(&text).unwrap();
    assert_eq!(parsed.creation_timestamp(), created);
}

#[test]
fn reserved_words_keep_their_json_names() {
    let network = Network::builder()
        .type_("OVNKubernetes")
        .host_prefix(23)
        .build()
        .unwrap();
    assert_eq!(encode(&network), r#"{"host_prefix":23,"type":"OVNKubernetes"}"#);

    let version = Version::builder()
        .id("openshift-v4.15.3")
        .is_default(true)
        .enabled(true)
        .build()
        .unwrap();
    assert_eq!(
        encode(&version),
        r#"{"kind":"Version","id":"openshift-v4.15.3","default":true,"enabled":true}"#
    );

    let provider = IdentityProvider::builder()
        .name("corp")
        .type_(IdentityProviderType::HTPASSWD)
        .build()
        .unwrap();
    assert_eq!(
        encode(&provider),
        r#"{"kind":"IdentityProvider","name":"corp","type":"HTPasswdIdentityProvider"}"#
    );
}

#[test]
fn numbers_and_nested_objects() {
    let value = Value::builder().unit("GiB").value(1.5).build().unwrap();
    assert_eq!(encode(&value), r#"{"unit":"GiB","value":1.5}"#);

    let api = ClusterApi::builder()
        .url("https://api.prod.example.com:6443")
        .listening(ListeningMethod::INTERNAL)
        .cidr_block_access(
            CidrBlockAccess::builder().allow(
                CidrBlockAllowAccess::builder()
                    .mode("allow_list")
                    .values(["10.0.0.0/8", "192.168.0.0/16"]),
            ),
        )
        .build()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&api).unwrap(),
        json!({
            "url": "https://api.prod.example.com:6443",
            "cidr_block_access": {
                "allow": {
                    "mode": "allow_list",
                    "values": ["10.0.0.0/8", "192.168.0.0/16"],
                },
            },
            "listening": "internal",
        })
    );
}

#[test]
fn pretty_output_starts_with_the_kind() {
    let cluster = Cluster::builder().id("1").build().unwrap();
    let text = to_string_pretty(&cluster).unwrap();
    assert!(text.starts_with("{\n  \"kind\": \"Cluster\""), "got: {text}");
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn decodes_nested_links() {
    let cluster: Cluster = unmarshal(
        r#"{
            "kind": "Cluster",
            "id": "1",
            "region": {"kind": "CloudRegionLink", "id": "us-east-1", "href": "/r/us-east-1"},
            "version": {"kind": "Version", "id": "openshift-v4.15.3", "raw_id": "4.15.3"}
        }"#,
    )
    .unwrap();

    let region = cluster.region().unwrap();
    assert!(region.link());
    assert_eq!(region.kind(), "CloudRegionLink");
    assert_eq!(region.id(), "us-east-1");

    let version = cluster.version().unwrap();
    assert!(!version.link());
    assert_eq!(version.raw_id(), "4.15.3");
}

#[test]
fn unknown_keys_are_ignored() {
    let cluster: Cluster = unmarshal(
        r#"{"kind":"Cluster","id":"1","flavour":{"id":"osd-4"},"aws":{"unknown":[1,2]},"name":"a"}"#,
    )
    .unwrap();

    assert_eq!(cluster.id(), "1");
    assert_eq!(cluster.name(), "a");
    assert!(cluster.aws().unwrap().is_empty());
}

#[test]
fn missing_or_unexpected_kind_is_not_a_link() {
    let without: Cluster = unmarshal(r#"{"id":"1"}"#).unwrap();
    let nil: Cluster = unmarshal(r#"{"kind":"ClusterNil","id":"1"}"#).unwrap();

    for cluster in [without, nil] {
        assert!(!cluster.link());
        assert_eq!(cluster.kind(), "Cluster");
    }
}

#[test]
fn null_kind_is_not_a_link() {
    let cluster: Cluster =
        unmarshal(r#"{"kind":null,"id":"1","region":{"kind":null,"id":"us-east-1"}}"#).unwrap();
    assert!(!cluster.link());
    assert_eq!(cluster.id(), "1");
    assert!(cluster.region().is_some_and(|region| !region.link()));
}

#[test]
fn repeated_keys_keep_the_last_value() {
    let cluster: Cluster = unmarshal(
        r#"{"name":"a","name":"b","aws":{"account_id":"1","account_id":"2"},"multi_az":false,"multi_az":true}"#,
    )
    .unwrap();
    assert_eq!(cluster.name(), "b");
    assert_eq!(cluster.aws().map(Aws::account_id), Some("2"));
    assert!(cluster.multi_az());

    let from_reader: Cluster =
        unmarshal(Source::from_reader(Cursor::new(r#"{"name":"a","name":"b"}"#))).unwrap();
    assert_eq!(from_reader.name(), "b");
}

#[test]
fn repeated_keys_do_not_hide_real_errors() {
    let err = unmarshal::<Cluster>(r#"{"name":"a","name":"b","multi_az":"yes"}"#).unwrap_err();
    assert!(err.is_data());
    assert_eq!(err.line(), 1);
}

#[test]
fn timestamps_with_offsets_are_normalized_to_utc() {
    let cluster: Cluster =
        unmarshal(r#"{"creation_timestamp":"2024-03-01T14:00:00+02:00"}"#).unwrap();
    assert_eq!(
        cluster.creation_timestamp(),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
}

#[test]
fn malformed_timestamp_fails_the_decode() {
    let err = unmarshal::<Cluster>(r#"{"id":"1","creation_timestamp":"yesterday"}"#).unwrap_err();
    assert!(err.is_data(), "expected a data error, got {err}");
    assert_eq!(err.line(), 1);
}

#[test]
fn wrong_value_type_fails_the_decode() {
    let err = unmarshal::<Cluster>(r#"{"multi_az":"yes"}"#).unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().contains("Cluster"), "got: {err}");
}

#[test]
fn truncated_document_is_a_syntax_error() {
    let err = unmarshal::<Cluster>(r#"{"kind":"Cluster","id":"#).unwrap_err();
    assert!(err.is_syntax());
}

#[test]
fn map_attributes_round_trip() {
    let provider: OpenIdIdentityProvider = unmarshal(
        r#"{"client_id":"ocm","extra_authorize_parameters":{"prompt":"consent","access_type":"offline"}}"#,
    )
    .unwrap();

    assert_eq!(
        provider.extra_authorize_parameters().get("prompt").map(String::as_str),
        Some("consent")
    );
    assert_eq!(
        encode(&provider),
        r#"{"client_id":"ocm","extra_authorize_parameters":{"access_type":"offline","prompt":"consent"}}"#
    );
}

#[test]
fn full_cluster_round_trips() {
    let cluster = Cluster::builder()
        .id("1pqa")
        .href("/api/clusters_mgmt/v1/clusters/1pqa")
        .name("prod")
        .state(ClusterState::INSTALLING)
        .creation_timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        .properties([("owner", "platform")])
        .storage_quota(Value::builder().value(100.0).unit("GiB"))
        .region(CloudRegion::builder().link(true).id("us-east-1"))
        .aws(Aws::builder().subnet_ids(["subnet-1", "subnet-2"]).private_link(true))
        .machine_pools(
            MachinePoolListBuilder::new()
                .href("/api/clusters_mgmt/v1/clusters/1pqa/machine_pools")
                .push(MachinePool::builder().id("worker").replicas(3)),
        )
        .build()
        .unwrap();

    let mut out = Vec::new();
    marshal(&cluster, &mut out).unwrap();

    let from_bytes: Cluster = unmarshal(&out).unwrap();
    let from_reader: Cluster = unmarshal(Source::from_reader(Cursor::new(out))).unwrap();
    assert_eq!(from_bytes, cluster);
    assert_eq!(from_reader, cluster);
}

#[test]
fn top_level_lists_are_arrays() {
    let clusters = vec![
        Cluster::builder().id("a").build().unwrap(),
        Cluster::builder().link(true).id("b").build().unwrap(),
    ];

    let mut out = Vec::new();
    marshal_list(&clusters, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out.clone()).unwrap(),
        r#"[{"kind":"Cluster","id":"a"},{"kind":"ClusterLink","id":"b"}]"#
    );

    let parsed: Vec<Cluster> = unmarshal_list(&out).unwrap();
    assert_eq!(parsed, clusters);
}
