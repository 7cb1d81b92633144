//! Integration tests for the builder contract of the model types.
//!
//! These tests verify that:
//! - Builders track which attributes were set, independently of the link flag
//! - Built objects expose zero values and `None` for unset attributes
//! - `copy` reproduces an object and discards earlier builder state
//! - Links build even without `id` or `href`, at any nesting depth

use chrono::{DateTime, TimeZone, Utc};
use ocm_api_model::BuildError;
use ocm_api_model::clustersmgmt::v1::{
    CloudProvider, CloudRegion, Cluster, ClusterBuilder, ClusterNodes, ClusterState,
    ExternalAuth, ExternalAuthConfig, ExternalAuthListBuilder, MachinePool,
    MachinePoolListBuilder, MachineType, MachineTypeCategory, Network, Sts, Taint, Value,
};
use ocm_api_model::prelude::*;

fn sample_cluster() -> Cluster {
    Cluster::builder()
        .id("1pqa")
        .href("/api/clusters_mgmt/v1/clusters/1pqa")
        .name("prod")
        .multi_az(true)
        .state(ClusterState::READY)
        .load_balancer_quota(4)
        .creation_timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        .properties([("owner", "platform"), ("env", "prod")])
        .network(
            Network::builder()
                .machine_cidr("10.0.0.0/16")
                .host_prefix(23)
                .type_("OVNKubernetes"),
        )
        .nodes(
            ClusterNodes::builder().compute(3).compute_machine_type(
                MachineType::builder()
                    .id("m5.xlarge")
                    .category(MachineTypeCategory::GENERAL_PURPOSE)
                    .memory(Value::builder().value(16.0).unit("GiB")),
            ),
        )
        .region(CloudRegion::builder().link(true).id("us-east-1"))
        .machine_pools(
            MachinePoolListBuilder::new()
                .push(
                    MachinePool::builder()
                        .id("worker")
                        .replicas(3)
                        .taints([Taint::builder().key("gpu").effect("NoSchedule")]),
                )
                .push(MachinePool::builder().id("infra").replicas(2)),
        )
        .build()
        .unwrap()
}

// =============================================================================
// Emptiness
// =============================================================================

#[test]
fn new_builder_is_empty() {
    assert!(ClusterBuilder::new().is_empty());
    assert!(Cluster::builder().build().unwrap().is_empty());
}

#[test]
fn link_flag_does_not_count_as_an_attribute() {
    let builder = CloudRegion::builder().link(true);
    assert!(builder.is_empty(), "link alone must leave the builder empty");

    let builder = builder.id("us-east-1");
    assert!(!builder.is_empty());
}

#[test]
fn empty_string_counts_as_set() {
    let cluster = Cluster::builder().name("").build().unwrap();
    assert!(!cluster.is_empty());
    assert_eq!(cluster.get_name(), Some(""));
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn set_attributes_are_returned() {
    let cluster = sample_cluster();

    assert_eq!(cluster.id(), "1pqa");
    assert_eq!(cluster.href(), "/api/clusters_mgmt/v1/clusters/1pqa");
    assert_eq!(cluster.name(), "prod");
    assert!(cluster.multi_az());
    assert_eq!(cluster.get_multi_az(), Some(true));
    assert_eq!(cluster.state(), ClusterState::READY);
    assert_eq!(cluster.load_balancer_quota(), 4);
    assert_eq!(
        cluster.creation_timestamp(),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(cluster.properties().get("owner").map(String::as_str), Some("platform"));

    let network = cluster.network().unwrap();
    assert_eq!(network.machine_cidr(), "10.0.0.0/16");
    assert_eq!(network.host_prefix(), 23);
    assert_eq!(network.type_(), "OVNKubernetes");

    let memory = cluster
        .nodes()
        .and_then(|nodes| nodes.compute_machine_type())
        .and_then(|machine_type| machine_type.memory())
        .unwrap();
    assert_eq!(memory.value(), 16.0);
    assert_eq!(memory.unit(), "GiB");
}

#[test]
fn unset_attributes_return_zero_values() {
    let cluster = Cluster::builder().id("1pqa").build().unwrap();

    assert_eq!(cluster.name(), "");
    assert_eq!(cluster.get_name(), None);
    assert!(!cluster.multi_az());
    assert_eq!(cluster.get_multi_az(), None);
    assert_eq!(cluster.load_balancer_quota(), 0);
    assert_eq!(cluster.get_load_balancer_quota(), None);
    assert_eq!(cluster.creation_timestamp(), DateTime::<Utc>::default());
    assert_eq!(cluster.get_creation_timestamp(), None);
    assert_eq!(cluster.state().as_str(), "");
    assert!(cluster.get_state().is_none());
    assert!(cluster.properties().is_empty());
    assert!(cluster.get_properties().is_none());
    assert!(cluster.api().is_none());
    assert!(cluster.machine_pools().is_none());
    assert_eq!(cluster.machine_pools().len(), 0);
}

#[test]
fn string_arrays_accept_any_string_like_items() {
    let sts = Sts::builder()
        .role_arn("arn:aws:iam::123:role/installer")
        .build()
        .unwrap();
    assert!(sts.operator_iam_roles().is_empty());
    assert!(sts.get_operator_iam_roles().is_none());

    let zones = vec!["us-east-1a".to_string(), "us-east-1b".to_string()];
    let pool = MachinePool::builder()
        .availability_zones(zones.clone())
        .subnets(["subnet-1"])
        .build()
        .unwrap();
    assert_eq!(pool.availability_zones(), zones.as_slice());
    assert_eq!(pool.subnets(), ["subnet-1".to_string()]);
}

#[test]
fn unknown_enum_values_are_kept() {
    let cluster = Cluster::builder().state("archived").build().unwrap();
    assert_eq!(cluster.state().as_str(), "archived");
    assert!(!cluster.state().is_known());
}

// =============================================================================
// Build and copy
// =============================================================================

#[test]
fn builder_can_be_built_repeatedly() {
    let builder = Cluster::builder().id("a").name("first");
    let first = builder.build().unwrap();
    let second = builder.clone().name("second").build().unwrap();

    assert_eq!(first, builder.build().unwrap());
    assert_eq!(first.name(), "first");
    assert_eq!(second.name(), "second");
}

#[test]
fn copy_reproduces_the_object() {
    let cluster = sample_cluster();
    let copied = ClusterBuilder::new().copy(&cluster).build().unwrap();
    assert_eq!(copied, cluster);
}

#[test]
fn copy_keeps_the_link_flag() {
    let region = CloudRegion::builder().link(true).id("us-east-1").build().unwrap();
    let copied = CloudRegion::builder().copy(&region).build().unwrap();
    assert!(copied.link());
    assert_eq!(copied.kind(), "CloudRegionLink");
}

#[test]
fn copy_discards_previous_state() {
    let source = Cluster::builder().id("b").build().unwrap();
    let copied = Cluster::builder()
        .name("stale")
        .external_id("stale")
        .copy(&source)
        .build()
        .unwrap();

    assert_eq!(copied.id(), "b");
    assert_eq!(copied.get_name(), None);
    assert_eq!(copied.get_external_id(), None);
}

#[test]
fn changing_a_copy_leaves_the_original_alone() {
    let cluster = sample_cluster();
    let changed = Cluster::builder()
        .copy(&cluster)
        .name("staging")
        .machine_pools(MachinePoolListBuilder::new())
        .build()
        .unwrap();

    assert_eq!(cluster.name(), "prod");
    assert_eq!(cluster.machine_pools().len(), 2);
    assert_eq!(changed.name(), "staging");
    assert_eq!(changed.machine_pools().len(), 0);
}

// =============================================================================
// Bare links
// =============================================================================

#[test]
fn link_without_id_or_href_builds() {
    let region = CloudRegion::builder().link(true).build().unwrap();
    assert!(region.link());
    assert_eq!(region.get_id(), None);
    assert_eq!(region.get_href(), None);
    assert_eq!(CloudRegion::kind_of(Some(&region)), "CloudRegionLink");
}

#[test]
fn decoded_bare_link_survives_copy_and_build() {
    let cluster: Cluster =
        unmarshal(r#"{"kind":"Cluster","id":"1","region":{"kind":"CloudRegionLink"}}"#).unwrap();
    assert!(cluster.region().is_some_and(CloudRegion::link));

    let rebuilt = Cluster::builder().copy(&cluster).build().unwrap();
    assert_eq!(rebuilt, cluster);

    let renamed = Cluster::builder().copy(&cluster).name("prod").build().unwrap();
    assert_eq!(renamed.region(), cluster.region());
}

#[test]
fn bare_links_inside_lists_and_arrays_build() {
    let cluster = Cluster::builder()
        .machine_pools(
            MachinePoolListBuilder::new()
                .push(MachinePool::builder().id("worker"))
                .push(MachinePool::builder().link(true)),
        )
        .external_auth_config(
            ExternalAuthConfig::builder()
                .enabled(true)
                .external_auths(
                    ExternalAuthListBuilder::new().push(ExternalAuth::builder().link(true)),
                ),
        )
        .build()
        .unwrap();
    assert!(cluster.machine_pools().get(1).is_some_and(MachinePool::link));
    let auths = cluster
        .external_auth_config()
        .and_then(ExternalAuthConfig::external_auths);
    assert!(auths.get(0).is_some_and(ExternalAuth::link));

    let provider = CloudProvider::builder()
        .id("aws")
        .regions([
            CloudRegion::builder().id("us-east-1"),
            CloudRegion::builder().link(true),
        ])
        .build()
        .unwrap();
    assert!(provider.regions()[1].link());
}

#[test]
fn build_error_lifts_into_the_crate_error() {
    fn rebuild(cluster: &Cluster) -> Result<Cluster, ocm_api_model::Error> {
        let built: Result<Cluster, BuildError> = Cluster::builder().copy(cluster).build();
        Ok(built?)
    }
    let cluster = sample_cluster();
    assert_eq!(rebuild(&cluster).ok(), Some(cluster));
}
