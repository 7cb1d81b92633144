//! Round trips for every type of the model.
//!
//! Each test sets every attribute of one type, checks the exact keys that are
//! written, and checks that both decoding the document and rebuilding from a
//! copy give the same object back.

#![recursion_limit = "256"]

use std::fmt::Debug;

use chrono::{DateTime, TimeZone, Utc};
use ocm_api_model::clustersmgmt::v1::{
    Aws, AwsMachinePool, AwsNodePool, AwsSpotMarketOptions, BillingModel, Ccs, CidrBlockAccess,
    CidrBlockAllowAccess, ClientComponent, CloudProvider, CloudRegion, CloudVpc, Cluster,
    ClusterApi, ClusterConfigurationMode, ClusterConsole, ClusterHealthState, ClusterNodes,
    ClusterState, ClusterStatus, DeleteProtection, Dns, ExternalAuth, ExternalAuthClaim,
    ExternalAuthClientConfig, ExternalAuthClientType, ExternalAuthConfig, ExternalAuthListBuilder,
    GroupsClaim, HtpasswdIdentityProvider, HtpasswdUser, HtpasswdUserListBuilder, Hypershift,
    IdentityProvider, IdentityProviderListBuilder, IdentityProviderMappingMethod,
    IdentityProviderType, Ingress, IngressListBuilder, InstanceIamRoles, ListeningMethod,
    LoadBalancerFlavor, MachinePool, MachinePoolAutoscaling, MachinePoolListBuilder, MachineType,
    MachineTypeCategory, MachineTypeSize, Network, NodePool, NodePoolAutoscaling,
    NodePoolListBuilder, NodePoolStatus, OpenIdClaims, OpenIdIdentityProvider, OperatorIamRole,
    Product, Proxy, Sts, Subnetwork, Subscription, Taint, TokenClaimMappings,
    TokenClaimValidationRule, TokenIssuer, UsernameClaim, Value, Version,
};
use ocm_api_model::prelude::*;
use ocm_model_core::codec::to_string;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

fn assert_round_trip<B>(builder: B, expected: serde_json::Value)
where
    B: ObjectBuilder,
    B::Object: Serialize + DeserializeOwned + PartialEq + Debug,
{
    assert!(!builder.is_empty());
    let object = builder.build().unwrap();
    assert_eq!(serde_json::to_value(&object).unwrap(), expected);

    let decoded: B::Object = unmarshal(&to_string(&object).unwrap()).unwrap();
    assert_eq!(decoded, object);

    let from_expected: B::Object = serde_json::from_value(expected).unwrap();
    assert_eq!(from_expected, object);

    let rebuilt = B::default().copy(&object).build().unwrap();
    assert_eq!(rebuilt, object);
}

// =============================================================================
// Clusters management
// =============================================================================

#[test]
fn aws() {
    assert_round_trip(
        Aws::builder()
            .access_key_id("access-key-id")
            .account_id("account-id")
            .additional_compute_security_group_ids([
                "additional-compute-security-group-ids-1",
                "additional-compute-security-group-ids-2",
            ])
            .billing_account_id("billing-account-id")
            .private_hosted_zone_id("private-hosted-zone-id")
            .private_hosted_zone_role_arn("private-hosted-zone-role-arn")
            .private_link(true)
            .secret_access_key("secret-access-key")
            .subnet_ids(["subnet-ids-1", "subnet-ids-2"])
            .sts(Sts::builder().external_id("external-id"))
            .tags([("owner", "platform")]),
        json!({
            "access_key_id": "access-key-id",
            "account_id": "account-id",
            "additional_compute_security_group_ids": [
                "additional-compute-security-group-ids-1",
                "additional-compute-security-group-ids-2",
            ],
            "billing_account_id": "billing-account-id",
            "private_hosted_zone_id": "private-hosted-zone-id",
            "private_hosted_zone_role_arn": "private-hosted-zone-role-arn",
            "private_link": true,
            "secret_access_key": "secret-access-key",
            "subnet_ids": ["subnet-ids-1", "subnet-ids-2"],
            "sts": {"external_id": "external-id"},
            "tags": {"owner": "platform"},
        }),
    );
}

#[test]
fn aws_machine_pool() {
    assert_round_trip(
        AwsMachinePool::builder()
            .additional_security_group_ids([
                "additional-security-group-ids-1",
                "additional-security-group-ids-2",
            ])
            .spot_market_options(AwsSpotMarketOptions::builder().max_price(1.5))
            .tags([("owner", "platform")]),
        json!({
            "additional_security_group_ids": [
                "additional-security-group-ids-1",
                "additional-security-group-ids-2",
            ],
            "spot_market_options": {"max_price": 1.5},
            "tags": {"owner": "platform"},
        }),
    );
}

#[test]
fn aws_node_pool() {
    assert_round_trip(
        AwsNodePool::builder()
            .additional_security_group_ids([
                "additional-security-group-ids-1",
                "additional-security-group-ids-2",
            ])
            .instance_profile("instance-profile")
            .instance_type("instance-type")
            .tags([("owner", "platform")]),
        json!({
            "additional_security_group_ids": [
                "additional-security-group-ids-1",
                "additional-security-group-ids-2",
            ],
            "instance_profile": "instance-profile",
            "instance_type": "instance-type",
            "tags": {"owner": "platform"},
        }),
    );
}

#[test]
fn aws_spot_market_options() {
    assert_round_trip(
        AwsSpotMarketOptions::builder().max_price(1.5),
        json!({
            "max_price": 1.5,
        }),
    );
}

#[test]
fn ccs() {
    assert_round_trip(
        Ccs::builder()
            .disable_scp_checks(true)
            .enabled(true),
        json!({
            "disable_scp_checks": true,
            "enabled": true,
        }),
    );
}

#[test]
fn cidr_block_access() {
    assert_round_trip(
        CidrBlockAccess::builder().allow(CidrBlockAllowAccess::builder().mode("mode")),
        json!({
            "allow": {"mode": "mode"},
        }),
    );
}

#[test]
fn cidr_block_allow_access() {
    assert_round_trip(
        CidrBlockAllowAccess::builder()
            .mode("mode")
            .values(["values-1", "values-2"]),
        json!({
            "mode": "mode",
            "values": ["values-1", "values-2"],
        }),
    );
}

#[test]
fn client_component() {
    assert_round_trip(
        ClientComponent::builder()
            .name("name")
            .namespace("namespace"),
        json!({
            "name": "name",
            "namespace": "namespace",
        }),
    );
}

#[test]
fn cloud_provider() {
    assert_round_trip(
        CloudProvider::builder()
            .id("cloud-provider-1")
            .href("/api/clusters_mgmt/v1/cloud_providers/1")
            .display_name("display-name")
            .name("name")
            .regions([CloudRegion::builder().id("cloud-region-1")]),
        json!({
            "kind": "CloudProvider",
            "id": "cloud-provider-1",
            "href": "/api/clusters_mgmt/v1/cloud_providers/1",
            "display_name": "display-name",
            "name": "name",
            "regions": [{"kind": "CloudRegion", "id": "cloud-region-1"}],
        }),
    );
}

#[test]
fn cloud_region() {
    assert_round_trip(
        CloudRegion::builder()
            .id("cloud-region-1")
            .href("/api/clusters_mgmt/v1/cloud_regions/1")
            .ccs_only(true)
            .cloud_provider(CloudProvider::builder().id("cloud-provider-1"))
            .display_name("display-name")
            .enabled(true)
            .govcloud(true)
            .kms_location_id("kms-location-id")
            .name("name")
            .supports_multi_az(true),
        json!({
            "kind": "CloudRegion",
            "id": "cloud-region-1",
            "href": "/api/clusters_mgmt/v1/cloud_regions/1",
            "ccs_only": true,
            "cloud_provider": {"kind": "CloudProvider", "id": "cloud-provider-1"},
            "display_name": "display-name",
            "enabled": true,
            "govcloud": true,
            "kms_location_id": "kms-location-id",
            "name": "name",
            "supports_multi_az": true,
        }),
    );
}

#[test]
fn cloud_vpc() {
    assert_round_trip(
        CloudVpc::builder()
            .aws_subnets([Subnetwork::builder().cidr_block("cidr-block")])
            .cidr_block("cidr-block")
            .id("cloud-vpc-1")
            .name("name")
            .red_hat_managed(true)
            .subnets(["subnets-1", "subnets-2"]),
        json!({
            "aws_subnets": [{"cidr_block": "cidr-block"}],
            "cidr_block": "cidr-block",
            "id": "cloud-vpc-1",
            "name": "name",
            "red_hat_managed": true,
            "subnets": ["subnets-1", "subnets-2"],
        }),
    );
}

#[test]
fn cluster() {
    assert_round_trip(
        Cluster::builder()
            .id("cluster-1")
            .href("/api/clusters_mgmt/v1/clusters/1")
            .api(ClusterApi::builder().url("url"))
            .aws(Aws::builder().access_key_id("access-key-id"))
            .ccs(Ccs::builder().disable_scp_checks(true))
            .dns(Dns::builder().base_domain("base-domain"))
            .fips(true)
            .additional_trust_bundle("additional-trust-bundle")
            .billing_model(BillingModel::STANDARD)
            .cloud_provider(CloudProvider::builder().id("cloud-provider-1"))
            .console(ClusterConsole::builder().url("url"))
            .creation_timestamp(timestamp())
            .delete_protection(DeleteProtection::builder().enabled(true))
            .disable_user_workload_monitoring(true)
            .domain_prefix("domain-prefix")
            .etcd_encryption(true)
            .expiration_timestamp(timestamp())
            .external_id("external-id")
            .external_auth_config(ExternalAuthConfig::builder().enabled(true))
            .health_state(ClusterHealthState::HEALTHY)
            .hypershift(Hypershift::builder().enabled(true))
            .identity_providers(
                IdentityProviderListBuilder::new()
                    .push(IdentityProvider::builder().id("identity-provider-1")),
            )
            .infra_id("infra-id")
            .ingresses(IngressListBuilder::new().push(Ingress::builder().id("ingress-1")))
            .load_balancer_quota(2)
            .machine_pools(
                MachinePoolListBuilder::new()
                    .push(MachinePool::builder().id("machine-pool-1")),
            )
            .managed(true)
            .multi_az(true)
            .name("name")
            .network(Network::builder().machine_cidr("machine-cidr"))
            .node_drain_grace_period(Value::builder().unit("unit"))
            .node_pools(NodePoolListBuilder::new().push(NodePool::builder().id("node-pool-1")))
            .nodes(ClusterNodes::builder().compute(3))
            .openshift_version("openshift-version")
            .product(Product::builder().id("product-1"))
            .properties([("owner", "platform")])
            .proxy(Proxy::builder().http_proxy("http-proxy"))
            .region(CloudRegion::builder().id("cloud-region-1"))
            .state(ClusterState::ERROR)
            .status(ClusterStatus::builder().description("description"))
            .storage_quota(Value::builder().unit("unit"))
            .subscription(Subscription::builder().id("subscription-1"))
            .version(Version::builder().id("version-1")),
        json!({
            "kind": "Cluster",
            "id": "cluster-1",
            "href": "/api/clusters_mgmt/v1/clusters/1",
            "api": {"url": "url"},
            "aws": {"access_key_id": "access-key-id"},
            "ccs": {"disable_scp_checks": true},
            "dns": {"base_domain": "base-domain"},
            "fips": true,
            "additional_trust_bundle": "additional-trust-bundle",
            "billing_model": "standard",
            "cloud_provider": {"kind": "CloudProvider", "id": "cloud-provider-1"},
            "console": {"url": "url"},
            "creation_timestamp": "2024-05-01T10:00:00Z",
            "delete_protection": {"enabled": true},
            "disable_user_workload_monitoring": true,
            "domain_prefix": "domain-prefix",
            "etcd_encryption": true,
            "expiration_timestamp": "2024-05-01T10:00:00Z",
            "external_id": "external-id",
            "external_auth_config": {"enabled": true},
            "health_state": "healthy",
            "hypershift": {"enabled": true},
            "identity_providers": {
                "kind": "IdentityProviderList",
                "items": [{"kind": "IdentityProvider", "id": "identity-provider-1"}],
            },
            "infra_id": "infra-id",
            "ingresses": {
                "kind": "IngressList",
                "items": [{"kind": "Ingress", "id": "ingress-1"}],
            },
            "load_balancer_quota": 2,
            "machine_pools": {
                "kind": "MachinePoolList",
                "items": [{"kind": "MachinePool", "id": "machine-pool-1"}],
            },
            "managed": true,
            "multi_az": true,
            "name": "name",
            "network": {"machine_cidr": "machine-cidr"},
            "node_drain_grace_period": {"unit": "unit"},
            "node_pools": {
                "kind": "NodePoolList",
                "items": [{"kind": "NodePool", "id": "node-pool-1"}],
            },
            "nodes": {"compute": 3},
            "openshift_version": "openshift-version",
            "product": {"kind": "Product", "id": "product-1"},
            "properties": {"owner": "platform"},
            "proxy": {"http_proxy": "http-proxy"},
            "region": {"kind": "CloudRegion", "id": "cloud-region-1"},
            "state": "error",
            "status": {"description": "description"},
            "storage_quota": {"unit": "unit"},
            "subscription": {"kind": "Subscription", "id": "subscription-1"},
            "version": {"kind": "Version", "id": "version-1"},
        }),
    );
}

#[test]
fn cluster_api() {
    assert_round_trip(
        ClusterApi::builder()
            .url("url")
            .cidr_block_access(
                CidrBlockAccess::builder().allow(CidrBlockAllowAccess::builder().mode("mode")),
            )
            .listening(ListeningMethod::EXTERNAL),
        json!({
            "url": "url",
            "cidr_block_access": {
                "allow": {"mode": "mode"},
            },
            "listening": "external",
        }),
    );
}

#[test]
fn cluster_console() {
    assert_round_trip(
        ClusterConsole::builder().url("url"),
        json!({
            "url": "url",
        }),
    );
}

#[test]
fn cluster_nodes() {
    assert_round_trip(
        ClusterNodes::builder()
            .autoscale_compute(MachinePoolAutoscaling::builder().max_replicas(2))
            .availability_zones(["availability-zones-1", "availability-zones-2"])
            .compute(3)
            .compute_labels([("owner", "platform")])
            .compute_machine_type(MachineType::builder().id("machine-type-1"))
            .infra(4)
            .master(5),
        json!({
            "autoscale_compute": {"max_replicas": 2},
            "availability_zones": ["availability-zones-1", "availability-zones-2"],
            "compute": 3,
            "compute_labels": {"owner": "platform"},
            "compute_machine_type": {"kind": "MachineType", "id": "machine-type-1"},
            "infra": 4,
            "master": 5,
        }),
    );
}

#[test]
fn cluster_status() {
    assert_round_trip(
        ClusterStatus::builder()
            .configuration_mode(ClusterConfigurationMode::FULL)
            .description("description")
            .dns_ready(true)
            .limited_support_reason_count(2)
            .oidc_ready(true)
            .provision_error_code("provision-error-code")
            .provision_error_message("provision-error-message")
            .state(ClusterState::ERROR),
        json!({
            "configuration_mode": "full",
            "description": "description",
            "dns_ready": true,
            "limited_support_reason_count": 2,
            "oidc_ready": true,
            "provision_error_code": "provision-error-code",
            "provision_error_message": "provision-error-message",
            "state": "error",
        }),
    );
}

#[test]
fn delete_protection() {
    assert_round_trip(
        DeleteProtection::builder().enabled(true),
        json!({
            "enabled": true,
        }),
    );
}

#[test]
fn dns() {
    assert_round_trip(
        Dns::builder().base_domain("base-domain"),
        json!({
            "base_domain": "base-domain",
        }),
    );
}

#[test]
fn external_auth() {
    assert_round_trip(
        ExternalAuth::builder()
            .id("external-auth-1")
            .href("/api/clusters_mgmt/v1/external_auths/1")
            .claim(ExternalAuthClaim::builder().mappings(
                TokenClaimMappings::builder().groups(GroupsClaim::builder().claim("claim")),
            ))
            .clients([ExternalAuthClientConfig::builder().id("external-auth-client-config-1")])
            .issuer(TokenIssuer::builder().ca("ca")),
        json!({
            "kind": "ExternalAuth",
            "id": "external-auth-1",
            "href": "/api/clusters_mgmt/v1/external_auths/1",
            "claim": {
                "mappings": {
                    "groups": {"claim": "claim"},
                },
            },
            "clients": [{"id": "external-auth-client-config-1"}],
            "issuer": {"ca": "ca"},
        }),
    );
}

#[test]
fn external_auth_claim() {
    assert_round_trip(
        ExternalAuthClaim::builder()
            .mappings(TokenClaimMappings::builder().groups(GroupsClaim::builder().claim("claim")))
            .validation_rules([TokenClaimValidationRule::builder().claim("claim")]),
        json!({
            "mappings": {
                "groups": {"claim": "claim"},
            },
            "validation_rules": [{"claim": "claim"}],
        }),
    );
}

#[test]
fn external_auth_client_config() {
    assert_round_trip(
        ExternalAuthClientConfig::builder()
            .id("external-auth-client-config-1")
            .component(ClientComponent::builder().name("name"))
            .extra_scopes(["extra-scopes-1", "extra-scopes-2"])
            .secret("secret")
            .type_(ExternalAuthClientType::CONFIDENTIAL),
        json!({
            "id": "external-auth-client-config-1",
            "component": {"name": "name"},
            "extra_scopes": ["extra-scopes-1", "extra-scopes-2"],
            "secret": "secret",
            "type": "confidential",
        }),
    );
}

#[test]
fn external_auth_config() {
    assert_round_trip(
        ExternalAuthConfig::builder()
            .enabled(true)
            .external_auths(
                ExternalAuthListBuilder::new()
                    .push(ExternalAuth::builder().id("external-auth-1")),
            ),
        json!({
            "enabled": true,
            "external_auths": {
                "kind": "ExternalAuthList",
                "items": [{"kind": "ExternalAuth", "id": "external-auth-1"}],
            },
        }),
    );
}

#[test]
fn groups_claim() {
    assert_round_trip(
        GroupsClaim::builder()
            .claim("claim")
            .prefix("prefix"),
        json!({
            "claim": "claim",
            "prefix": "prefix",
        }),
    );
}

#[test]
fn htpasswd_identity_provider() {
    assert_round_trip(
        HtpasswdIdentityProvider::builder()
            .password("password")
            .username("username")
            .users(
                HtpasswdUserListBuilder::new()
                    .push(HtpasswdUser::builder().id("htpasswd-user-1")),
            ),
        json!({
            "password": "password",
            "username": "username",
            "users": {
                "kind": "HtpasswdUserList",
                "items": [{"kind": "HtpasswdUser", "id": "htpasswd-user-1"}],
            },
        }),
    );
}

#[test]
fn htpasswd_user() {
    assert_round_trip(
        HtpasswdUser::builder()
            .id("htpasswd-user-1")
            .href("/api/clusters_mgmt/v1/htpasswd_users/1")
            .hashed_password("hashed-password")
            .password("password")
            .username("username"),
        json!({
            "kind": "HtpasswdUser",
            "id": "htpasswd-user-1",
            "href": "/api/clusters_mgmt/v1/htpasswd_users/1",
            "hashed_password": "hashed-password",
            "password": "password",
            "username": "username",
        }),
    );
}

#[test]
fn hypershift() {
    assert_round_trip(
        Hypershift::builder().enabled(true),
        json!({
            "enabled": true,
        }),
    );
}

#[test]
fn identity_provider() {
    assert_round_trip(
        IdentityProvider::builder()
            .id("identity-provider-1")
            .href("/api/clusters_mgmt/v1/identity_providers/1")
            .challenge(true)
            .htpasswd(HtpasswdIdentityProvider::builder().password("password"))
            .login(true)
            .mapping_method(IdentityProviderMappingMethod::ADD)
            .name("name")
            .open_id(OpenIdIdentityProvider::builder().ca("ca"))
            .type_(IdentityProviderType::GITHUB),
        json!({
            "kind": "IdentityProvider",
            "id": "identity-provider-1",
            "href": "/api/clusters_mgmt/v1/identity_providers/1",
            "challenge": true,
            "htpasswd": {"password": "password"},
            "login": true,
            "mapping_method": "add",
            "name": "name",
            "open_id": {"ca": "ca"},
            "type": "GithubIdentityProvider",
        }),
    );
}

#[test]
fn ingress() {
    assert_round_trip(
        Ingress::builder()
            .id("ingress-1")
            .href("/api/clusters_mgmt/v1/ingresss/1")
            .is_default(true)
            .dns_name("dns-name")
            .excluded_namespaces(["excluded-namespaces-1", "excluded-namespaces-2"])
            .listening(ListeningMethod::EXTERNAL)
            .load_balancer_type(LoadBalancerFlavor::CLASSIC)
            .route_selectors([("owner", "platform")]),
        json!({
            "kind": "Ingress",
            "id": "ingress-1",
            "href": "/api/clusters_mgmt/v1/ingresss/1",
            "default": true,
            "dns_name": "dns-name",
            "excluded_namespaces": ["excluded-namespaces-1", "excluded-namespaces-2"],
            "listening": "external",
            "load_balancer_type": "classic",
            "route_selectors": {"owner": "platform"},
        }),
    );
}

#[test]
fn instance_iam_roles() {
    assert_round_trip(
        InstanceIamRoles::builder()
            .master_role_arn("master-role-arn")
            .worker_role_arn("worker-role-arn"),
        json!({
            "master_role_arn": "master-role-arn",
            "worker_role_arn": "worker-role-arn",
        }),
    );
}

#[test]
fn machine_pool() {
    assert_round_trip(
        MachinePool::builder()
            .id("machine-pool-1")
            .href("/api/clusters_mgmt/v1/machine_pools/1")
            .autoscaling(MachinePoolAutoscaling::builder().max_replicas(2))
            .availability_zones(["availability-zones-1", "availability-zones-2"])
            .aws(AwsMachinePool::builder().tags([("owner", "platform")]))
            .instance_type("instance-type")
            .labels([("owner", "platform")])
            .replicas(3)
            .subnets(["subnets-1", "subnets-2"])
            .taints([Taint::builder().effect("effect")]),
        json!({
            "kind": "MachinePool",
            "id": "machine-pool-1",
            "href": "/api/clusters_mgmt/v1/machine_pools/1",
            "autoscaling": {"max_replicas": 2},
            "availability_zones": ["availability-zones-1", "availability-zones-2"],
            "aws": {
                "tags": {"owner": "platform"},
            },
            "instance_type": "instance-type",
            "labels": {"owner": "platform"},
            "replicas": 3,
            "subnets": ["subnets-1", "subnets-2"],
            "taints": [{"effect": "effect"}],
        }),
    );
}

#[test]
fn machine_pool_autoscaling() {
    assert_round_trip(
        MachinePoolAutoscaling::builder()
            .max_replicas(2)
            .min_replicas(3),
        json!({
            "max_replicas": 2,
            "min_replicas": 3,
        }),
    );
}

#[test]
fn machine_type() {
    assert_round_trip(
        MachineType::builder()
            .id("machine-type-1")
            .href("/api/clusters_mgmt/v1/machine_types/1")
            .category(MachineTypeCategory::ACCELERATED_COMPUTING)
            .cloud_provider(CloudProvider::builder().id("cloud-provider-1"))
            .cpu(Value::builder().unit("unit"))
            .memory(Value::builder().unit("unit"))
            .name("name")
            .size(MachineTypeSize::LARGE),
        json!({
            "kind": "MachineType",
            "id": "machine-type-1",
            "href": "/api/clusters_mgmt/v1/machine_types/1",
            "category": "accelerated_computing",
            "cloud_provider": {"kind": "CloudProvider", "id": "cloud-provider-1"},
            "cpu": {"unit": "unit"},
            "memory": {"unit": "unit"},
            "name": "name",
            "size": "large",
        }),
    );
}

#[test]
fn network() {
    assert_round_trip(
        Network::builder()
            .host_prefix(2)
            .machine_cidr("machine-cidr")
            .pod_cidr("pod-cidr")
            .service_cidr("service-cidr")
            .type_("type"),
        json!({
            "host_prefix": 2,
            "machine_cidr": "machine-cidr",
            "pod_cidr": "pod-cidr",
            "service_cidr": "service-cidr",
            "type": "type",
        }),
    );
}

#[test]
fn node_pool() {
    assert_round_trip(
        NodePool::builder()
            .id("node-pool-1")
            .href("/api/clusters_mgmt/v1/node_pools/1")
            .auto_repair(true)
            .autoscaling(NodePoolAutoscaling::builder().max_replica(2))
            .availability_zone("availability-zone")
            .aws_node_pool(AwsNodePool::builder().instance_profile("instance-profile"))
            .labels([("owner", "platform")])
            .replicas(3)
            .status(NodePoolStatus::builder().message("message"))
            .subnet("subnet")
            .taints([Taint::builder().effect("effect")])
            .version(Version::builder().id("version-1")),
        json!({
            "kind": "NodePool",
            "id": "node-pool-1",
            "href": "/api/clusters_mgmt/v1/node_pools/1",
            "auto_repair": true,
            "autoscaling": {"max_replica": 2},
            "availability_zone": "availability-zone",
            "aws_node_pool": {"instance_profile": "instance-profile"},
            "labels": {"owner": "platform"},
            "replicas": 3,
            "status": {"message": "message"},
            "subnet": "subnet",
            "taints": [{"effect": "effect"}],
            "version": {"kind": "Version", "id": "version-1"},
        }),
    );
}

#[test]
fn node_pool_autoscaling() {
    assert_round_trip(
        NodePoolAutoscaling::builder()
            .max_replica(2)
            .min_replica(3),
        json!({
            "max_replica": 2,
            "min_replica": 3,
        }),
    );
}

#[test]
fn node_pool_status() {
    assert_round_trip(
        NodePoolStatus::builder()
            .current_replicas(2)
            .message("message"),
        json!({
            "current_replicas": 2,
            "message": "message",
        }),
    );
}

#[test]
fn open_id_claims() {
    assert_round_trip(
        OpenIdClaims::builder()
            .email(["email-1", "email-2"])
            .groups(["groups-1", "groups-2"])
            .name(["name-1", "name-2"])
            .preferred_username(["preferred-username-1", "preferred-username-2"]),
        json!({
            "email": ["email-1", "email-2"],
            "groups": ["groups-1", "groups-2"],
            "name": ["name-1", "name-2"],
            "preferred_username": ["preferred-username-1", "preferred-username-2"],
        }),
    );
}

#[test]
fn open_id_identity_provider() {
    assert_round_trip(
        OpenIdIdentityProvider::builder()
            .ca("ca")
            .claims(OpenIdClaims::builder().email(["email-1", "email-2"]))
            .client_id("client-id")
            .client_secret("client-secret")
            .extra_authorize_parameters([("owner", "platform")])
            .extra_scopes(["extra-scopes-1", "extra-scopes-2"])
            .issuer("issuer"),
        json!({
            "ca": "ca",
            "claims": {
                "email": ["email-1", "email-2"],
            },
            "client_id": "client-id",
            "client_secret": "client-secret",
            "extra_authorize_parameters": {"owner": "platform"},
            "extra_scopes": ["extra-scopes-1", "extra-scopes-2"],
            "issuer": "issuer",
        }),
    );
}

#[test]
fn operator_iam_role() {
    assert_round_trip(
        OperatorIamRole::builder()
            .id("operator-iam-role-1")
            .name("name")
            .namespace("namespace")
            .role_arn("role-arn")
            .service_account("service-account"),
        json!({
            "id": "operator-iam-role-1",
            "name": "name",
            "namespace": "namespace",
            "role_arn": "role-arn",
            "service_account": "service-account",
        }),
    );
}

#[test]
fn product() {
    assert_round_trip(
        Product::builder()
            .id("product-1")
            .href("/api/clusters_mgmt/v1/products/1")
            .name("name"),
        json!({
            "kind": "Product",
            "id": "product-1",
            "href": "/api/clusters_mgmt/v1/products/1",
            "name": "name",
        }),
    );
}

#[test]
fn proxy() {
    assert_round_trip(
        Proxy::builder()
            .http_proxy("http-proxy")
            .https_proxy("https-proxy")
            .no_proxy("no-proxy"),
        json!({
            "http_proxy": "http-proxy",
            "https_proxy": "https-proxy",
            "no_proxy": "no-proxy",
        }),
    );
}

#[test]
fn sts() {
    assert_round_trip(
        Sts::builder()
            .auto_mode(true)
            .enabled(true)
            .external_id("external-id")
            .instance_iam_roles(InstanceIamRoles::builder().master_role_arn("master-role-arn"))
            .managed_policies(true)
            .oidc_endpoint_url("oidc-endpoint-url")
            .operator_iam_roles([OperatorIamRole::builder().id("operator-iam-role-1")])
            .operator_role_prefix("operator-role-prefix")
            .role_arn("role-arn")
            .support_role_arn("support-role-arn"),
        json!({
            "auto_mode": true,
            "enabled": true,
            "external_id": "external-id",
            "instance_iam_roles": {"master_role_arn": "master-role-arn"},
            "managed_policies": true,
            "oidc_endpoint_url": "oidc-endpoint-url",
            "operator_iam_roles": [{"id": "operator-iam-role-1"}],
            "operator_role_prefix": "operator-role-prefix",
            "role_arn": "role-arn",
            "support_role_arn": "support-role-arn",
        }),
    );
}

#[test]
fn subnetwork() {
    assert_round_trip(
        Subnetwork::builder()
            .cidr_block("cidr-block")
            .availability_zone("availability-zone")
            .name("name")
            .public(true)
            .red_hat_managed(true)
            .subnet_id("subnet-id")
            .vpc_id("vpc-id"),
        json!({
            "cidr_block": "cidr-block",
            "availability_zone": "availability-zone",
            "name": "name",
            "public": true,
            "red_hat_managed": true,
            "subnet_id": "subnet-id",
            "vpc_id": "vpc-id",
        }),
    );
}

#[test]
fn subscription() {
    assert_round_trip(
        Subscription::builder()
            .id("subscription-1")
            .href("/api/clusters_mgmt/v1/subscriptions/1"),
        json!({
            "kind": "Subscription",
            "id": "subscription-1",
            "href": "/api/clusters_mgmt/v1/subscriptions/1",
        }),
    );
}

#[test]
fn taint() {
    assert_round_trip(
        Taint::builder()
            .effect("effect")
            .key("key")
            .value("value"),
        json!({
            "effect": "effect",
            "key": "key",
            "value": "value",
        }),
    );
}

#[test]
fn token_claim_mappings() {
    assert_round_trip(
        TokenClaimMappings::builder()
            .groups(GroupsClaim::builder().claim("claim"))
            .user_name(UsernameClaim::builder().claim("claim")),
        json!({
            "groups": {"claim": "claim"},
            "user_name": {"claim": "claim"},
        }),
    );
}

#[test]
fn token_claim_validation_rule() {
    assert_round_trip(
        TokenClaimValidationRule::builder()
            .claim("claim")
            .required_value("required-value"),
        json!({
            "claim": "claim",
            "required_value": "required-value",
        }),
    );
}

#[test]
fn token_issuer() {
    assert_round_trip(
        TokenIssuer::builder()
            .ca("ca")
            .url("url")
            .audiences(["audiences-1", "audiences-2"]),
        json!({
            "ca": "ca",
            "url": "url",
            "audiences": ["audiences-1", "audiences-2"],
        }),
    );
}

#[test]
fn username_claim() {
    assert_round_trip(
        UsernameClaim::builder()
            .claim("claim")
            .prefix("prefix")
            .prefix_policy("prefix-policy"),
        json!({
            "claim": "claim",
            "prefix": "prefix",
            "prefix_policy": "prefix-policy",
        }),
    );
}

#[test]
fn value() {
    assert_round_trip(
        Value::builder()
            .unit("unit")
            .value(1.5),
        json!({
            "unit": "unit",
            "value": 1.5,
        }),
    );
}

#[test]
fn version() {
    assert_round_trip(
        Version::builder()
            .id("version-1")
            .href("/api/clusters_mgmt/v1/versions/1")
            .available_upgrades(["available-upgrades-1", "available-upgrades-2"])
            .channel_group("channel-group")
            .is_default(true)
            .enabled(true)
            .end_of_life_timestamp(timestamp())
            .hosted_control_plane_enabled(true)
            .raw_id("raw-id")
            .rosa_enabled(true),
        json!({
            "kind": "Version",
            "id": "version-1",
            "href": "/api/clusters_mgmt/v1/versions/1",
            "available_upgrades": ["available-upgrades-1", "available-upgrades-2"],
            "channel_group": "channel-group",
            "default": true,
            "enabled": true,
            "end_of_life_timestamp": "2024-05-01T10:00:00Z",
            "hosted_control_plane_enabled": true,
            "raw_id": "raw-id",
            "rosa_enabled": true,
        }),
    );
}

// =============================================================================
// Accounts management
// =============================================================================

mod accounts {
    use super::{assert_round_trip, timestamp};
    use ocm_api_model::accountsmgmt::v1::{
        BillingModel, Organization, QuotaCost, RelatedResource, ReservedResource,
    };
    use serde_json::json;

    #[test]
    fn organization() {
        assert_round_trip(
            Organization::builder()
                .id("organization-1")
                .href("/api/accounts_mgmt/v1/organizations/1")
                .created_at(timestamp())
                .ebs_account_id("ebs-account-id")
                .external_id("external-id")
                .name("name")
                .updated_at(timestamp()),
            json!({
                "kind": "Organization",
                "id": "organization-1",
                "href": "/api/accounts_mgmt/v1/organizations/1",
                "created_at": "2024-05-01T10:00:00Z",
                "ebs_account_id": "ebs-account-id",
                "external_id": "external-id",
                "name": "name",
                "updated_at": "2024-05-01T10:00:00Z",
            }),
        );
    }

    #[test]
    fn quota_cost() {
        assert_round_trip(
            QuotaCost::builder()
                .allowed(2)
                .consumed(3)
                .organization_id("organization-id")
                .quota_id("quota-id")
                .related_resources([
                    RelatedResource::builder().availability_zone_type("availability-zone-type"),
                ])
                .version("version"),
            json!({
                "allowed": 2,
                "consumed": 3,
                "organization_id": "organization-id",
                "quota_id": "quota-id",
                "related_resources": [{"availability_zone_type": "availability-zone-type"}],
                "version": "version",
            }),
        );
    }

    #[test]
    fn related_resource() {
        assert_round_trip(
            RelatedResource::builder()
                .availability_zone_type("availability-zone-type")
                .billing_model("billing-model")
                .byoc("byoc")
                .cloud_provider("cloud-provider")
                .cost(2)
                .product("product")
                .resource_name("resource-name")
                .resource_type("resource-type"),
            json!({
                "availability_zone_type": "availability-zone-type",
                "billing_model": "billing-model",
                "byoc": "byoc",
                "cloud_provider": "cloud-provider",
                "cost": 2,
                "product": "product",
                "resource_name": "resource-name",
                "resource_type": "resource-type",
            }),
        );
    }

    #[test]
    fn reserved_resource() {
        assert_round_trip(
            ReservedResource::builder()
                .availability_zone_type("availability-zone-type")
                .billing_marketplace_account("billing-marketplace-account")
                .billing_model(BillingModel::STANDARD)
                .byoc(true)
                .count(2)
                .created_at(timestamp())
                .resource_name("resource-name")
                .resource_type("resource-type")
                .scope("scope")
                .updated_at(timestamp()),
            json!({
                "availability_zone_type": "availability-zone-type",
                "billing_marketplace_account": "billing-marketplace-account",
                "billing_model": "standard",
                "byoc": true,
                "count": 2,
                "created_at": "2024-05-01T10:00:00Z",
                "resource_name": "resource-name",
                "resource_type": "resource-type",
                "scope": "scope",
                "updated_at": "2024-05-01T10:00:00Z",
            }),
        );
    }
}
