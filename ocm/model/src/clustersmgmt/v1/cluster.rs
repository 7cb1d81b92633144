use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ocm_model_core::{
    builder::{build_nested, copy_nested},
    empty_map,
    BuildError,
    KindTag,
    List,
    ListBuilder,
    ObjectBuilder,
    Resource,
};
use serde::{Deserialize, Serialize};

use super::aws::{Aws, AwsBuilder};
use super::ccs::{Ccs, CcsBuilder};
use super::cloud_provider::{CloudProvider, CloudProviderBuilder};
use super::cloud_region::{CloudRegion, CloudRegionBuilder};
use super::cluster_api::{ClusterApi, ClusterApiBuilder};
use super::cluster_console::{ClusterConsole, ClusterConsoleBuilder};
use super::cluster_nodes::{ClusterNodes, ClusterNodesBuilder};
use super::cluster_status::{ClusterStatus, ClusterStatusBuilder};
use super::delete_protection::{DeleteProtection, DeleteProtectionBuilder};
use super::dns::{Dns, DnsBuilder};
use super::enums::{BillingModel, ClusterHealthState, ClusterState};
use super::external_auth_config::{ExternalAuthConfig, ExternalAuthConfigBuilder};
use super::hypershift::{Hypershift, HypershiftBuilder};
use super::identity_provider::{IdentityProvider, IdentityProviderBuilder};
use super::ingress::{Ingress, IngressBuilder};
use super::machine_pool::{MachinePool, MachinePoolBuilder};
use super::network::{Network, NetworkBuilder};
use super::node_pool::{NodePool, NodePoolBuilder};
use super::product::{Product, ProductBuilder};
use super::proxy::{Proxy, ProxyBuilder};
use super::subscription::{Subscription, SubscriptionBuilder};
use super::value::{Value, ValueBuilder};
use super::version::{Version, VersionBuilder};

/// Definition of an _OpenShift_ cluster.
///
/// The `cloud_provider` attribute is a reference to the cloud provider. When a
/// cluster is retrieved it is usually a link, containing only the kind, id and
/// href attributes:
///
/// ```json
/// {
///   "cloud_provider": {
///     "kind": "CloudProviderLink",
///     "id": "aws",
///     "href": "/api/clusters_mgmt/v1/cloud_providers/aws"
///   }
/// }
/// ```
///
/// When a cluster is created the reference is optional, and if used it only
/// needs the identifier. The `region` attribute is mandatory on creation.
///
/// Every attribute has two accessors: `x()` returns the zero value of the
/// attribute type when it is not set, `get_x()` returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    kind: KindTag<Cluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api: Option<ClusterApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aws: Option<Aws>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ccs: Option<Ccs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns: Option<Dns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fips: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_trust_bundle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_model: Option<BillingModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_provider: Option<CloudProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    console: Option<ClusterConsole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_protection: Option<DeleteProtection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disable_user_workload_monitoring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    etcd_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_auth_config: Option<ExternalAuthConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    health_state: Option<ClusterHealthState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hypershift: Option<Hypershift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identity_providers: Option<List<IdentityProvider>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    infra_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ingresses: Option<List<Ingress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_quota: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    machine_pools: Option<List<MachinePool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<Network>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_drain_grace_period: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_pools: Option<List<NodePool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<ClusterNodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    openshift_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxy: Option<Proxy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<CloudRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<ClusterState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ClusterStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    storage_quota: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subscription: Option<Subscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<Version>,
}

impl Resource for Cluster {
    const KIND: &'static str = "Cluster";
    const LINK_KIND: &'static str = "ClusterLink";
    const NIL_KIND: &'static str = "ClusterNil";
    const LIST_KIND: &'static str = "ClusterList";
    const LIST_LINK_KIND: &'static str = "ClusterListLink";
    const LIST_NIL_KIND: &'static str = "ClusterListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl Cluster {
    /// Returns a builder for this type.
    pub fn builder() -> ClusterBuilder {
        ClusterBuilder::new()
    }

    /// Returns `ClusterLink` for links and `Cluster` otherwise.
    pub fn kind(&self) -> &'static str {
        Self::kind_of(Some(self))
    }

    /// Returns `true` if this is a link to the object rather than the object
    /// itself.
    pub fn link(&self) -> bool {
        self.kind.is_link()
    }

    /// Identifier of the object.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Self link.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    pub fn get_href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.api.is_none()
            && self.aws.is_none()
            && self.ccs.is_none()
            && self.dns.is_none()
            && self.fips.is_none()
            && self.additional_trust_bundle.is_none()
            && self.billing_model.is_none()
            && self.cloud_provider.is_none()
            && self.console.is_none()
            && self.creation_timestamp.is_none()
            && self.delete_protection.is_none()
            && self.disable_user_workload_monitoring.is_none()
            && self.domain_prefix.is_none()
            && self.etcd_encryption.is_none()
            && self.expiration_timestamp.is_none()
            && self.external_id.is_none()
            && self.external_auth_config.is_none()
            && self.health_state.is_none()
            && self.hypershift.is_none()
            && self.identity_providers.is_none()
            && self.infra_id.is_none()
            && self.ingresses.is_none()
            && self.load_balancer_quota.is_none()
            && self.machine_pools.is_none()
            && self.managed.is_none()
            && self.multi_az.is_none()
            && self.name.is_none()
            && self.network.is_none()
            && self.node_drain_grace_period.is_none()
            && self.node_pools.is_none()
            && self.nodes.is_none()
            && self.openshift_version.is_none()
            && self.product.is_none()
            && self.properties.is_none()
            && self.proxy.is_none()
            && self.region.is_none()
            && self.state.is_none()
            && self.status.is_none()
            && self.storage_quota.is_none()
            && self.subscription.is_none()
            && self.version.is_none()
    }

    /// Information about the API of the cluster.
    pub fn api(&self) -> Option<&ClusterApi> {
        self.api.as_ref()
    }

    pub fn get_api(&self) -> Option<&ClusterApi> {
        self.api.as_ref()
    }

    /// Amazon Web Services settings of the cluster.
    pub fn aws(&self) -> Option<&Aws> {
        self.aws.as_ref()
    }

    pub fn get_aws(&self) -> Option<&Aws> {
        self.aws.as_ref()
    }

    /// Customer Cloud Subscription settings.
    pub fn ccs(&self) -> Option<&Ccs> {
        self.ccs.as_ref()
    }

    pub fn get_ccs(&self) -> Option<&Ccs> {
        self.ccs.as_ref()
    }

    /// DNS settings of the cluster.
    pub fn dns(&self) -> Option<&Dns> {
        self.dns.as_ref()
    }

    pub fn get_dns(&self) -> Option<&Dns> {
        self.dns.as_ref()
    }

    /// Create cluster that uses FIPS Validated / Modules in Process cryptographic
    /// libraries.
    pub fn fips(&self) -> bool {
        self.fips.unwrap_or_default()
    }

    pub fn get_fips(&self) -> Option<bool> {
        self.fips
    }

    /// Additional trust bundle, PEM encoded.
    pub fn additional_trust_bundle(&self) -> &str {
        self.additional_trust_bundle.as_deref().unwrap_or_default()
    }

    pub fn get_additional_trust_bundle(&self) -> Option<&str> {
        self.additional_trust_bundle.as_deref()
    }

    /// Billing model for cluster resources.
    pub fn billing_model(&self) -> BillingModel {
        self.billing_model.clone().unwrap_or_default()
    }

    pub fn get_billing_model(&self) -> Option<&BillingModel> {
        self.billing_model.as_ref()
    }

    /// Link to the cloud provider where the cluster is installed.
    pub fn cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    pub fn get_cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    /// Information about the console of the cluster.
    pub fn console(&self) -> Option<&ClusterConsole> {
        self.console.as_ref()
    }

    pub fn get_console(&self) -> Option<&ClusterConsole> {
        self.console.as_ref()
    }

    /// Date and time when the cluster was initially created, using the format
    /// defined in RFC 3339.
    pub fn creation_timestamp(&self) -> DateTime<Utc> {
        self.creation_timestamp.unwrap_or_default()
    }

    pub fn get_creation_timestamp(&self) -> Option<DateTime<Utc>> {
        self.creation_timestamp
    }

    /// Delete protection of the cluster.
    pub fn delete_protection(&self) -> Option<&DeleteProtection> {
        self.delete_protection.as_ref()
    }

    pub fn get_delete_protection(&self) -> Option<&DeleteProtection> {
        self.delete_protection.as_ref()
    }

    /// Indicates whether the User workload monitoring is enabled or not.
    pub fn disable_user_workload_monitoring(&self) -> bool {
        self.disable_user_workload_monitoring.unwrap_or_default()
    }

    pub fn get_disable_user_workload_monitoring(&self) -> Option<bool> {
        self.disable_user_workload_monitoring
    }

    /// Prefix of the DNS domain used by the cluster.
    pub fn domain_prefix(&self) -> &str {
        self.domain_prefix.as_deref().unwrap_or_default()
    }

    pub fn get_domain_prefix(&self) -> Option<&str> {
        self.domain_prefix.as_deref()
    }

    /// Indicates whether that etcd is encrypted or not.
    pub fn etcd_encryption(&self) -> bool {
        self.etcd_encryption.unwrap_or_default()
    }

    pub fn get_etcd_encryption(&self) -> Option<bool> {
        self.etcd_encryption
    }

    /// Date and time when the cluster will be automatically deleted.
    pub fn expiration_timestamp(&self) -> DateTime<Utc> {
        self.expiration_timestamp.unwrap_or_default()
    }

    pub fn get_expiration_timestamp(&self) -> Option<DateTime<Utc>> {
        self.expiration_timestamp
    }

    /// External identifier of the cluster, generated by the installer.
    pub fn external_id(&self) -> &str {
        self.external_id.as_deref().unwrap_or_default()
    }

    pub fn get_external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// External authentication configuration.
    pub fn external_auth_config(&self) -> Option<&ExternalAuthConfig> {
        self.external_auth_config.as_ref()
    }

    pub fn get_external_auth_config(&self) -> Option<&ExternalAuthConfig> {
        self.external_auth_config.as_ref()
    }

    pub fn health_state(&self) -> ClusterHealthState {
        self.health_state.clone().unwrap_or_default()
    }

    pub fn get_health_state(&self) -> Option<&ClusterHealthState> {
        self.health_state.as_ref()
    }

    /// Hypershift configuration.
    pub fn hypershift(&self) -> Option<&Hypershift> {
        self.hypershift.as_ref()
    }

    pub fn get_hypershift(&self) -> Option<&Hypershift> {
        self.hypershift.as_ref()
    }

    /// Link to the collection of identity providers of the cluster.
    pub fn identity_providers(&self) -> Option<&List<IdentityProvider>> {
        self.identity_providers.as_ref()
    }

    pub fn get_identity_providers(&self) -> Option<&List<IdentityProvider>> {
        self.identity_providers.as_ref()
    }

    /// Infra ID of the cluster.
    pub fn infra_id(&self) -> &str {
        self.infra_id.as_deref().unwrap_or_default()
    }

    pub fn get_infra_id(&self) -> Option<&str> {
        self.infra_id.as_deref()
    }

    /// List of ingresses on this cluster.
    pub fn ingresses(&self) -> Option<&List<Ingress>> {
        self.ingresses.as_ref()
    }

    pub fn get_ingresses(&self) -> Option<&List<Ingress>> {
        self.ingresses.as_ref()
    }

    /// Load balancer quota to be assigned to the cluster.
    pub fn load_balancer_quota(&self) -> i32 {
        self.load_balancer_quota.unwrap_or_default()
    }

    pub fn get_load_balancer_quota(&self) -> Option<i32> {
        self.load_balancer_quota
    }

    /// List of machine pools on this cluster.
    pub fn machine_pools(&self) -> Option<&List<MachinePool>> {
        self.machine_pools.as_ref()
    }

    pub fn get_machine_pools(&self) -> Option<&List<MachinePool>> {
        self.machine_pools.as_ref()
    }

    /// Flag indicating if the cluster is managed (by Red Hat) or self-managed by
    /// the user.
    pub fn managed(&self) -> bool {
        self.managed.unwrap_or_default()
    }

    pub fn get_managed(&self) -> Option<bool> {
        self.managed
    }

    /// Flag indicating if the cluster should be created with nodes in different
    /// availability zones.
    pub fn multi_az(&self) -> bool {
        self.multi_az.unwrap_or_default()
    }

    pub fn get_multi_az(&self) -> Option<bool> {
        self.multi_az
    }

    /// Name of the cluster. Only used on creation; afterwards use `display_name` of
    /// the subscription.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Network settings of the cluster.
    pub fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    pub fn get_network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    /// Node drain grace period.
    pub fn node_drain_grace_period(&self) -> Option<&Value> {
        self.node_drain_grace_period.as_ref()
    }

    pub fn get_node_drain_grace_period(&self) -> Option<&Value> {
        self.node_drain_grace_period.as_ref()
    }

    /// List of node pools on this cluster.
    pub fn node_pools(&self) -> Option<&List<NodePool>> {
        self.node_pools.as_ref()
    }

    pub fn get_node_pools(&self) -> Option<&List<NodePool>> {
        self.node_pools.as_ref()
    }

    /// Information about the nodes of the cluster.
    pub fn nodes(&self) -> Option<&ClusterNodes> {
        self.nodes.as_ref()
    }

    pub fn get_nodes(&self) -> Option<&ClusterNodes> {
        self.nodes.as_ref()
    }

    /// Version of _OpenShift_ installed in the cluster, for example `4.15.3`.
    pub fn openshift_version(&self) -> &str {
        self.openshift_version.as_deref().unwrap_or_default()
    }

    pub fn get_openshift_version(&self) -> Option<&str> {
        self.openshift_version.as_deref()
    }

    /// Link to the product type of this cluster.
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn get_product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// User defined properties for tagging and querying.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        self.properties.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_properties(&self) -> Option<&BTreeMap<String, String>> {
        self.properties.as_ref()
    }

    /// Proxy.
    pub fn proxy(&self) -> Option<&Proxy> {
        self.proxy.as_ref()
    }

    pub fn get_proxy(&self) -> Option<&Proxy> {
        self.proxy.as_ref()
    }

    /// Link to the cloud provider region where the cluster is installed.
    pub fn region(&self) -> Option<&CloudRegion> {
        self.region.as_ref()
    }

    pub fn get_region(&self) -> Option<&CloudRegion> {
        self.region.as_ref()
    }

    /// Overall state of the cluster.
    pub fn state(&self) -> ClusterState {
        self.state.clone().unwrap_or_default()
    }

    pub fn get_state(&self) -> Option<&ClusterState> {
        self.state.as_ref()
    }

    /// Status of the cluster.
    pub fn status(&self) -> Option<&ClusterStatus> {
        self.status.as_ref()
    }

    pub fn get_status(&self) -> Option<&ClusterStatus> {
        self.status.as_ref()
    }

    /// Storage quota to be assigned to the cluster.
    pub fn storage_quota(&self) -> Option<&Value> {
        self.storage_quota.as_ref()
    }

    pub fn get_storage_quota(&self) -> Option<&Value> {
        self.storage_quota.as_ref()
    }

    /// Link to the subscription that comes from the account management service.
    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn get_subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    /// Link to the version of _OpenShift_ that will be used to install the cluster.
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn get_version(&self) -> Option<&Version> {
        self.version.as_ref()
    }
}

/// Builder for [`Cluster`].
#[derive(Debug, Clone, Default)]
pub struct ClusterBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    api: Option<ClusterApiBuilder>,
    aws: Option<AwsBuilder>,
    ccs: Option<CcsBuilder>,
    dns: Option<DnsBuilder>,
    fips: Option<bool>,
    additional_trust_bundle: Option<String>,
    billing_model: Option<BillingModel>,
    cloud_provider: Option<CloudProviderBuilder>,
    console: Option<ClusterConsoleBuilder>,
    creation_timestamp: Option<DateTime<Utc>>,
    delete_protection: Option<DeleteProtectionBuilder>,
    disable_user_workload_monitoring: Option<bool>,
    domain_prefix: Option<String>,
    etcd_encryption: Option<bool>,
    expiration_timestamp: Option<DateTime<Utc>>,
    external_id: Option<String>,
    external_auth_config: Option<ExternalAuthConfigBuilder>,
    health_state: Option<ClusterHealthState>,
    hypershift: Option<HypershiftBuilder>,
    identity_providers: Option<ListBuilder<IdentityProviderBuilder>>,
    infra_id: Option<String>,
    ingresses: Option<ListBuilder<IngressBuilder>>,
    load_balancer_quota: Option<i32>,
    machine_pools: Option<ListBuilder<MachinePoolBuilder>>,
    managed: Option<bool>,
    multi_az: Option<bool>,
    name: Option<String>,
    network: Option<NetworkBuilder>,
    node_drain_grace_period: Option<ValueBuilder>,
    node_pools: Option<ListBuilder<NodePoolBuilder>>,
    nodes: Option<ClusterNodesBuilder>,
    openshift_version: Option<String>,
    product: Option<ProductBuilder>,
    properties: Option<BTreeMap<String, String>>,
    proxy: Option<ProxyBuilder>,
    region: Option<CloudRegionBuilder>,
    state: Option<ClusterState>,
    status: Option<ClusterStatusBuilder>,
    storage_quota: Option<ValueBuilder>,
    subscription: Option<SubscriptionBuilder>,
    version: Option<VersionBuilder>,
}

impl ClusterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag that indicates if this is a link.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// Information about the API of the cluster.
    pub fn api(mut self, value: ClusterApiBuilder) -> Self {
        self.api = Some(value);
        self
    }

    /// Amazon Web Services settings of the cluster.
    pub fn aws(mut self, value: AwsBuilder) -> Self {
        self.aws = Some(value);
        self
    }

    /// Customer Cloud Subscription settings.
    pub fn ccs(mut self, value: CcsBuilder) -> Self {
        self.ccs = Some(value);
        self
    }

    /// DNS settings of the cluster.
    pub fn dns(mut self, value: DnsBuilder) -> Self {
        self.dns = Some(value);
        self
    }

    /// Create cluster that uses FIPS Validated / Modules in Process cryptographic
    /// libraries.
    pub fn fips(mut self, value: bool) -> Self {
        self.fips = Some(value);
        self
    }

    /// Additional trust bundle, PEM encoded.
    pub fn additional_trust_bundle(mut self, value: impl Into<String>) -> Self {
        self.additional_trust_bundle = Some(value.into());
        self
    }

    /// Billing model for cluster resources.
    pub fn billing_model(mut self, value: impl Into<BillingModel>) -> Self {
        self.billing_model = Some(value.into());
        self
    }

    /// Link to the cloud provider where the cluster is installed.
    pub fn cloud_provider(mut self, value: CloudProviderBuilder) -> Self {
        self.cloud_provider = Some(value);
        self
    }

    /// Information about the console of the cluster.
    pub fn console(mut self, value: ClusterConsoleBuilder) -> Self {
        self.console = Some(value);
        self
    }

    /// Date and time when the cluster was initially created, using the format
    /// defined in RFC 3339.
    pub fn creation_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.creation_timestamp = Some(value);
        self
    }

    /// Delete protection of the cluster.
    pub fn delete_protection(mut self, value: DeleteProtectionBuilder) -> Self {
        self.delete_protection = Some(value);
        self
    }

    /// Indicates whether the User workload monitoring is enabled or not.
    pub fn disable_user_workload_monitoring(mut self, value: bool) -> Self {
        self.disable_user_workload_monitoring = Some(value);
        self
    }

    /// Prefix of the DNS domain used by the cluster.
    pub fn domain_prefix(mut self, value: impl Into<String>) -> Self {
        self.domain_prefix = Some(value.into());
        self
    }

    /// Indicates whether that etcd is encrypted or not.
    pub fn etcd_encryption(mut self, value: bool) -> Self {
        self.etcd_encryption = Some(value);
        self
    }

    /// Date and time when the cluster will be automatically deleted.
    pub fn expiration_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.expiration_timestamp = Some(value);
        self
    }

    /// External identifier of the cluster, generated by the installer.
    pub fn external_id(mut self, value: impl Into<String>) -> Self {
        self.external_id = Some(value.into());
        self
    }

    /// External authentication configuration.
    pub fn external_auth_config(mut self, value: ExternalAuthConfigBuilder) -> Self {
        self.external_auth_config = Some(value);
        self
    }

    pub fn health_state(mut self, value: impl Into<ClusterHealthState>) -> Self {
        self.health_state = Some(value.into());
        self
    }

    /// Hypershift configuration.
    pub fn hypershift(mut self, value: HypershiftBuilder) -> Self {
        self.hypershift = Some(value);
        self
    }

    /// Link to the collection of identity providers of the cluster.
    pub fn identity_providers(mut self, value: ListBuilder<IdentityProviderBuilder>) -> Self {
        self.identity_providers = Some(value);
        self
    }

    /// Infra ID of the cluster.
    pub fn infra_id(mut self, value: impl Into<String>) -> Self {
        self.infra_id = Some(value.into());
        self
    }

    /// List of ingresses on this cluster.
    pub fn ingresses(mut self, value: ListBuilder<IngressBuilder>) -> Self {
        self.ingresses = Some(value);
        self
    }

    /// Load balancer quota to be assigned to the cluster.
    pub fn load_balancer_quota(mut self, value: i32) -> Self {
        self.load_balancer_quota = Some(value);
        self
    }

    /// List of machine pools on this cluster.
    pub fn machine_pools(mut self, value: ListBuilder<MachinePoolBuilder>) -> Self {
        self.machine_pools = Some(value);
        self
    }

    /// Flag indicating if the cluster is managed (by Red Hat) or self-managed by
    /// the user.
    pub fn managed(mut self, value: bool) -> Self {
        self.managed = Some(value);
        self
    }

    /// Flag indicating if the cluster should be created with nodes in different
    /// availability zones.
    pub fn multi_az(mut self, value: bool) -> Self {
        self.multi_az = Some(value);
        self
    }

    /// Name of the cluster. Only used on creation; afterwards use `display_name` of
    /// the subscription.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Network settings of the cluster.
    pub fn network(mut self, value: NetworkBuilder) -> Self {
        self.network = Some(value);
        self
    }

    /// Node drain grace period.
    pub fn node_drain_grace_period(mut self, value: ValueBuilder) -> Self {
        self.node_drain_grace_period = Some(value);
        self
    }

    /// List of node pools on this cluster.
    pub fn node_pools(mut self, value: ListBuilder<NodePoolBuilder>) -> Self {
        self.node_pools = Some(value);
        self
    }

    /// Information about the nodes of the cluster.
    pub fn nodes(mut self, value: ClusterNodesBuilder) -> Self {
        self.nodes = Some(value);
        self
    }

    /// Version of _OpenShift_ installed in the cluster, for example `4.15.3`.
    pub fn openshift_version(mut self, value: impl Into<String>) -> Self {
        self.openshift_version = Some(value.into());
        self
    }

    /// Link to the product type of this cluster.
    pub fn product(mut self, value: ProductBuilder) -> Self {
        self.product = Some(value);
        self
    }

    /// User defined properties for tagging and querying.
    pub fn properties<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Proxy.
    pub fn proxy(mut self, value: ProxyBuilder) -> Self {
        self.proxy = Some(value);
        self
    }

    /// Link to the cloud provider region where the cluster is installed.
    pub fn region(mut self, value: CloudRegionBuilder) -> Self {
        self.region = Some(value);
        self
    }

    /// Overall state of the cluster.
    pub fn state(mut self, value: impl Into<ClusterState>) -> Self {
        self.state = Some(value.into());
        self
    }

    /// Status of the cluster.
    pub fn status(mut self, value: ClusterStatusBuilder) -> Self {
        self.status = Some(value);
        self
    }

    /// Storage quota to be assigned to the cluster.
    pub fn storage_quota(mut self, value: ValueBuilder) -> Self {
        self.storage_quota = Some(value);
        self
    }

    /// Link to the subscription that comes from the account management service.
    pub fn subscription(mut self, value: SubscriptionBuilder) -> Self {
        self.subscription = Some(value);
        self
    }

    /// Link to the version of _OpenShift_ that will be used to install the cluster.
    pub fn version(mut self, value: VersionBuilder) -> Self {
        self.version = Some(value);
        self
    }
}

impl ObjectBuilder for ClusterBuilder {
    type Object = Cluster;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.api.is_none()
            && self.aws.is_none()
            && self.ccs.is_none()
            && self.dns.is_none()
            && self.fips.is_none()
            && self.additional_trust_bundle.is_none()
            && self.billing_model.is_none()
            && self.cloud_provider.is_none()
            && self.console.is_none()
            && self.creation_timestamp.is_none()
            && self.delete_protection.is_none()
            && self.disable_user_workload_monitoring.is_none()
            && self.domain_prefix.is_none()
            && self.etcd_encryption.is_none()
            && self.expiration_timestamp.is_none()
            && self.external_id.is_none()
            && self.external_auth_config.is_none()
            && self.health_state.is_none()
            && self.hypershift.is_none()
            && self.identity_providers.is_none()
            && self.infra_id.is_none()
            && self.ingresses.is_none()
            && self.load_balancer_quota.is_none()
            && self.machine_pools.is_none()
            && self.managed.is_none()
            && self.multi_az.is_none()
            && self.name.is_none()
            && self.network.is_none()
            && self.node_drain_grace_period.is_none()
            && self.node_pools.is_none()
            && self.nodes.is_none()
            && self.openshift_version.is_none()
            && self.product.is_none()
            && self.properties.is_none()
            && self.proxy.is_none()
            && self.region.is_none()
            && self.state.is_none()
            && self.status.is_none()
            && self.storage_quota.is_none()
            && self.subscription.is_none()
            && self.version.is_none()
    }

    fn copy(self, object: &Cluster) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            api: copy_nested(&object.api),
            aws: copy_nested(&object.aws),
            ccs: copy_nested(&object.ccs),
            dns: copy_nested(&object.dns),
            fips: object.fips,
            additional_trust_bundle: object.additional_trust_bundle.clone(),
            billing_model: object.billing_model.clone(),
            cloud_provider: copy_nested(&object.cloud_provider),
            console: copy_nested(&object.console),
            creation_timestamp: object.creation_timestamp,
            delete_protection: copy_nested(&object.delete_protection),
            disable_user_workload_monitoring: object.disable_user_workload_monitoring,
            domain_prefix: object.domain_prefix.clone(),
            etcd_encryption: object.etcd_encryption,
            expiration_timestamp: object.expiration_timestamp,
            external_id: object.external_id.clone(),
            external_auth_config: copy_nested(&object.external_auth_config),
            health_state: object.health_state.clone(),
            hypershift: copy_nested(&object.hypershift),
            identity_providers: copy_nested(&object.identity_providers),
            infra_id: object.infra_id.clone(),
            ingresses: copy_nested(&object.ingresses),
            load_balancer_quota: object.load_balancer_quota,
            machine_pools: copy_nested(&object.machine_pools),
            managed: object.managed,
            multi_az: object.multi_az,
            name: object.name.clone(),
            network: copy_nested(&object.network),
            node_drain_grace_period: copy_nested(&object.node_drain_grace_period),
            node_pools: copy_nested(&object.node_pools),
            nodes: copy_nested(&object.nodes),
            openshift_version: object.openshift_version.clone(),
            product: copy_nested(&object.product),
            properties: object.properties.clone(),
            proxy: copy_nested(&object.proxy),
            region: copy_nested(&object.region),
            state: object.state.clone(),
            status: copy_nested(&object.status),
            storage_quota: copy_nested(&object.storage_quota),
            subscription: copy_nested(&object.subscription),
            version: copy_nested(&object.version),
        }
    }

    fn build(&self) -> Result<Cluster, BuildError> {
        Ok(Cluster {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            api: build_nested(&self.api)?,
            aws: build_nested(&self.aws)?,
            ccs: build_nested(&self.ccs)?,
            dns: build_nested(&self.dns)?,
            fips: self.fips,
            additional_trust_bundle: self.additional_trust_bundle.clone(),
            billing_model: self.billing_model.clone(),
            cloud_provider: build_nested(&self.cloud_provider)?,
            console: build_nested(&self.console)?,
            creation_timestamp: self.creation_timestamp,
            delete_protection: build_nested(&self.delete_protection)?,
            disable_user_workload_monitoring: self.disable_user_workload_monitoring,
            domain_prefix: self.domain_prefix.clone(),
            etcd_encryption: self.etcd_encryption,
            expiration_timestamp: self.expiration_timestamp,
            external_id: self.external_id.clone(),
            external_auth_config: build_nested(&self.external_auth_config)?,
            health_state: self.health_state.clone(),
            hypershift: build_nested(&self.hypershift)?,
            identity_providers: build_nested(&self.identity_providers)?,
            infra_id: self.infra_id.clone(),
            ingresses: build_nested(&self.ingresses)?,
            load_balancer_quota: self.load_balancer_quota,
            machine_pools: build_nested(&self.machine_pools)?,
            managed: self.managed,
            multi_az: self.multi_az,
            name: self.name.clone(),
            network: build_nested(&self.network)?,
            node_drain_grace_period: build_nested(&self.node_drain_grace_period)?,
            node_pools: build_nested(&self.node_pools)?,
            nodes: build_nested(&self.nodes)?,
            openshift_version: self.openshift_version.clone(),
            product: build_nested(&self.product)?,
            properties: self.properties.clone(),
            proxy: build_nested(&self.proxy)?,
            region: build_nested(&self.region)?,
            state: self.state.clone(),
            status: build_nested(&self.status)?,
            storage_quota: build_nested(&self.storage_quota)?,
            subscription: build_nested(&self.subscription)?,
            version: build_nested(&self.version)?,
        })
    }
}

/// A list of [`Cluster`] objects.
pub type ClusterList = List<Cluster>;

/// Builder for [`ClusterList`].
pub type ClusterListBuilder = ListBuilder<ClusterBuilder>;
