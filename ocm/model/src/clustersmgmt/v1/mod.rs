//! Version 1 of the clusters management API model.
//!
//! Objects are immutable; create them with their builder and change them by
//! copying them back into one:
//!
//! ```
//! use ocm_api_model::clustersmgmt::v1::{Cluster, ClusterState, CloudRegion};
//! use ocm_api_model::prelude::*;
//!
//! let cluster = Cluster::builder()
//!     .id("123")
//!     .name("prod")
//!     .state(ClusterState::READY)
//!     .region(CloudRegion::builder().id("us-east-1"))
//!     .build()
//!     .unwrap();
//!
//! let renamed = Cluster::builder().copy(&cluster).name("prod-eu").build().unwrap();
//! assert_eq!(renamed.name(), "prod-eu");
//! assert_eq!(cluster.name(), "prod");
//! ```

mod aws;
mod aws_machine_pool;
mod aws_node_pool;
mod aws_spot_market_options;
mod ccs;
mod cidr_block_access;
mod cidr_block_allow_access;
mod client_component;
mod cloud_provider;
mod cloud_region;
mod cloud_vpc;
mod cluster;
mod cluster_api;
mod cluster_console;
mod cluster_nodes;
mod cluster_status;
mod delete_protection;
mod dns;
mod enums;
mod external_auth;
mod external_auth_claim;
mod external_auth_client_config;
mod external_auth_config;
mod groups_claim;
mod htpasswd_identity_provider;
mod htpasswd_user;
mod hypershift;
mod identity_provider;
mod ingress;
mod instance_iam_roles;
mod machine_pool;
mod machine_pool_autoscaling;
mod machine_type;
mod network;
mod node_pool;
mod node_pool_autoscaling;
mod node_pool_status;
mod open_id_claims;
mod open_id_identity_provider;
mod operator_iam_role;
mod product;
mod proxy;
mod sts;
mod subnetwork;
mod subscription;
mod taint;
mod token_claim_mappings;
mod token_claim_validation_rule;
mod token_issuer;
mod username_claim;
mod value;
mod version;

pub use enums::{
    BillingModel, ClusterConfigurationMode, ClusterHealthState, ClusterState,
    ExternalAuthClientType, IdentityProviderMappingMethod, IdentityProviderType, ListeningMethod,
    LoadBalancerFlavor, MachineTypeCategory, MachineTypeSize,
};
pub use aws::{Aws, AwsBuilder};
pub use aws_machine_pool::{AwsMachinePool, AwsMachinePoolBuilder};
pub use aws_node_pool::{AwsNodePool, AwsNodePoolBuilder};
pub use aws_spot_market_options::{AwsSpotMarketOptions, AwsSpotMarketOptionsBuilder};
pub use ccs::{Ccs, CcsBuilder};
pub use cidr_block_access::{CidrBlockAccess, CidrBlockAccessBuilder};
pub use cidr_block_allow_access::{CidrBlockAllowAccess, CidrBlockAllowAccessBuilder};
pub use client_component::{ClientComponent, ClientComponentBuilder};
pub use cloud_provider::{
    CloudProvider, CloudProviderBuilder, CloudProviderList, CloudProviderListBuilder,
};
pub use cloud_region::{CloudRegion, CloudRegionBuilder, CloudRegionList, CloudRegionListBuilder};
pub use cloud_vpc::{CloudVpc, CloudVpcBuilder};
pub use cluster::{Cluster, ClusterBuilder, ClusterList, ClusterListBuilder};
pub use cluster_api::{ClusterApi, ClusterApiBuilder};
pub use cluster_console::{ClusterConsole, ClusterConsoleBuilder};
pub use cluster_nodes::{ClusterNodes, ClusterNodesBuilder};
pub use cluster_status::{ClusterStatus, ClusterStatusBuilder};
pub use delete_protection::{DeleteProtection, DeleteProtectionBuilder};
pub use dns::{Dns, DnsBuilder};
pub use external_auth::{
    ExternalAuth, ExternalAuthBuilder, ExternalAuthList, ExternalAuthListBuilder,
};
pub use external_auth_claim::{ExternalAuthClaim, ExternalAuthClaimBuilder};
pub use external_auth_client_config::{ExternalAuthClientConfig, ExternalAuthClientConfigBuilder};
pub use external_auth_config::{ExternalAuthConfig, ExternalAuthConfigBuilder};
pub use groups_claim::{GroupsClaim, GroupsClaimBuilder};
pub use htpasswd_identity_provider::{HtpasswdIdentityProvider, HtpasswdIdentityProviderBuilder};
pub use htpasswd_user::{
    HtpasswdUser, HtpasswdUserBuilder, HtpasswdUserList, HtpasswdUserListBuilder,
};
pub use hypershift::{Hypershift, HypershiftBuilder};
pub use identity_provider::{
    IdentityProvider, IdentityProviderBuilder, IdentityProviderList, IdentityProviderListBuilder,
};
pub use ingress::{Ingress, IngressBuilder, IngressList, IngressListBuilder};
pub use instance_iam_roles::{InstanceIamRoles, InstanceIamRolesBuilder};
pub use machine_pool::{MachinePool, MachinePoolBuilder, MachinePoolList, MachinePoolListBuilder};
pub use machine_pool_autoscaling::{MachinePoolAutoscaling, MachinePoolAutoscalingBuilder};
pub use machine_type::{MachineType, MachineTypeBuilder, MachineTypeList, MachineTypeListBuilder};
pub use network::{Network, NetworkBuilder};
pub use node_pool::{NodePool, NodePoolBuilder, NodePoolList, NodePoolListBuilder};
pub use node_pool_autoscaling::{NodePoolAutoscaling, NodePoolAutoscalingBuilder};
pub use node_pool_status::{NodePoolStatus, NodePoolStatusBuilder};
pub use open_id_claims::{OpenIdClaims, OpenIdClaimsBuilder};
pub use open_id_identity_provider::{OpenIdIdentityProvider, OpenIdIdentityProviderBuilder};
pub use operator_iam_role::{OperatorIamRole, OperatorIamRoleBuilder};
pub use product::{Product, ProductBuilder, ProductList, ProductListBuilder};
pub use proxy::{Proxy, ProxyBuilder};
pub use sts::{Sts, StsBuilder};
pub use subnetwork::{Subnetwork, SubnetworkBuilder};
pub use subscription::{
    Subscription, SubscriptionBuilder, SubscriptionList, SubscriptionListBuilder,
};
pub use taint::{Taint, TaintBuilder};
pub use token_claim_mappings::{TokenClaimMappings, TokenClaimMappingsBuilder};
pub use token_claim_validation_rule::{TokenClaimValidationRule, TokenClaimValidationRuleBuilder};
pub use token_issuer::{TokenIssuer, TokenIssuerBuilder};
pub use username_claim::{UsernameClaim, UsernameClaimBuilder};
pub use value::{Value, ValueBuilder};
pub use version::{Version, VersionBuilder, VersionList, VersionListBuilder};
