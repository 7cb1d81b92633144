//! Typed model of the OpenShift Cluster Manager (OCM) API.
//!
//! Each API service has a module per version:
//!
//! - [`clustersmgmt::v1`] - clusters and everything attached to them (cloud
//!   providers, regions, versions, machine and node pools, identity
//!   providers, ingresses, external authentication)
//! - [`accountsmgmt::v1`] - organizations, reserved resources and quota costs
//!
//! Every type comes with a builder. Top-level resources (those with `id`,
//! `href` and a `kind` on the wire) also implement
//! [`Resource`](ocm_model_core::Resource) and have `<Type>List` and
//! `<Type>ListBuilder` aliases.
//!
//! ## Examples
//!
//! Decode a cluster and inspect it:
//!
//! ```
//! use ocm_api_model::clustersmgmt::v1::{Cluster, ClusterState};
//! use ocm_api_model::prelude::*;
//!
//! let cluster: Cluster = unmarshal(
//!     r#"{
//!         "kind": "Cluster",
//!         "id": "1pqa",
//!         "state": "ready",
//!         "region": {"kind": "CloudRegionLink", "id": "us-east-1"},
//!         "machine_pools": {"kind": "MachinePoolList", "items": [{"id": "worker"}]}
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(cluster.kind(), "Cluster");
//! assert_eq!(cluster.state(), ClusterState::READY);
//! assert!(cluster.region().is_some_and(|region| region.link()));
//! assert_eq!(cluster.machine_pools().len(), 1);
//! assert_eq!(cluster.infra_id(), "");
//! assert_eq!(cluster.get_infra_id(), None);
//! ```

pub mod accountsmgmt;
pub mod clustersmgmt;
pub mod prelude;

pub use ocm_model_core::{BuildError, CodecError, Error};
