//! Clusters management service (`/api/clusters_mgmt`).

pub mod v1;
