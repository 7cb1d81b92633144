use std::collections::BTreeMap;

use ocm_model_core::{builder::{build_nested, copy_nested}, empty_map, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::machine_pool_autoscaling::{MachinePoolAutoscaling, MachinePoolAutoscalingBuilder};
use super::machine_type::{MachineType, MachineTypeBuilder};

/// Counts of different classes of nodes inside a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterNodes {
    #[serde(skip_serializing_if = "Option::is_none")]
    autoscale_compute: Option<MachinePoolAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compute: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compute_labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compute_machine_type: Option<MachineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    infra: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master: Option<i32>,
}

impl ClusterNodes {
    /// Returns a builder for this type.
    pub fn builder() -> ClusterNodesBuilder {
        ClusterNodesBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.autoscale_compute.is_none()
            && self.availability_zones.is_none()
            && self.compute.is_none()
            && self.compute_labels.is_none()
            && self.compute_machine_type.is_none()
            && self.infra.is_none()
            && self.master.is_none()
    }

    /// Details for auto-scaling the compute machine pool. Compute and
    /// AutoscaleCompute cannot be used together.
    pub fn autoscale_compute(&self) -> Option<&MachinePoolAutoscaling> {
        self.autoscale_compute.as_ref()
    }

    pub fn get_autoscale_compute(&self) -> Option<&MachinePoolAutoscaling> {
        self.autoscale_compute.as_ref()
    }

    /// The availability zones upon which the nodes are created.
    pub fn availability_zones(&self) -> &[String] {
        self.availability_zones.as_deref().unwrap_or_default()
    }

    pub fn get_availability_zones(&self) -> Option<&[String]> {
        self.availability_zones.as_deref()
    }

    /// Number of compute nodes of the cluster. Compute and AutoscaleCompute cannot
    /// be used together.
    pub fn compute(&self) -> i32 {
        self.compute.unwrap_or_default()
    }

    pub fn get_compute(&self) -> Option<i32> {
        self.compute
    }

    /// The labels set on the "default" compute machine pool.
    pub fn compute_labels(&self) -> &BTreeMap<String, String> {
        self.compute_labels.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_compute_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.compute_labels.as_ref()
    }

    /// The compute machine type to use, for example `r5.xlarge`.
    pub fn compute_machine_type(&self) -> Option<&MachineType> {
        self.compute_machine_type.as_ref()
    }

    pub fn get_compute_machine_type(&self) -> Option<&MachineType> {
        self.compute_machine_type.as_ref()
    }

    /// Number of infrastructure nodes of the cluster.
    pub fn infra(&self) -> i32 {
        self.infra.unwrap_or_default()
    }

    pub fn get_infra(&self) -> Option<i32> {
        self.infra
    }

    /// Number of master nodes of the cluster.
    pub fn master(&self) -> i32 {
        self.master.unwrap_or_default()
    }

    pub fn get_master(&self) -> Option<i32> {
        self.master
    }
}

/// Builder for [`ClusterNodes`].
#[derive(Debug, Clone, Default)]
pub struct ClusterNodesBuilder {
    autoscale_compute: Option<MachinePoolAutoscalingBuilder>,
    availability_zones: Option<Vec<String>>,
    compute: Option<i32>,
    compute_labels: Option<BTreeMap<String, String>>,
    compute_machine_type: Option<MachineTypeBuilder>,
    infra: Option<i32>,
    master: Option<i32>,
}

impl ClusterNodesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Details for auto-scaling the compute machine pool. Compute and
    /// AutoscaleCompute cannot be used together.
    pub fn autoscale_compute(mut self, value: MachinePoolAutoscalingBuilder) -> Self {
        self.autoscale_compute = Some(value);
        self
    }

    /// The availability zones upon which the nodes are created.
    pub fn availability_zones<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Number of compute nodes of the cluster. Compute and AutoscaleCompute cannot
    /// be used together.
    pub fn compute(mut self, value: i32) -> Self {
        self.compute = Some(value);
        self
    }

    /// The labels set on the "default" compute machine pool.
    pub fn compute_labels<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.compute_labels = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// The compute machine type to use, for example `r5.xlarge`.
    pub fn compute_machine_type(mut self, value: MachineTypeBuilder) -> Self {
        self.compute_machine_type = Some(value);
        self
    }

    /// Number of infrastructure nodes of the cluster.
    pub fn infra(mut self, value: i32) -> Self {
        self.infra = Some(value);
        self
    }

    /// Number of master nodes of the cluster.
    pub fn master(mut self, value: i32) -> Self {
        self.master = Some(value);
        self
    }
}

impl ObjectBuilder for ClusterNodesBuilder {
    type Object = ClusterNodes;

    fn is_empty(&self) -> bool {
        self.autoscale_compute.is_none()
            && self.availability_zones.is_none()
            && self.compute.is_none()
            && self.compute_labels.is_none()
            && self.compute_machine_type.is_none()
            && self.infra.is_none()
            && self.master.is_none()
    }

    fn copy(self, object: &ClusterNodes) -> Self {
        Self {
            autoscale_compute: copy_nested(&object.autoscale_compute),
            availability_zones: object.availability_zones.clone(),
            compute: object.compute,
            compute_labels: object.compute_labels.clone(),
            compute_machine_type: copy_nested(&object.compute_machine_type),
            infra: object.infra,
            master: object.master,
        }
    }

    fn build(&self) -> Result<ClusterNodes, BuildError> {
        Ok(ClusterNodes {
            autoscale_compute: build_nested(&self.autoscale_compute)?,
            availability_zones: self.availability_zones.clone(),
            compute: self.compute,
            compute_labels: self.compute_labels.clone(),
            compute_machine_type: build_nested(&self.compute_machine_type)?,
            infra: self.infra,
            master: self.master,
        })
    }
}
