use std::collections::BTreeMap;

use ocm_model_core::{
    builder::{build_all, build_nested, copy_all, copy_nested},
    empty_map,
    BuildError,
    KindTag,
    List,
    ListBuilder,
    ObjectBuilder,
    Resource,
};
use serde::{Deserialize, Serialize};

use super::aws_machine_pool::{AwsMachinePool, AwsMachinePoolBuilder};
use super::machine_pool_autoscaling::{MachinePoolAutoscaling, MachinePoolAutoscalingBuilder};
use super::taint::{Taint, TaintBuilder};

/// Representation of a machine pool in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachinePool {
    kind: KindTag<MachinePool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autoscaling: Option<MachinePoolAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aws: Option<AwsMachinePool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    taints: Option<Vec<Taint>>,
}

impl Resource for MachinePool {
    const KIND: &'static str = "MachinePool";
    const LINK_KIND: &'static str = "MachinePoolLink";
    const NIL_KIND: &'static str = "MachinePoolNil";
    const LIST_KIND: &'static str = "MachinePoolList";
    const LIST_LINK_KIND: &'static str = "MachinePoolListLink";
    const LIST_NIL_KIND: &'static str = "MachinePoolListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl MachinePool {
    /// Returns a builder for this type.
    pub fn builder() -> MachinePoolBuilder {
        MachinePoolBuilder::new()
    }

    /// Returns `MachinePoolLink` for links and `MachinePool` otherwise.
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
            && self.autoscaling.is_none()
            && self.availability_zones.is_none()
            && self.aws.is_none()
            && self.instance_type.is_none()
            && self.labels.is_none()
            && self.replicas.is_none()
            && self.subnets.is_none()
            && self.taints.is_none()
    }

    /// Details for auto-scaling the machine pool. Replicas and autoscaling cannot
    /// be used together.
    pub fn autoscaling(&self) -> Option<&MachinePoolAutoscaling> {
        self.autoscaling.as_ref()
    }

    pub fn get_autoscaling(&self) -> Option<&MachinePoolAutoscaling> {
        self.autoscaling.as_ref()
    }

    /// The availability zones upon which the nodes are created.
    pub fn availability_zones(&self) -> &[String] {
        self.availability_zones.as_deref().unwrap_or_default()
    }

    pub fn get_availability_zones(&self) -> Option<&[String]> {
        self.availability_zones.as_deref()
    }

    /// AWS specific parameters (Optional).
    pub fn aws(&self) -> Option<&AwsMachinePool> {
        self.aws.as_ref()
    }

    pub fn get_aws(&self) -> Option<&AwsMachinePool> {
        self.aws.as_ref()
    }

    /// The instance type of Nodes to create.
    pub fn instance_type(&self) -> &str {
        self.instance_type.as_deref().unwrap_or_default()
    }

    pub fn get_instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    /// The labels set on the Nodes created.
    pub fn labels(&self) -> &BTreeMap<String, String> {
        self.labels.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.labels.as_ref()
    }

    /// The number of Machines (and Nodes) to create. Replicas and autoscaling
    /// cannot be used together.
    pub fn replicas(&self) -> i32 {
        self.replicas.unwrap_or_default()
    }

    pub fn get_replicas(&self) -> Option<i32> {
        self.replicas
    }

    /// The subnets upon which the nodes are created.
    pub fn subnets(&self) -> &[String] {
        self.subnets.as_deref().unwrap_or_default()
    }

    pub fn get_subnets(&self) -> Option<&[String]> {
        self.subnets.as_deref()
    }

    /// The taints set on the Nodes created.
    pub fn taints(&self) -> &[Taint] {
        self.taints.as_deref().unwrap_or_default()
    }

    pub fn get_taints(&self) -> Option<&[Taint]> {
        self.taints.as_deref()
    }
}

/// Builder for [`MachinePool`].
#[derive(Debug, Clone, Default)]
pub struct MachinePoolBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    autoscaling: Option<MachinePoolAutoscalingBuilder>,
    availability_zones: Option<Vec<String>>,
    aws: Option<AwsMachinePoolBuilder>,
    instance_type: Option<String>,
    labels: Option<BTreeMap<String, String>>,
    replicas: Option<i32>,
    subnets: Option<Vec<String>>,
    taints: Option<Vec<TaintBuilder>>,
}

impl MachinePoolBuilder {
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

    /// Details for auto-scaling the machine pool. Replicas and autoscaling cannot
    /// be used together.
    pub fn autoscaling(mut self, value: MachinePoolAutoscalingBuilder) -> Self {
        self.autoscaling = Some(value);
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

    /// AWS specific parameters (Optional).
    pub fn aws(mut self, value: AwsMachinePoolBuilder) -> Self {
        self.aws = Some(value);
        self
    }

    /// The instance type of Nodes to create.
    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.instance_type = Some(value.into());
        self
    }

    /// The labels set on the Nodes created.
    pub fn labels<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// The number of Machines (and Nodes) to create. Replicas and autoscaling
    /// cannot be used together.
    pub fn replicas(mut self, value: i32) -> Self {
        self.replicas = Some(value);
        self
    }

    /// The subnets upon which the nodes are created.
    pub fn subnets<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// The taints set on the Nodes created.
    pub fn taints<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = TaintBuilder>,
    {
        self.taints = Some(values.into_iter().collect());
        self
    }
}

impl ObjectBuilder for MachinePoolBuilder {
    type Object = MachinePool;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.autoscaling.is_none()
            && self.availability_zones.is_none()
            && self.aws.is_none()
            && self.instance_type.is_none()
            && self.labels.is_none()
            && self.replicas.is_none()
            && self.subnets.is_none()
            && self.taints.is_none()
    }

    fn copy(self, object: &MachinePool) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            autoscaling: copy_nested(&object.autoscaling),
            availability_zones: object.availability_zones.clone(),
            aws: copy_nested(&object.aws),
            instance_type: object.instance_type.clone(),
            labels: object.labels.clone(),
            replicas: object.replicas,
            subnets: object.subnets.clone(),
            taints: copy_all(&object.taints),
        }
    }

    fn build(&self) -> Result<MachinePool, BuildError> {
        Ok(MachinePool {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            autoscaling: build_nested(&self.autoscaling)?,
            availability_zones: self.availability_zones.clone(),
            aws: build_nested(&self.aws)?,
            instance_type: self.instance_type.clone(),
            labels: self.labels.clone(),
            replicas: self.replicas,
            subnets: self.subnets.clone(),
            taints: build_all(&self.taints)?,
        })
    }
}

/// A list of [`MachinePool`] objects.
pub type MachinePoolList = List<MachinePool>;

/// Builder for [`MachinePoolList`].
pub type MachinePoolListBuilder = ListBuilder<MachinePoolBuilder>;
