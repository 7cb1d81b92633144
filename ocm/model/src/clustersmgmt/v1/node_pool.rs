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

use super::aws_node_pool::{AwsNodePool, AwsNodePoolBuilder};
use super::node_pool_autoscaling::{NodePoolAutoscaling, NodePoolAutoscalingBuilder};
use super::node_pool_status::{NodePoolStatus, NodePoolStatusBuilder};
use super::taint::{Taint, TaintBuilder};
use super::version::{Version, VersionBuilder};

/// Representation of a node pool in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePool {
    kind: KindTag<NodePool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_repair: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autoscaling: Option<NodePoolAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aws_node_pool: Option<AwsNodePool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<NodePoolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    taints: Option<Vec<Taint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<Version>,
}

impl Resource for NodePool {
    const KIND: &'static str = "NodePool";
    const LINK_KIND: &'static str = "NodePoolLink";
    const NIL_KIND: &'static str = "NodePoolNil";
    const LIST_KIND: &'static str = "NodePoolList";
    const LIST_LINK_KIND: &'static str = "NodePoolListLink";
    const LIST_NIL_KIND: &'static str = "NodePoolListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl NodePool {
    /// Returns a builder for this type.
    pub fn builder() -> NodePoolBuilder {
        NodePoolBuilder::new()
    }

    /// Returns `NodePoolLink` for links and `NodePool` otherwise.
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
            && self.auto_repair.is_none()
            && self.autoscaling.is_none()
            && self.availability_zone.is_none()
            && self.aws_node_pool.is_none()
            && self.labels.is_none()
            && self.replicas.is_none()
            && self.status.is_none()
            && self.subnet.is_none()
            && self.taints.is_none()
            && self.version.is_none()
    }

    /// Specifies whether health checks should be enabled for machines in the
    /// NodePool.
    pub fn auto_repair(&self) -> bool {
        self.auto_repair.unwrap_or_default()
    }

    pub fn get_auto_repair(&self) -> Option<bool> {
        self.auto_repair
    }

    /// Details for auto-scaling the machine pool. Replicas and autoscaling cannot
    /// be used together.
    pub fn autoscaling(&self) -> Option<&NodePoolAutoscaling> {
        self.autoscaling.as_ref()
    }

    pub fn get_autoscaling(&self) -> Option<&NodePoolAutoscaling> {
        self.autoscaling.as_ref()
    }

    /// The availability zone upon which the node is created.
    pub fn availability_zone(&self) -> &str {
        self.availability_zone.as_deref().unwrap_or_default()
    }

    pub fn get_availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// AWS specific parameters (Optional).
    pub fn aws_node_pool(&self) -> Option<&AwsNodePool> {
        self.aws_node_pool.as_ref()
    }

    pub fn get_aws_node_pool(&self) -> Option<&AwsNodePool> {
        self.aws_node_pool.as_ref()
    }

    /// The labels set on the Nodes created.
    pub fn labels(&self) -> &BTreeMap<String, String> {
        self.labels.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_labels(&self) -> Option<&BTreeMap<String, String>> {
        self.labels.as_ref()
    }

    /// The number of Machines (and Nodes) to create.
    pub fn replicas(&self) -> i32 {
        self.replicas.unwrap_or_default()
    }

    pub fn get_replicas(&self) -> Option<i32> {
        self.replicas
    }

    /// NodePool status.
    pub fn status(&self) -> Option<&NodePoolStatus> {
        self.status.as_ref()
    }

    pub fn get_status(&self) -> Option<&NodePoolStatus> {
        self.status.as_ref()
    }

    /// The subnet upon which the nodes are created.
    pub fn subnet(&self) -> &str {
        self.subnet.as_deref().unwrap_or_default()
    }

    pub fn get_subnet(&self) -> Option<&str> {
        self.subnet.as_deref()
    }

    /// The taints set on the Nodes created.
    pub fn taints(&self) -> &[Taint] {
        self.taints.as_deref().unwrap_or_default()
    }

    pub fn get_taints(&self) -> Option<&[Taint]> {
        self.taints.as_deref()
    }

    /// Version of the node pool.
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn get_version(&self) -> Option<&Version> {
        self.version.as_ref()
    }
}

/// Builder for [`NodePool`].
#[derive(Debug, Clone, Default)]
pub struct NodePoolBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    auto_repair: Option<bool>,
    autoscaling: Option<NodePoolAutoscalingBuilder>,
    availability_zone: Option<String>,
    aws_node_pool: Option<AwsNodePoolBuilder>,
    labels: Option<BTreeMap<String, String>>,
    replicas: Option<i32>,
    status: Option<NodePoolStatusBuilder>,
    subnet: Option<String>,
    taints: Option<Vec<TaintBuilder>>,
    version: Option<VersionBuilder>,
}

impl NodePoolBuilder {
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

    /// Specifies whether health checks should be enabled for machines in the
    /// NodePool.
    pub fn auto_repair(mut self, value: bool) -> Self {
        self.auto_repair = Some(value);
        self
    }

    /// Details for auto-scaling the machine pool. Replicas and autoscaling cannot
    /// be used together.
    pub fn autoscaling(mut self, value: NodePoolAutoscalingBuilder) -> Self {
        self.autoscaling = Some(value);
        self
    }

    /// The availability zone upon which the node is created.
    pub fn availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    /// AWS specific parameters (Optional).
    pub fn aws_node_pool(mut self, value: AwsNodePoolBuilder) -> Self {
        self.aws_node_pool = Some(value);
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

    /// The number of Machines (and Nodes) to create.
    pub fn replicas(mut self, value: i32) -> Self {
        self.replicas = Some(value);
        self
    }

    /// NodePool status.
    pub fn status(mut self, value: NodePoolStatusBuilder) -> Self {
        self.status = Some(value);
        self
    }

    /// The subnet upon which the nodes are created.
    pub fn subnet(mut self, value: impl Into<String>) -> Self {
        self.subnet = Some(value.into());
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

    /// Version of the node pool.
    pub fn version(mut self, value: VersionBuilder) -> Self {
        self.version = Some(value);
        self
    }
}

impl ObjectBuilder for NodePoolBuilder {
    type Object = NodePool;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.auto_repair.is_none()
            && self.autoscaling.is_none()
            && self.availability_zone.is_none()
            && self.aws_node_pool.is_none()
            && self.labels.is_none()
            && self.replicas.is_none()
            && self.status.is_none()
            && self.subnet.is_none()
            && self.taints.is_none()
            && self.version.is_none()
    }

    fn copy(self, object: &NodePool) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            auto_repair: object.auto_repair,
            autoscaling: copy_nested(&object.autoscaling),
            availability_zone: object.availability_zone.clone(),
            aws_node_pool: copy_nested(&object.aws_node_pool),
            labels: object.labels.clone(),
            replicas: object.replicas,
            status: copy_nested(&object.status),
            subnet: object.subnet.clone(),
            taints: copy_all(&object.taints),
            version: copy_nested(&object.version),
        }
    }

    fn build(&self) -> Result<NodePool, BuildError> {
        Ok(NodePool {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            auto_repair: self.auto_repair,
            autoscaling: build_nested(&self.autoscaling)?,
            availability_zone: self.availability_zone.clone(),
            aws_node_pool: build_nested(&self.aws_node_pool)?,
            labels: self.labels.clone(),
            replicas: self.replicas,
            status: build_nested(&self.status)?,
            subnet: self.subnet.clone(),
            taints: build_all(&self.taints)?,
            version: build_nested(&self.version)?,
        })
    }
}

/// A list of [`NodePool`] objects.
pub type NodePoolList = List<NodePool>;

/// Builder for [`NodePoolList`].
pub type NodePoolListBuilder = ListBuilder<NodePoolBuilder>;
