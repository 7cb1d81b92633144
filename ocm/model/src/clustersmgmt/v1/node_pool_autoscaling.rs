use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePoolAutoscaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_replica: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_replica: Option<i32>,
}

impl NodePoolAutoscaling {
    /// Returns a builder for this type.
    pub fn builder() -> NodePoolAutoscalingBuilder {
        NodePoolAutoscalingBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.max_replica.is_none() && self.min_replica.is_none()
    }

    pub fn max_replica(&self) -> i32 {
        self.max_replica.unwrap_or_default()
    }

    pub fn get_max_replica(&self) -> Option<i32> {
        self.max_replica
    }

    pub fn min_replica(&self) -> i32 {
        self.min_replica.unwrap_or_default()
    }

    pub fn get_min_replica(&self) -> Option<i32> {
        self.min_replica
    }
}

/// Builder for [`NodePoolAutoscaling`].
#[derive(Debug, Clone, Default)]
pub struct NodePoolAutoscalingBuilder {
    max_replica: Option<i32>,
    min_replica: Option<i32>,
}

impl NodePoolAutoscalingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_replica(mut self, value: i32) -> Self {
        self.max_replica = Some(value);
        self
    }

    pub fn min_replica(mut self, value: i32) -> Self {
        self.min_replica = Some(value);
        self
    }
}

impl ObjectBuilder for NodePoolAutoscalingBuilder {
    type Object = NodePoolAutoscaling;

    fn is_empty(&self) -> bool {
        self.max_replica.is_none() && self.min_replica.is_none()
    }

    fn copy(self, object: &NodePoolAutoscaling) -> Self {
        Self {
            max_replica: object.max_replica,
            min_replica: object.min_replica,
        }
    }

    fn build(&self) -> Result<NodePoolAutoscaling, BuildError> {
        Ok(NodePoolAutoscaling {
            max_replica: self.max_replica,
            min_replica: self.min_replica,
        })
    }
}
