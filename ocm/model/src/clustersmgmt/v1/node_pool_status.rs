use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Representation of the status of a node pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePoolStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    current_replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl NodePoolStatus {
    /// Returns a builder for this type.
    pub fn builder() -> NodePoolStatusBuilder {
        NodePoolStatusBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.current_replicas.is_none() && self.message.is_none()
    }

    /// The current number of replicas for the node pool.
    pub fn current_replicas(&self) -> i32 {
        self.current_replicas.unwrap_or_default()
    }

    pub fn get_current_replicas(&self) -> Option<i32> {
        self.current_replicas
    }

    /// Adds additional information about the NodePool status when the node pool
    /// doesn't reach the desired replicas.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn get_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Builder for [`NodePoolStatus`].
#[derive(Debug, Clone, Default)]
pub struct NodePoolStatusBuilder {
    current_replicas: Option<i32>,
    message: Option<String>,
}

impl NodePoolStatusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current number of replicas for the node pool.
    pub fn current_replicas(mut self, value: i32) -> Self {
        self.current_replicas = Some(value);
        self
    }

    /// Adds additional information about the NodePool status when the node pool
    /// doesn't reach the desired replicas.
    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.message = Some(value.into());
        self
    }
}

impl ObjectBuilder for NodePoolStatusBuilder {
    type Object = NodePoolStatus;

    fn is_empty(&self) -> bool {
        self.current_replicas.is_none() && self.message.is_none()
    }

    fn copy(self, object: &NodePoolStatus) -> Self {
        Self {
            current_replicas: object.current_replicas,
            message: object.message.clone(),
        }
    }

    fn build(&self) -> Result<NodePoolStatus, BuildError> {
        Ok(NodePoolStatus {
            current_replicas: self.current_replicas,
            message: self.message.clone(),
        })
    }
}
