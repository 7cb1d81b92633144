use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Representation of a autoscaling in a machine pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachinePoolAutoscaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_replicas: Option<i32>,
}

impl MachinePoolAutoscaling {
    /// Returns a builder for this type.
    pub fn builder() -> MachinePoolAutoscalingBuilder {
        MachinePoolAutoscalingBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.max_replicas.is_none() && self.min_replicas.is_none()
    }

    /// The maximum number of replicas for the machine pool.
    pub fn max_replicas(&self) -> i32 {
        self.max_replicas.unwrap_or_default()
    }

    pub fn get_max_replicas(&self) -> Option<i32> {
        self.max_replicas
    }

    /// The minimum number of replicas for the machine pool.
    pub fn min_replicas(&self) -> i32 {
        self.min_replicas.unwrap_or_default()
    }

    pub fn get_min_replicas(&self) -> Option<i32> {
        self.min_replicas
    }
}

/// Builder for [`MachinePoolAutoscaling`].
#[derive(Debug, Clone, Default)]
pub struct MachinePoolAutoscalingBuilder {
    max_replicas: Option<i32>,
    min_replicas: Option<i32>,
}

impl MachinePoolAutoscalingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum number of replicas for the machine pool.
    pub fn max_replicas(mut self, value: i32) -> Self {
        self.max_replicas = Some(value);
        self
    }

    /// The minimum number of replicas for the machine pool.
    pub fn min_replicas(mut self, value: i32) -> Self {
        self.min_replicas = Some(value);
        self
    }
}

impl ObjectBuilder for MachinePoolAutoscalingBuilder {
    type Object = MachinePoolAutoscaling;

    fn is_empty(&self) -> bool {
        self.max_replicas.is_none() && self.min_replicas.is_none()
    }

    fn copy(self, object: &MachinePoolAutoscaling) -> Self {
        Self {
            max_replicas: object.max_replicas,
            min_replicas: object.min_replicas,
        }
    }

    fn build(&self) -> Result<MachinePoolAutoscaling, BuildError> {
        Ok(MachinePoolAutoscaling {
            max_replicas: self.max_replicas,
            min_replicas: self.min_replicas,
        })
    }
}
