use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Representation of a Taint set on a MachinePool in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taint {
    #[serde(skip_serializing_if = "Option::is_none")]
    effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Taint {
    /// Returns a builder for this type.
    pub fn builder() -> TaintBuilder {
        TaintBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.effect.is_none() && self.key.is_none() && self.value.is_none()
    }

    /// The effect on the node for the pods matching the taint, i.e: NoSchedule,
    /// NoExecute, PreferNoSchedule.
    pub fn effect(&self) -> &str {
        self.effect.as_deref().unwrap_or_default()
    }

    pub fn get_effect(&self) -> Option<&str> {
        self.effect.as_deref()
    }

    /// The key for the taint.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    pub fn get_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The value for the taint.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    pub fn get_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Builder for [`Taint`].
#[derive(Debug, Clone, Default)]
pub struct TaintBuilder {
    effect: Option<String>,
    key: Option<String>,
    value: Option<String>,
}

impl TaintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The effect on the node for the pods matching the taint, i.e: NoSchedule,
    /// NoExecute, PreferNoSchedule.
    pub fn effect(mut self, value: impl Into<String>) -> Self {
        self.effect = Some(value.into());
        self
    }

    /// The key for the taint.
    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.key = Some(value.into());
        self
    }

    /// The value for the taint.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl ObjectBuilder for TaintBuilder {
    type Object = Taint;

    fn is_empty(&self) -> bool {
        self.effect.is_none() && self.key.is_none() && self.value.is_none()
    }

    fn copy(self, object: &Taint) -> Self {
        Self {
            effect: object.effect.clone(),
            key: object.key.clone(),
            value: object.value.clone(),
        }
    }

    fn build(&self) -> Result<Taint, BuildError> {
        Ok(Taint {
            effect: self.effect.clone(),
            key: self.key.clone(),
            value: self.value.clone(),
        })
    }
}
