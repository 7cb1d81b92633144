use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Numeric value and the unit used to measure it.
///
/// Units are not mandatory, and they're not specified for some resources. For
/// resources that use bytes, the accepted units are:
///
/// - 1 B = 1 byte
/// - 1 KB = 10^3 bytes
/// - 1 KiB = 2^10 bytes
/// - 1 GB = 10^9 bytes
/// - 1 GiB = 2^30 bytes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
}

impl Value {
    /// Returns a builder for this type.
    pub fn builder() -> ValueBuilder {
        ValueBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.unit.is_none() && self.value.is_none()
    }

    /// Name of the unit used to measure the value.
    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or_default()
    }

    pub fn get_unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Numeric value.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or_default()
    }

    pub fn get_value(&self) -> Option<f64> {
        self.value
    }
}

/// Builder for [`Value`].
#[derive(Debug, Clone, Default)]
pub struct ValueBuilder {
    unit: Option<String>,
    value: Option<f64>,
}

impl ValueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the unit used to measure the value.
    pub fn unit(mut self, value: impl Into<String>) -> Self {
        self.unit = Some(value.into());
        self
    }

    /// Numeric value.
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

impl ObjectBuilder for ValueBuilder {
    type Object = Value;

    fn is_empty(&self) -> bool {
        self.unit.is_none() && self.value.is_none()
    }

    fn copy(self, object: &Value) -> Self {
        Self {
            unit: object.unit.clone(),
            value: object.value,
        }
    }

    fn build(&self) -> Result<Value, BuildError> {
        Ok(Value {
            unit: self.unit.clone(),
            value: self.value,
        })
    }
}
