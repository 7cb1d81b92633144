use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteProtection {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl DeleteProtection {
    /// Returns a builder for this type.
    pub fn builder() -> DeleteProtectionBuilder {
        DeleteProtectionBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }
}

/// Builder for [`DeleteProtection`].
#[derive(Debug, Clone, Default)]
pub struct DeleteProtectionBuilder {
    enabled: Option<bool>,
}

impl DeleteProtectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }
}

impl ObjectBuilder for DeleteProtectionBuilder {
    type Object = DeleteProtection;

    fn is_empty(&self) -> bool {
        self.enabled.is_none()
    }

    fn copy(self, object: &DeleteProtection) -> Self {
        Self {
            enabled: object.enabled,
        }
    }

    fn build(&self) -> Result<DeleteProtection, BuildError> {
        Ok(DeleteProtection {
            enabled: self.enabled,
        })
    }
}
