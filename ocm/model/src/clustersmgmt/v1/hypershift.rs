use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Hypershift configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hypershift {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl Hypershift {
    /// Returns a builder for this type.
    pub fn builder() -> HypershiftBuilder {
        HypershiftBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
    }

    /// Whether the cluster runs its control plane as hosted pods.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }
}

/// Builder for [`Hypershift`].
#[derive(Debug, Clone, Default)]
pub struct HypershiftBuilder {
    enabled: Option<bool>,
}

impl HypershiftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cluster runs its control plane as hosted pods.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }
}

impl ObjectBuilder for HypershiftBuilder {
    type Object = Hypershift;

    fn is_empty(&self) -> bool {
        self.enabled.is_none()
    }

    fn copy(self, object: &Hypershift) -> Self {
        Self {
            enabled: object.enabled,
        }
    }

    fn build(&self) -> Result<Hypershift, BuildError> {
        Ok(Hypershift {
            enabled: self.enabled,
        })
    }
}
