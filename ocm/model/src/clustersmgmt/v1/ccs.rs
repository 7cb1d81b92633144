use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ccs {
    #[serde(skip_serializing_if = "Option::is_none")]
    disable_scp_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl Ccs {
    /// Returns a builder for this type.
    pub fn builder() -> CcsBuilder {
        CcsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.disable_scp_checks.is_none() && self.enabled.is_none()
    }

    /// Indicates if cloud permissions checks are disabled when attempting
    /// installation of the cluster.
    pub fn disable_scp_checks(&self) -> bool {
        self.disable_scp_checks.unwrap_or_default()
    }

    pub fn get_disable_scp_checks(&self) -> Option<bool> {
        self.disable_scp_checks
    }

    /// Indicates if Customer Cloud Subscription is enabled on the cluster.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }
}

/// Builder for [`Ccs`].
#[derive(Debug, Clone, Default)]
pub struct CcsBuilder {
    disable_scp_checks: Option<bool>,
    enabled: Option<bool>,
}

impl CcsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicates if cloud permissions checks are disabled when attempting
    /// installation of the cluster.
    pub fn disable_scp_checks(mut self, value: bool) -> Self {
        self.disable_scp_checks = Some(value);
        self
    }

    /// Indicates if Customer Cloud Subscription is enabled on the cluster.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }
}

impl ObjectBuilder for CcsBuilder {
    type Object = Ccs;

    fn is_empty(&self) -> bool {
        self.disable_scp_checks.is_none() && self.enabled.is_none()
    }

    fn copy(self, object: &Ccs) -> Self {
        Self {
            disable_scp_checks: object.disable_scp_checks,
            enabled: object.enabled,
        }
    }

    fn build(&self) -> Result<Ccs, BuildError> {
        Ok(Ccs {
            disable_scp_checks: self.disable_scp_checks,
            enabled: self.enabled,
        })
    }
}
