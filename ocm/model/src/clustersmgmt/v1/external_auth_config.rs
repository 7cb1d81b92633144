use ocm_model_core::{
    builder::{build_nested, copy_nested},
    BuildError,
    List,
    ListBuilder,
    ObjectBuilder,
};
use serde::{Deserialize, Serialize};

use super::external_auth::{ExternalAuth, ExternalAuthBuilder};

/// Represents an external authentication configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_auths: Option<List<ExternalAuth>>,
}

impl ExternalAuthConfig {
    /// Returns a builder for this type.
    pub fn builder() -> ExternalAuthConfigBuilder {
        ExternalAuthConfigBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.external_auths.is_none()
    }

    /// Whether external authentication is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// The list of external authentication providers.
    pub fn external_auths(&self) -> Option<&List<ExternalAuth>> {
        self.external_auths.as_ref()
    }

    pub fn get_external_auths(&self) -> Option<&List<ExternalAuth>> {
        self.external_auths.as_ref()
    }
}

/// Builder for [`ExternalAuthConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExternalAuthConfigBuilder {
    enabled: Option<bool>,
    external_auths: Option<ListBuilder<ExternalAuthBuilder>>,
}

impl ExternalAuthConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether external authentication is enabled.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }

    /// The list of external authentication providers.
    pub fn external_auths(mut self, value: ListBuilder<ExternalAuthBuilder>) -> Self {
        self.external_auths = Some(value);
        self
    }
}

impl ObjectBuilder for ExternalAuthConfigBuilder {
    type Object = ExternalAuthConfig;

    fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.external_auths.is_none()
    }

    fn copy(self, object: &ExternalAuthConfig) -> Self {
        Self {
            enabled: object.enabled,
            external_auths: copy_nested(&object.external_auths),
        }
    }

    fn build(&self) -> Result<ExternalAuthConfig, BuildError> {
        Ok(ExternalAuthConfig {
            enabled: self.enabled,
            external_auths: build_nested(&self.external_auths)?,
        })
    }
}
