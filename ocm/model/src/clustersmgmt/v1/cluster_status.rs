use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::enums::{ClusterConfigurationMode, ClusterState};

/// Detailed status of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_mode: Option<ClusterConfigurationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limited_support_reason_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oidc_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provision_error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provision_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<ClusterState>,
}

impl ClusterStatus {
    /// Returns a builder for this type.
    pub fn builder() -> ClusterStatusBuilder {
        ClusterStatusBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.configuration_mode.is_none()
            && self.description.is_none()
            && self.dns_ready.is_none()
            && self.limited_support_reason_count.is_none()
            && self.oidc_ready.is_none()
            && self.provision_error_code.is_none()
            && self.provision_error_message.is_none()
            && self.state.is_none()
    }

    /// Configuration mode.
    pub fn configuration_mode(&self) -> ClusterConfigurationMode {
        self.configuration_mode.clone().unwrap_or_default()
    }

    pub fn get_configuration_mode(&self) -> Option<&ClusterConfigurationMode> {
        self.configuration_mode.as_ref()
    }

    /// Detailed user friendly status of cluster state.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// DNSReady from Provision Shard.
    pub fn dns_ready(&self) -> bool {
        self.dns_ready.unwrap_or_default()
    }

    pub fn get_dns_ready(&self) -> Option<bool> {
        self.dns_ready
    }

    /// Limited support reason count.
    pub fn limited_support_reason_count(&self) -> i32 {
        self.limited_support_reason_count.unwrap_or_default()
    }

    pub fn get_limited_support_reason_count(&self) -> Option<i32> {
        self.limited_support_reason_count
    }

    /// OIDCReady from user configuration.
    pub fn oidc_ready(&self) -> bool {
        self.oidc_ready.unwrap_or_default()
    }

    pub fn get_oidc_ready(&self) -> Option<bool> {
        self.oidc_ready
    }

    /// Provisioning Error Code.
    pub fn provision_error_code(&self) -> &str {
        self.provision_error_code.as_deref().unwrap_or_default()
    }

    pub fn get_provision_error_code(&self) -> Option<&str> {
        self.provision_error_code.as_deref()
    }

    /// Provisioning Error Message.
    pub fn provision_error_message(&self) -> &str {
        self.provision_error_message.as_deref().unwrap_or_default()
    }

    pub fn get_provision_error_message(&self) -> Option<&str> {
        self.provision_error_message.as_deref()
    }

    /// The overall state of the cluster.
    pub fn state(&self) -> ClusterState {
        self.state.clone().unwrap_or_default()
    }

    pub fn get_state(&self) -> Option<&ClusterState> {
        self.state.as_ref()
    }
}

/// Builder for [`ClusterStatus`].
#[derive(Debug, Clone, Default)]
pub struct ClusterStatusBuilder {
    configuration_mode: Option<ClusterConfigurationMode>,
    description: Option<String>,
    dns_ready: Option<bool>,
    limited_support_reason_count: Option<i32>,
    oidc_ready: Option<bool>,
    provision_error_code: Option<String>,
    provision_error_message: Option<String>,
    state: Option<ClusterState>,
}

impl ClusterStatusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration mode.
    pub fn configuration_mode(mut self, value: impl Into<ClusterConfigurationMode>) -> Self {
        self.configuration_mode = Some(value.into());
        self
    }

    /// Detailed user friendly status of cluster state.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    /// DNSReady from Provision Shard.
    pub fn dns_ready(mut self, value: bool) -> Self {
        self.dns_ready = Some(value);
        self
    }

    /// Limited support reason count.
    pub fn limited_support_reason_count(mut self, value: i32) -> Self {
        self.limited_support_reason_count = Some(value);
        self
    }

    /// OIDCReady from user configuration.
    pub fn oidc_ready(mut self, value: bool) -> Self {
        self.oidc_ready = Some(value);
        self
    }

    /// Provisioning Error Code.
    pub fn provision_error_code(mut self, value: impl Into<String>) -> Self {
        self.provision_error_code = Some(value.into());
        self
    }

    /// Provisioning Error Message.
    pub fn provision_error_message(mut self, value: impl Into<String>) -> Self {
        self.provision_error_message = Some(value.into());
        self
    }

    /// The overall state of the cluster.
    pub fn state(mut self, value: impl Into<ClusterState>) -> Self {
        self.state = Some(value.into());
        self
    }
}

impl ObjectBuilder for ClusterStatusBuilder {
    type Object = ClusterStatus;

    fn is_empty(&self) -> bool {
        self.configuration_mode.is_none()
            && self.description.is_none()
            && self.dns_ready.is_none()
            && self.limited_support_reason_count.is_none()
            && self.oidc_ready.is_none()
            && self.provision_error_code.is_none()
            && self.provision_error_message.is_none()
            && self.state.is_none()
    }

    fn copy(self, object: &ClusterStatus) -> Self {
        Self {
            configuration_mode: object.configuration_mode.clone(),
            description: object.description.clone(),
            dns_ready: object.dns_ready,
            limited_support_reason_count: object.limited_support_reason_count,
            oidc_ready: object.oidc_ready,
            provision_error_code: object.provision_error_code.clone(),
            provision_error_message: object.provision_error_message.clone(),
            state: object.state.clone(),
        }
    }

    fn build(&self) -> Result<ClusterStatus, BuildError> {
        Ok(ClusterStatus {
            configuration_mode: self.configuration_mode.clone(),
            description: self.description.clone(),
            dns_ready: self.dns_ready,
            limited_support_reason_count: self.limited_support_reason_count,
            oidc_ready: self.oidc_ready,
            provision_error_code: self.provision_error_code.clone(),
            provision_error_message: self.provision_error_message.clone(),
            state: self.state.clone(),
        })
    }
}
