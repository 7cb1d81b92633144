use ocm_model_core::{builder::{build_nested, copy_nested}, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::cidr_block_access::{CidrBlockAccess, CidrBlockAccessBuilder};
use super::enums::ListeningMethod;

/// Information about the API of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cidr_block_access: Option<CidrBlockAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    listening: Option<ListeningMethod>,
}

impl ClusterApi {
    /// Returns a builder for this type.
    pub fn builder() -> ClusterApiBuilder {
        ClusterApiBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.cidr_block_access.is_none()
            && self.listening.is_none()
    }

    /// The URL of the API server of the cluster.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// CIDR blocks allowed to reach the API server.
    pub fn cidr_block_access(&self) -> Option<&CidrBlockAccess> {
        self.cidr_block_access.as_ref()
    }

    pub fn get_cidr_block_access(&self) -> Option<&CidrBlockAccess> {
        self.cidr_block_access.as_ref()
    }

    /// The listening method of the API server.
    pub fn listening(&self) -> ListeningMethod {
        self.listening.clone().unwrap_or_default()
    }

    pub fn get_listening(&self) -> Option<&ListeningMethod> {
        self.listening.as_ref()
    }
}

/// Builder for [`ClusterApi`].
#[derive(Debug, Clone, Default)]
pub struct ClusterApiBuilder {
    url: Option<String>,
    cidr_block_access: Option<CidrBlockAccessBuilder>,
    listening: Option<ListeningMethod>,
}

impl ClusterApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The URL of the API server of the cluster.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }

    /// CIDR blocks allowed to reach the API server.
    pub fn cidr_block_access(mut self, value: CidrBlockAccessBuilder) -> Self {
        self.cidr_block_access = Some(value);
        self
    }

    /// The listening method of the API server.
    pub fn listening(mut self, value: impl Into<ListeningMethod>) -> Self {
        self.listening = Some(value.into());
        self
    }
}

impl ObjectBuilder for ClusterApiBuilder {
    type Object = ClusterApi;

    fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.cidr_block_access.is_none()
            && self.listening.is_none()
    }

    fn copy(self, object: &ClusterApi) -> Self {
        Self {
            url: object.url.clone(),
            cidr_block_access: copy_nested(&object.cidr_block_access),
            listening: object.listening.clone(),
        }
    }

    fn build(&self) -> Result<ClusterApi, BuildError> {
        Ok(ClusterApi {
            url: self.url.clone(),
            cidr_block_access: build_nested(&self.cidr_block_access)?,
            listening: self.listening.clone(),
        })
    }
}
