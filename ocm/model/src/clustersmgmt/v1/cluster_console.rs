use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Information about the console of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConsole {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl ClusterConsole {
    /// Returns a builder for this type.
    pub fn builder() -> ClusterConsoleBuilder {
        ClusterConsoleBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
    }

    /// The URL of the console of the cluster.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Builder for [`ClusterConsole`].
#[derive(Debug, Clone, Default)]
pub struct ClusterConsoleBuilder {
    url: Option<String>,
}

impl ClusterConsoleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The URL of the console of the cluster.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }
}

impl ObjectBuilder for ClusterConsoleBuilder {
    type Object = ClusterConsole;

    fn is_empty(&self) -> bool {
        self.url.is_none()
    }

    fn copy(self, object: &ClusterConsole) -> Self {
        Self {
            url: object.url.clone(),
        }
    }

    fn build(&self) -> Result<ClusterConsole, BuildError> {
        Ok(ClusterConsole {
            url: self.url.clone(),
        })
    }
}
