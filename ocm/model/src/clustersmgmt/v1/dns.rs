use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// DNS settings of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dns {
    #[serde(skip_serializing_if = "Option::is_none")]
    base_domain: Option<String>,
}

impl Dns {
    /// Returns a builder for this type.
    pub fn builder() -> DnsBuilder {
        DnsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.base_domain.is_none()
    }

    /// Base DNS domain of the cluster.
    pub fn base_domain(&self) -> &str {
        self.base_domain.as_deref().unwrap_or_default()
    }

    pub fn get_base_domain(&self) -> Option<&str> {
        self.base_domain.as_deref()
    }
}

/// Builder for [`Dns`].
#[derive(Debug, Clone, Default)]
pub struct DnsBuilder {
    base_domain: Option<String>,
}

impl DnsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base DNS domain of the cluster.
    pub fn base_domain(mut self, value: impl Into<String>) -> Self {
        self.base_domain = Some(value.into());
        self
    }
}

impl ObjectBuilder for DnsBuilder {
    type Object = Dns;

    fn is_empty(&self) -> bool {
        self.base_domain.is_none()
    }

    fn copy(self, object: &Dns) -> Self {
        Self {
            base_domain: object.base_domain.clone(),
        }
    }

    fn build(&self) -> Result<Dns, BuildError> {
        Ok(Dns {
            base_domain: self.base_domain.clone(),
        })
    }
}
