use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Proxy configuration of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proxy {
    #[serde(skip_serializing_if = "Option::is_none")]
    http_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    https_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    no_proxy: Option<String>,
}

impl Proxy {
    /// Returns a builder for this type.
    pub fn builder() -> ProxyBuilder {
        ProxyBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.http_proxy.is_none()
            && self.https_proxy.is_none()
            && self.no_proxy.is_none()
    }

    /// HTTPProxy is the URL of the proxy for HTTP requests.
    pub fn http_proxy(&self) -> &str {
        self.http_proxy.as_deref().unwrap_or_default()
    }

    pub fn get_http_proxy(&self) -> Option<&str> {
        self.http_proxy.as_deref()
    }

    /// HTTPSProxy is the URL of the proxy for HTTPS requests.
    pub fn https_proxy(&self) -> &str {
        self.https_proxy.as_deref().unwrap_or_default()
    }

    pub fn get_https_proxy(&self) -> Option<&str> {
        self.https_proxy.as_deref()
    }

    /// NoProxy is a comma-separated list of domains and CIDRs for which the proxy
    /// should not be used.
    pub fn no_proxy(&self) -> &str {
        self.no_proxy.as_deref().unwrap_or_default()
    }

    pub fn get_no_proxy(&self) -> Option<&str> {
        self.no_proxy.as_deref()
    }
}

/// Builder for [`Proxy`].
#[derive(Debug, Clone, Default)]
pub struct ProxyBuilder {
    http_proxy: Option<String>,
    https_proxy: Option<String>,
    no_proxy: Option<String>,
}

impl ProxyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTPProxy is the URL of the proxy for HTTP requests.
    pub fn http_proxy(mut self, value: impl Into<String>) -> Self {
        self.http_proxy = Some(value.into());
        self
    }

    /// HTTPSProxy is the URL of the proxy for HTTPS requests.
    pub fn https_proxy(mut self, value: impl Into<String>) -> Self {
        self.https_proxy = Some(value.into());
        self
    }

    /// NoProxy is a comma-separated list of domains and CIDRs for which the proxy
    /// should not be used.
    pub fn no_proxy(mut self, value: impl Into<String>) -> Self {
        self.no_proxy = Some(value.into());
        self
    }
}

impl ObjectBuilder for ProxyBuilder {
    type Object = Proxy;

    fn is_empty(&self) -> bool {
        self.http_proxy.is_none()
            && self.https_proxy.is_none()
            && self.no_proxy.is_none()
    }

    fn copy(self, object: &Proxy) -> Self {
        Self {
            http_proxy: object.http_proxy.clone(),
            https_proxy: object.https_proxy.clone(),
            no_proxy: object.no_proxy.clone(),
        }
    }

    fn build(&self) -> Result<Proxy, BuildError> {
        Ok(Proxy {
            http_proxy: self.http_proxy.clone(),
            https_proxy: self.https_proxy.clone(),
            no_proxy: self.no_proxy.clone(),
        })
    }
}
