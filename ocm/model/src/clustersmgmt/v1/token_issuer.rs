use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Representation of a token issuer used in an external authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenIssuer {
    #[serde(skip_serializing_if = "Option::is_none")]
    ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audiences: Option<Vec<String>>,
}

impl TokenIssuer {
    /// Returns a builder for this type.
    pub fn builder() -> TokenIssuerBuilder {
        TokenIssuerBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.ca.is_none() && self.url.is_none() && self.audiences.is_none()
    }

    /// Certificate bundle to use to validate server certificates for the configured
    /// URL.
    pub fn ca(&self) -> &str {
        self.ca.as_deref().unwrap_or_default()
    }

    pub fn get_ca(&self) -> Option<&str> {
        self.ca.as_deref()
    }

    /// URL is the serving URL of the token issuer.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Audiences that the token was issued for.
    pub fn audiences(&self) -> &[String] {
        self.audiences.as_deref().unwrap_or_default()
    }

    pub fn get_audiences(&self) -> Option<&[String]> {
        self.audiences.as_deref()
    }
}

/// Builder for [`TokenIssuer`].
#[derive(Debug, Clone, Default)]
pub struct TokenIssuerBuilder {
    ca: Option<String>,
    url: Option<String>,
    audiences: Option<Vec<String>>,
}

impl TokenIssuerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Certificate bundle to use to validate server certificates for the configured
    /// URL.
    pub fn ca(mut self, value: impl Into<String>) -> Self {
        self.ca = Some(value.into());
        self
    }

    /// URL is the serving URL of the token issuer.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }

    /// Audiences that the token was issued for.
    pub fn audiences<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audiences = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl ObjectBuilder for TokenIssuerBuilder {
    type Object = TokenIssuer;

    fn is_empty(&self) -> bool {
        self.ca.is_none() && self.url.is_none() && self.audiences.is_none()
    }

    fn copy(self, object: &TokenIssuer) -> Self {
        Self {
            ca: object.ca.clone(),
            url: object.url.clone(),
            audiences: object.audiences.clone(),
        }
    }

    fn build(&self) -> Result<TokenIssuer, BuildError> {
        Ok(TokenIssuer {
            ca: self.ca.clone(),
            url: self.url.clone(),
            audiences: self.audiences.clone(),
        })
    }
}
