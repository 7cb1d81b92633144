use std::collections::BTreeMap;

use ocm_model_core::{builder::{build_nested, copy_nested}, empty_map, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::open_id_claims::{OpenIdClaims, OpenIdClaimsBuilder};

/// Details for `openid` identity providers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenIdIdentityProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    claims: Option<OpenIdClaims>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_authorize_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issuer: Option<String>,
}

impl OpenIdIdentityProvider {
    /// Returns a builder for this type.
    pub fn builder() -> OpenIdIdentityProviderBuilder {
        OpenIdIdentityProviderBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.ca.is_none()
            && self.claims.is_none()
            && self.client_id.is_none()
            && self.client_secret.is_none()
            && self.extra_authorize_parameters.is_none()
            && self.extra_scopes.is_none()
            && self.issuer.is_none()
    }

    /// Certificate bunde to use to validate server certificates for the configured
    /// URL.
    pub fn ca(&self) -> &str {
        self.ca.as_deref().unwrap_or_default()
    }

    pub fn get_ca(&self) -> Option<&str> {
        self.ca.as_deref()
    }

    /// Claims used to configure the provider.
    pub fn claims(&self) -> Option<&OpenIdClaims> {
        self.claims.as_ref()
    }

    pub fn get_claims(&self) -> Option<&OpenIdClaims> {
        self.claims.as_ref()
    }

    /// Identifier of a client registered with the _OpenID_ provider.
    pub fn client_id(&self) -> &str {
        self.client_id.as_deref().unwrap_or_default()
    }

    pub fn get_client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Client secret.
    pub fn client_secret(&self) -> &str {
        self.client_secret.as_deref().unwrap_or_default()
    }

    pub fn get_client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Optional map of extra parameters to add to the authorization token request.
    pub fn extra_authorize_parameters(&self) -> &BTreeMap<String, String> {
        self.extra_authorize_parameters.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_extra_authorize_parameters(&self) -> Option<&BTreeMap<String, String>> {
        self.extra_authorize_parameters.as_ref()
    }

    /// Optional list of scopes to request, in addition to the `openid` scope,
    /// during the authorization token request.
    pub fn extra_scopes(&self) -> &[String] {
        self.extra_scopes.as_deref().unwrap_or_default()
    }

    pub fn get_extra_scopes(&self) -> Option<&[String]> {
        self.extra_scopes.as_deref()
    }

    /// The URL that the OpenID Provider asserts as the Issuer Identifier.
    pub fn issuer(&self) -> &str {
        self.issuer.as_deref().unwrap_or_default()
    }

    pub fn get_issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }
}

/// Builder for [`OpenIdIdentityProvider`].
#[derive(Debug, Clone, Default)]
pub struct OpenIdIdentityProviderBuilder {
    ca: Option<String>,
    claims: Option<OpenIdClaimsBuilder>,
    client_id: Option<String>,
    client_secret: Option<String>,
    extra_authorize_parameters: Option<BTreeMap<String, String>>,
    extra_scopes: Option<Vec<String>>,
    issuer: Option<String>,
}

impl OpenIdIdentityProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Certificate bunde to use to validate server certificates for the configured
    /// URL.
    pub fn ca(mut self, value: impl Into<String>) -> Self {
        self.ca = Some(value.into());
        self
    }

    /// Claims used to configure the provider.
    pub fn claims(mut self, value: OpenIdClaimsBuilder) -> Self {
        self.claims = Some(value);
        self
    }

    /// Identifier of a client registered with the _OpenID_ provider.
    pub fn client_id(mut self, value: impl Into<String>) -> Self {
        self.client_id = Some(value.into());
        self
    }

    /// Client secret.
    pub fn client_secret(mut self, value: impl Into<String>) -> Self {
        self.client_secret = Some(value.into());
        self
    }

    /// Optional map of extra parameters to add to the authorization token request.
    pub fn extra_authorize_parameters<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_authorize_parameters = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Optional list of scopes to request, in addition to the `openid` scope,
    /// during the authorization token request.
    pub fn extra_scopes<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_scopes = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// The URL that the OpenID Provider asserts as the Issuer Identifier.
    pub fn issuer(mut self, value: impl Into<String>) -> Self {
        self.issuer = Some(value.into());
        self
    }
}

impl ObjectBuilder for OpenIdIdentityProviderBuilder {
    type Object = OpenIdIdentityProvider;

    fn is_empty(&self) -> bool {
        self.ca.is_none()
            && self.claims.is_none()
            && self.client_id.is_none()
            && self.client_secret.is_none()
            && self.extra_authorize_parameters.is_none()
            && self.extra_scopes.is_none()
            && self.issuer.is_none()
    }

    fn copy(self, object: &OpenIdIdentityProvider) -> Self {
        Self {
            ca: object.ca.clone(),
            claims: copy_nested(&object.claims),
            client_id: object.client_id.clone(),
            client_secret: object.client_secret.clone(),
            extra_authorize_parameters: object.extra_authorize_parameters.clone(),
            extra_scopes: object.extra_scopes.clone(),
            issuer: object.issuer.clone(),
        }
    }

    fn build(&self) -> Result<OpenIdIdentityProvider, BuildError> {
        Ok(OpenIdIdentityProvider {
            ca: self.ca.clone(),
            claims: build_nested(&self.claims)?,
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            extra_authorize_parameters: self.extra_authorize_parameters.clone(),
            extra_scopes: self.extra_scopes.clone(),
            issuer: self.issuer.clone(),
        })
    }
}
