use ocm_model_core::{builder::{build_nested, copy_nested}, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::client_component::{ClientComponent, ClientComponentBuilder};
use super::enums::ExternalAuthClientType;

/// The configuration of an OIDC client for a platform component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAuthClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<ClientComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<ExternalAuthClientType>,
}

impl ExternalAuthClientConfig {
    /// Returns a builder for this type.
    pub fn builder() -> ExternalAuthClientConfigBuilder {
        ExternalAuthClientConfigBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.component.is_none()
            && self.extra_scopes.is_none()
            && self.secret.is_none()
            && self.type_.is_none()
    }

    /// The identifier of the OIDC client.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The component that is supposed to consume this client configuration.
    pub fn component(&self) -> Option<&ClientComponent> {
        self.component.as_ref()
    }

    pub fn get_component(&self) -> Option<&ClientComponent> {
        self.component.as_ref()
    }

    /// Additional scopes the component requests.
    pub fn extra_scopes(&self) -> &[String] {
        self.extra_scopes.as_deref().unwrap_or_default()
    }

    pub fn get_extra_scopes(&self) -> Option<&[String]> {
        self.extra_scopes.as_deref()
    }

    /// The secret of the OIDC client.
    pub fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or_default()
    }

    pub fn get_secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Whether the client is confidential or public.
    pub fn type_(&self) -> ExternalAuthClientType {
        self.type_.clone().unwrap_or_default()
    }

    pub fn get_type(&self) -> Option<&ExternalAuthClientType> {
        self.type_.as_ref()
    }
}

/// Builder for [`ExternalAuthClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExternalAuthClientConfigBuilder {
    id: Option<String>,
    component: Option<ClientComponentBuilder>,
    extra_scopes: Option<Vec<String>>,
    secret: Option<String>,
    type_: Option<ExternalAuthClientType>,
}

impl ExternalAuthClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier of the OIDC client.
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    /// The component that is supposed to consume this client configuration.
    pub fn component(mut self, value: ClientComponentBuilder) -> Self {
        self.component = Some(value);
        self
    }

    /// Additional scopes the component requests.
    pub fn extra_scopes<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_scopes = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// The secret of the OIDC client.
    pub fn secret(mut self, value: impl Into<String>) -> Self {
        self.secret = Some(value.into());
        self
    }

    /// Whether the client is confidential or public.
    pub fn type_(mut self, value: impl Into<ExternalAuthClientType>) -> Self {
        self.type_ = Some(value.into());
        self
    }
}

impl ObjectBuilder for ExternalAuthClientConfigBuilder {
    type Object = ExternalAuthClientConfig;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.component.is_none()
            && self.extra_scopes.is_none()
            && self.secret.is_none()
            && self.type_.is_none()
    }

    fn copy(self, object: &ExternalAuthClientConfig) -> Self {
        Self {
            id: object.id.clone(),
            component: copy_nested(&object.component),
            extra_scopes: object.extra_scopes.clone(),
            secret: object.secret.clone(),
            type_: object.type_.clone(),
        }
    }

    fn build(&self) -> Result<ExternalAuthClientConfig, BuildError> {
        Ok(ExternalAuthClientConfig {
            id: self.id.clone(),
            component: build_nested(&self.component)?,
            extra_scopes: self.extra_scopes.clone(),
            secret: self.secret.clone(),
            type_: self.type_.clone(),
        })
    }
}
