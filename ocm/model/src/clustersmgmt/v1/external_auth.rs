use ocm_model_core::{
    builder::{build_all, build_nested, copy_all, copy_nested},
    BuildError,
    KindTag,
    List,
    ListBuilder,
    ObjectBuilder,
    Resource,
};
use serde::{Deserialize, Serialize};

use super::external_auth_claim::{ExternalAuthClaim, ExternalAuthClaimBuilder};
use super::external_auth_client_config::{ExternalAuthClientConfig, ExternalAuthClientConfigBuilder};
use super::token_issuer::{TokenIssuer, TokenIssuerBuilder};

/// An external authentication provider (an OIDC token issuer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAuth {
    kind: KindTag<ExternalAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    claim: Option<ExternalAuthClaim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clients: Option<Vec<ExternalAuthClientConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issuer: Option<TokenIssuer>,
}

impl Resource for ExternalAuth {
    const KIND: &'static str = "ExternalAuth";
    const LINK_KIND: &'static str = "ExternalAuthLink";
    const NIL_KIND: &'static str = "ExternalAuthNil";
    const LIST_KIND: &'static str = "ExternalAuthList";
    const LIST_LINK_KIND: &'static str = "ExternalAuthListLink";
    const LIST_NIL_KIND: &'static str = "ExternalAuthListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl ExternalAuth {
    /// Returns a builder for this type.
    pub fn builder() -> ExternalAuthBuilder {
        ExternalAuthBuilder::new()
    }

    /// Returns `ExternalAuthLink` for links and `ExternalAuth` otherwise.
    pub fn kind(&self) -> &'static str {
        Self::kind_of(Some(self))
    }

    /// Returns `true` if this is a link to the object rather than the object
    /// itself.
    pub fn link(&self) -> bool {
        self.kind.is_link()
    }

    /// Identifier of the object.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Self link.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    pub fn get_href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.claim.is_none()
            && self.clients.is_none()
            && self.issuer.is_none()
    }

    /// The rules on how to transform information from an ID token into a cluster
    /// identity.
    pub fn claim(&self) -> Option<&ExternalAuthClaim> {
        self.claim.as_ref()
    }

    pub fn get_claim(&self) -> Option<&ExternalAuthClaim> {
        self.claim.as_ref()
    }

    /// The OIDC clients that platform components use to authenticate.
    pub fn clients(&self) -> &[ExternalAuthClientConfig] {
        self.clients.as_deref().unwrap_or_default()
    }

    pub fn get_clients(&self) -> Option<&[ExternalAuthClientConfig]> {
        self.clients.as_deref()
    }

    /// The token issuer of the provider.
    pub fn issuer(&self) -> Option<&TokenIssuer> {
        self.issuer.as_ref()
    }

    pub fn get_issuer(&self) -> Option<&TokenIssuer> {
        self.issuer.as_ref()
    }
}

/// Builder for [`ExternalAuth`].
#[derive(Debug, Clone, Default)]
pub struct ExternalAuthBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    claim: Option<ExternalAuthClaimBuilder>,
    clients: Option<Vec<ExternalAuthClientConfigBuilder>>,
    issuer: Option<TokenIssuerBuilder>,
}

impl ExternalAuthBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag that indicates if this is a link.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// The rules on how to transform information from an ID token into a cluster
    /// identity.
    pub fn claim(mut self, value: ExternalAuthClaimBuilder) -> Self {
        self.claim = Some(value);
        self
    }

    /// The OIDC clients that platform components use to authenticate.
    pub fn clients<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = ExternalAuthClientConfigBuilder>,
    {
        self.clients = Some(values.into_iter().collect());
        self
    }

    /// The token issuer of the provider.
    pub fn issuer(mut self, value: TokenIssuerBuilder) -> Self {
        self.issuer = Some(value);
        self
    }
}

impl ObjectBuilder for ExternalAuthBuilder {
    type Object = ExternalAuth;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.claim.is_none()
            && self.clients.is_none()
            && self.issuer.is_none()
    }

    fn copy(self, object: &ExternalAuth) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            claim: copy_nested(&object.claim),
            clients: copy_all(&object.clients),
            issuer: copy_nested(&object.issuer),
        }
    }

    fn build(&self) -> Result<ExternalAuth, BuildError> {
        Ok(ExternalAuth {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            claim: build_nested(&self.claim)?,
            clients: build_all(&self.clients)?,
            issuer: build_nested(&self.issuer)?,
        })
    }
}

/// A list of [`ExternalAuth`] objects.
pub type ExternalAuthList = List<ExternalAuth>;

/// Builder for [`ExternalAuthList`].
pub type ExternalAuthListBuilder = ListBuilder<ExternalAuthBuilder>;
