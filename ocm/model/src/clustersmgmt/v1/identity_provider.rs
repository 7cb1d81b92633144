use ocm_model_core::{
    builder::{build_nested, copy_nested},
    BuildError,
    KindTag,
    List,
    ListBuilder,
    ObjectBuilder,
    Resource,
};
use serde::{Deserialize, Serialize};

use super::enums::{IdentityProviderMappingMethod, IdentityProviderType};
use super::htpasswd_identity_provider::{HtpasswdIdentityProvider, HtpasswdIdentityProviderBuilder};
use super::open_id_identity_provider::{OpenIdIdentityProvider, OpenIdIdentityProviderBuilder};

/// Representation of an identity provider.
///
/// Only the attribute matching `type` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityProvider {
    kind: KindTag<IdentityProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    htpasswd: Option<HtpasswdIdentityProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    login: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mapping_method: Option<IdentityProviderMappingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_id: Option<OpenIdIdentityProvider>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<IdentityProviderType>,
}

impl Resource for IdentityProvider {
    const KIND: &'static str = "IdentityProvider";
    const LINK_KIND: &'static str = "IdentityProviderLink";
    const NIL_KIND: &'static str = "IdentityProviderNil";
    const LIST_KIND: &'static str = "IdentityProviderList";
    const LIST_LINK_KIND: &'static str = "IdentityProviderListLink";
    const LIST_NIL_KIND: &'static str = "IdentityProviderListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl IdentityProvider {
    /// Returns a builder for this type.
    pub fn builder() -> IdentityProviderBuilder {
        IdentityProviderBuilder::new()
    }

    /// Returns `IdentityProviderLink` for links and `IdentityProvider` otherwise.
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
            && self.challenge.is_none()
            && self.htpasswd.is_none()
            && self.login.is_none()
            && self.mapping_method.is_none()
            && self.name.is_none()
            && self.open_id.is_none()
            && self.type_.is_none()
    }

    /// When `true` unauthenticated token requests from non-web clients will be
    /// redirected to the login page.
    pub fn challenge(&self) -> bool {
        self.challenge.unwrap_or_default()
    }

    pub fn get_challenge(&self) -> Option<bool> {
        self.challenge
    }

    /// Details for `htpasswd` identity providers.
    pub fn htpasswd(&self) -> Option<&HtpasswdIdentityProvider> {
        self.htpasswd.as_ref()
    }

    pub fn get_htpasswd(&self) -> Option<&HtpasswdIdentityProvider> {
        self.htpasswd.as_ref()
    }

    /// When `true` unauthenticated token requests from web clients will be
    /// redirected to the login page.
    pub fn login(&self) -> bool {
        self.login.unwrap_or_default()
    }

    pub fn get_login(&self) -> Option<bool> {
        self.login
    }

    /// Controls how mappings are established between this provider identities and
    /// user objects.
    pub fn mapping_method(&self) -> IdentityProviderMappingMethod {
        self.mapping_method.clone().unwrap_or_default()
    }

    pub fn get_mapping_method(&self) -> Option<&IdentityProviderMappingMethod> {
        self.mapping_method.as_ref()
    }

    /// The name of the identity provider.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Details for `openid` identity providers.
    pub fn open_id(&self) -> Option<&OpenIdIdentityProvider> {
        self.open_id.as_ref()
    }

    pub fn get_open_id(&self) -> Option<&OpenIdIdentityProvider> {
        self.open_id.as_ref()
    }

    /// Type of identity provider.
    pub fn type_(&self) -> IdentityProviderType {
        self.type_.clone().unwrap_or_default()
    }

    pub fn get_type(&self) -> Option<&IdentityProviderType> {
        self.type_.as_ref()
    }
}

/// Builder for [`IdentityProvider`].
#[derive(Debug, Clone, Default)]
pub struct IdentityProviderBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    challenge: Option<bool>,
    htpasswd: Option<HtpasswdIdentityProviderBuilder>,
    login: Option<bool>,
    mapping_method: Option<IdentityProviderMappingMethod>,
    name: Option<String>,
    open_id: Option<OpenIdIdentityProviderBuilder>,
    type_: Option<IdentityProviderType>,
}

impl IdentityProviderBuilder {
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

    /// When `true` unauthenticated token requests from non-web clients will be
    /// redirected to the login page.
    pub fn challenge(mut self, value: bool) -> Self {
        self.challenge = Some(value);
        self
    }

    /// Details for `htpasswd` identity providers.
    pub fn htpasswd(mut self, value: HtpasswdIdentityProviderBuilder) -> Self {
        self.htpasswd = Some(value);
        self
    }

    /// When `true` unauthenticated token requests from web clients will be
    /// redirected to the login page.
    pub fn login(mut self, value: bool) -> Self {
        self.login = Some(value);
        self
    }

    /// Controls how mappings are established between this provider identities and
    /// user objects.
    pub fn mapping_method(mut self, value: impl Into<IdentityProviderMappingMethod>) -> Self {
        self.mapping_method = Some(value.into());
        self
    }

    /// The name of the identity provider.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Details for `openid` identity providers.
    pub fn open_id(mut self, value: OpenIdIdentityProviderBuilder) -> Self {
        self.open_id = Some(value);
        self
    }

    /// Type of identity provider.
    pub fn type_(mut self, value: impl Into<IdentityProviderType>) -> Self {
        self.type_ = Some(value.into());
        self
    }
}

impl ObjectBuilder for IdentityProviderBuilder {
    type Object = IdentityProvider;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.challenge.is_none()
            && self.htpasswd.is_none()
            && self.login.is_none()
            && self.mapping_method.is_none()
            && self.name.is_none()
            && self.open_id.is_none()
            && self.type_.is_none()
    }

    fn copy(self, object: &IdentityProvider) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            challenge: object.challenge,
            htpasswd: copy_nested(&object.htpasswd),
            login: object.login,
            mapping_method: object.mapping_method.clone(),
            name: object.name.clone(),
            open_id: copy_nested(&object.open_id),
            type_: object.type_.clone(),
        }
    }

    fn build(&self) -> Result<IdentityProvider, BuildError> {
        Ok(IdentityProvider {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            challenge: self.challenge,
            htpasswd: build_nested(&self.htpasswd)?,
            login: self.login,
            mapping_method: self.mapping_method.clone(),
            name: self.name.clone(),
            open_id: build_nested(&self.open_id)?,
            type_: self.type_.clone(),
        })
    }
}

/// A list of [`IdentityProvider`] objects.
pub type IdentityProviderList = List<IdentityProvider>;

/// Builder for [`IdentityProviderList`].
pub type IdentityProviderListBuilder = ListBuilder<IdentityProviderBuilder>;
