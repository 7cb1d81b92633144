use ocm_model_core::{
    builder::{build_nested, copy_nested},
    BuildError,
    List,
    ListBuilder,
    ObjectBuilder,
};
use serde::{Deserialize, Serialize};

use super::htpasswd_user::{HtpasswdUser, HtpasswdUserBuilder};

/// Details for `htpasswd` identity providers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtpasswdIdentityProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    users: Option<List<HtpasswdUser>>,
}

impl HtpasswdIdentityProvider {
    /// Returns a builder for this type.
    pub fn builder() -> HtpasswdIdentityProviderBuilder {
        HtpasswdIdentityProviderBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.password.is_none()
            && self.username.is_none()
            && self.users.is_none()
    }

    /// Password to be used in the _HTPasswd_ data file.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    pub fn get_password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Username to be used in the _HTPasswd_ data file.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn get_username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Link to the collection of _HTPasswd_ users.
    pub fn users(&self) -> Option<&List<HtpasswdUser>> {
        self.users.as_ref()
    }

    pub fn get_users(&self) -> Option<&List<HtpasswdUser>> {
        self.users.as_ref()
    }
}

/// Builder for [`HtpasswdIdentityProvider`].
#[derive(Debug, Clone, Default)]
pub struct HtpasswdIdentityProviderBuilder {
    password: Option<String>,
    username: Option<String>,
    users: Option<ListBuilder<HtpasswdUserBuilder>>,
}

impl HtpasswdIdentityProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Password to be used in the _HTPasswd_ data file.
    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(value.into());
        self
    }

    /// Username to be used in the _HTPasswd_ data file.
    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    /// Link to the collection of _HTPasswd_ users.
    pub fn users(mut self, value: ListBuilder<HtpasswdUserBuilder>) -> Self {
        self.users = Some(value);
        self
    }
}

impl ObjectBuilder for HtpasswdIdentityProviderBuilder {
    type Object = HtpasswdIdentityProvider;

    fn is_empty(&self) -> bool {
        self.password.is_none()
            && self.username.is_none()
            && self.users.is_none()
    }

    fn copy(self, object: &HtpasswdIdentityProvider) -> Self {
        Self {
            password: object.password.clone(),
            username: object.username.clone(),
            users: copy_nested(&object.users),
        }
    }

    fn build(&self) -> Result<HtpasswdIdentityProvider, BuildError> {
        Ok(HtpasswdIdentityProvider {
            password: self.password.clone(),
            username: self.username.clone(),
            users: build_nested(&self.users)?,
        })
    }
}
