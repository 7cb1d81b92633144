use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenIdClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_username: Option<Vec<String>>,
}

impl OpenIdClaims {
    /// Returns a builder for this type.
    pub fn builder() -> OpenIdClaimsBuilder {
        OpenIdClaimsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.groups.is_none()
            && self.name.is_none()
            && self.preferred_username.is_none()
    }

    /// List of claims to use as the mail address.
    pub fn email(&self) -> &[String] {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn get_email(&self) -> Option<&[String]> {
        self.email.as_deref()
    }

    /// List of claims to use as the group name.
    pub fn groups(&self) -> &[String] {
        self.groups.as_deref().unwrap_or_default()
    }

    pub fn get_groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    /// List of claims to use as the display name.
    pub fn name(&self) -> &[String] {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&[String]> {
        self.name.as_deref()
    }

    /// List of claims to use as the preferred user name when provisioning a user.
    pub fn preferred_username(&self) -> &[String] {
        self.preferred_username.as_deref().unwrap_or_default()
    }

    pub fn get_preferred_username(&self) -> Option<&[String]> {
        self.preferred_username.as_deref()
    }
}

/// Builder for [`OpenIdClaims`].
#[derive(Debug, Clone, Default)]
pub struct OpenIdClaimsBuilder {
    email: Option<Vec<String>>,
    groups: Option<Vec<String>>,
    name: Option<Vec<String>>,
    preferred_username: Option<Vec<String>>,
}

impl OpenIdClaimsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// List of claims to use as the mail address.
    pub fn email<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.email = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// List of claims to use as the group name.
    pub fn groups<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// List of claims to use as the display name.
    pub fn name<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// List of claims to use as the preferred user name when provisioning a user.
    pub fn preferred_username<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_username = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl ObjectBuilder for OpenIdClaimsBuilder {
    type Object = OpenIdClaims;

    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.groups.is_none()
            && self.name.is_none()
            && self.preferred_username.is_none()
    }

    fn copy(self, object: &OpenIdClaims) -> Self {
        Self {
            email: object.email.clone(),
            groups: object.groups.clone(),
            name: object.name.clone(),
            preferred_username: object.preferred_username.clone(),
        }
    }

    fn build(&self) -> Result<OpenIdClaims, BuildError> {
        Ok(OpenIdClaims {
            email: self.email.clone(),
            groups: self.groups.clone(),
            name: self.name.clone(),
            preferred_username: self.preferred_username.clone(),
        })
    }
}
