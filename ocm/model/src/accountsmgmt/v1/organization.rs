use chrono::{DateTime, Utc};
use ocm_model_core::{BuildError, KindTag, List, ListBuilder, ObjectBuilder, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    kind: KindTag<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ebs_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Resource for Organization {
    const KIND: &'static str = "Organization";
    const LINK_KIND: &'static str = "OrganizationLink";
    const NIL_KIND: &'static str = "OrganizationNil";
    const LIST_KIND: &'static str = "OrganizationList";
    const LIST_LINK_KIND: &'static str = "OrganizationListLink";
    const LIST_NIL_KIND: &'static str = "OrganizationListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl Organization {
    /// Returns a builder for this type.
    pub fn builder() -> OrganizationBuilder {
        OrganizationBuilder::new()
    }

    /// Returns `OrganizationLink` for links and `Organization` otherwise.
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
            && self.created_at.is_none()
            && self.ebs_account_id.is_none()
            && self.external_id.is_none()
            && self.name.is_none()
            && self.updated_at.is_none()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_default()
    }

    pub fn get_created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn ebs_account_id(&self) -> &str {
        self.ebs_account_id.as_deref().unwrap_or_default()
    }

    pub fn get_ebs_account_id(&self) -> Option<&str> {
        self.ebs_account_id.as_deref()
    }

    pub fn external_id(&self) -> &str {
        self.external_id.as_deref().unwrap_or_default()
    }

    pub fn get_external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or_default()
    }

    pub fn get_updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Builder for [`Organization`].
#[derive(Debug, Clone, Default)]
pub struct OrganizationBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    created_at: Option<DateTime<Utc>>,
    ebs_account_id: Option<String>,
    external_id: Option<String>,
    name: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl OrganizationBuilder {
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

    pub fn created_at(mut self, value: DateTime<Utc>) -> Self {
        self.created_at = Some(value);
        self
    }

    pub fn ebs_account_id(mut self, value: impl Into<String>) -> Self {
        self.ebs_account_id = Some(value.into());
        self
    }

    pub fn external_id(mut self, value: impl Into<String>) -> Self {
        self.external_id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn updated_at(mut self, value: DateTime<Utc>) -> Self {
        self.updated_at = Some(value);
        self
    }
}

impl ObjectBuilder for OrganizationBuilder {
    type Object = Organization;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.created_at.is_none()
            && self.ebs_account_id.is_none()
            && self.external_id.is_none()
            && self.name.is_none()
            && self.updated_at.is_none()
    }

    fn copy(self, object: &Organization) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            created_at: object.created_at,
            ebs_account_id: object.ebs_account_id.clone(),
            external_id: object.external_id.clone(),
            name: object.name.clone(),
            updated_at: object.updated_at,
        }
    }

    fn build(&self) -> Result<Organization, BuildError> {
        Ok(Organization {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            created_at: self.created_at,
            ebs_account_id: self.ebs_account_id.clone(),
            external_id: self.external_id.clone(),
            name: self.name.clone(),
            updated_at: self.updated_at,
        })
    }
}

/// A list of [`Organization`] objects.
pub type OrganizationList = List<Organization>;

/// Builder for [`OrganizationList`].
pub type OrganizationListBuilder = ListBuilder<OrganizationBuilder>;
