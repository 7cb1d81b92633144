use ocm_model_core::{builder::{build_all, copy_all}, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::related_resource::{RelatedResource, RelatedResourceBuilder};

/// Quota consumption of an organization for one quota identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consumed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quota_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    related_resources: Option<Vec<RelatedResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl QuotaCost {
    /// Returns a builder for this type.
    pub fn builder() -> QuotaCostBuilder {
        QuotaCostBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_none()
            && self.consumed.is_none()
            && self.organization_id.is_none()
            && self.quota_id.is_none()
            && self.related_resources.is_none()
            && self.version.is_none()
    }

    pub fn allowed(&self) -> i32 {
        self.allowed.unwrap_or_default()
    }

    pub fn get_allowed(&self) -> Option<i32> {
        self.allowed
    }

    pub fn consumed(&self) -> i32 {
        self.consumed.unwrap_or_default()
    }

    pub fn get_consumed(&self) -> Option<i32> {
        self.consumed
    }

    pub fn organization_id(&self) -> &str {
        self.organization_id.as_deref().unwrap_or_default()
    }

    pub fn get_organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    pub fn quota_id(&self) -> &str {
        self.quota_id.as_deref().unwrap_or_default()
    }

    pub fn get_quota_id(&self) -> Option<&str> {
        self.quota_id.as_deref()
    }

    /// Resources whose consumption is counted against the quota.
    pub fn related_resources(&self) -> &[RelatedResource] {
        self.related_resources.as_deref().unwrap_or_default()
    }

    pub fn get_related_resources(&self) -> Option<&[RelatedResource]> {
        self.related_resources.as_deref()
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    pub fn get_version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Builder for [`QuotaCost`].
#[derive(Debug, Clone, Default)]
pub struct QuotaCostBuilder {
    allowed: Option<i32>,
    consumed: Option<i32>,
    organization_id: Option<String>,
    quota_id: Option<String>,
    related_resources: Option<Vec<RelatedResourceBuilder>>,
    version: Option<String>,
}

impl QuotaCostBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed(mut self, value: i32) -> Self {
        self.allowed = Some(value);
        self
    }

    pub fn consumed(mut self, value: i32) -> Self {
        self.consumed = Some(value);
        self
    }

    pub fn organization_id(mut self, value: impl Into<String>) -> Self {
        self.organization_id = Some(value.into());
        self
    }

    pub fn quota_id(mut self, value: impl Into<String>) -> Self {
        self.quota_id = Some(value.into());
        self
    }

    /// Resources whose consumption is counted against the quota.
    pub fn related_resources<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = RelatedResourceBuilder>,
    {
        self.related_resources = Some(values.into_iter().collect());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }
}

impl ObjectBuilder for QuotaCostBuilder {
    type Object = QuotaCost;

    fn is_empty(&self) -> bool {
        self.allowed.is_none()
            && self.consumed.is_none()
            && self.organization_id.is_none()
            && self.quota_id.is_none()
            && self.related_resources.is_none()
            && self.version.is_none()
    }

    fn copy(self, object: &QuotaCost) -> Self {
        Self {
            allowed: object.allowed,
            consumed: object.consumed,
            organization_id: object.organization_id.clone(),
            quota_id: object.quota_id.clone(),
            related_resources: copy_all(&object.related_resources),
            version: object.version.clone(),
        }
    }

    fn build(&self) -> Result<QuotaCost, BuildError> {
        Ok(QuotaCost {
            allowed: self.allowed,
            consumed: self.consumed,
            organization_id: self.organization_id.clone(),
            quota_id: self.quota_id.clone(),
            related_resources: build_all(&self.related_resources)?,
            version: self.version.clone(),
        })
    }
}
