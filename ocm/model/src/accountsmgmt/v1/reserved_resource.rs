use chrono::{DateTime, Utc};
use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::enums::BillingModel;

/// A quota reservation held by a cluster or add-on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_marketplace_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_model: Option<BillingModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    byoc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl ReservedResource {
    /// Returns a builder for this type.
    pub fn builder() -> ReservedResourceBuilder {
        ReservedResourceBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.availability_zone_type.is_none()
            && self.billing_marketplace_account.is_none()
            && self.billing_model.is_none()
            && self.byoc.is_none()
            && self.count.is_none()
            && self.created_at.is_none()
            && self.resource_name.is_none()
            && self.resource_type.is_none()
            && self.scope.is_none()
            && self.updated_at.is_none()
    }

    pub fn availability_zone_type(&self) -> &str {
        self.availability_zone_type.as_deref().unwrap_or_default()
    }

    pub fn get_availability_zone_type(&self) -> Option<&str> {
        self.availability_zone_type.as_deref()
    }

    /// Marketplace account the reservation is billed to.
    pub fn billing_marketplace_account(&self) -> &str {
        self.billing_marketplace_account.as_deref().unwrap_or_default()
    }

    pub fn get_billing_marketplace_account(&self) -> Option<&str> {
        self.billing_marketplace_account.as_deref()
    }

    pub fn billing_model(&self) -> BillingModel {
        self.billing_model.clone().unwrap_or_default()
    }

    pub fn get_billing_model(&self) -> Option<&BillingModel> {
        self.billing_model.as_ref()
    }

    /// Whether the reservation is for a customer provided cloud account.
    pub fn byoc(&self) -> bool {
        self.byoc.unwrap_or_default()
    }

    pub fn get_byoc(&self) -> Option<bool> {
        self.byoc
    }

    pub fn count(&self) -> i32 {
        self.count.unwrap_or_default()
    }

    pub fn get_count(&self) -> Option<i32> {
        self.count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_default()
    }

    pub fn get_created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn resource_name(&self) -> &str {
        self.resource_name.as_deref().unwrap_or_default()
    }

    pub fn get_resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn resource_type(&self) -> &str {
        self.resource_type.as_deref().unwrap_or_default()
    }

    pub fn get_resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or_default()
    }

    pub fn get_scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or_default()
    }

    pub fn get_updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Builder for [`ReservedResource`].
#[derive(Debug, Clone, Default)]
pub struct ReservedResourceBuilder {
    availability_zone_type: Option<String>,
    billing_marketplace_account: Option<String>,
    billing_model: Option<BillingModel>,
    byoc: Option<bool>,
    count: Option<i32>,
    created_at: Option<DateTime<Utc>>,
    resource_name: Option<String>,
    resource_type: Option<String>,
    scope: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl ReservedResourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn availability_zone_type(mut self, value: impl Into<String>) -> Self {
        self.availability_zone_type = Some(value.into());
        self
    }

    /// Marketplace account the reservation is billed to.
    pub fn billing_marketplace_account(mut self, value: impl Into<String>) -> Self {
        self.billing_marketplace_account = Some(value.into());
        self
    }

    pub fn billing_model(mut self, value: impl Into<BillingModel>) -> Self {
        self.billing_model = Some(value.into());
        self
    }

    /// Whether the reservation is for a customer provided cloud account.
    pub fn byoc(mut self, value: bool) -> Self {
        self.byoc = Some(value);
        self
    }

    pub fn count(mut self, value: i32) -> Self {
        self.count = Some(value);
        self
    }

    pub fn created_at(mut self, value: DateTime<Utc>) -> Self {
        self.created_at = Some(value);
        self
    }

    pub fn resource_name(mut self, value: impl Into<String>) -> Self {
        self.resource_name = Some(value.into());
        self
    }

    pub fn resource_type(mut self, value: impl Into<String>) -> Self {
        self.resource_type = Some(value.into());
        self
    }

    pub fn scope(mut self, value: impl Into<String>) -> Self {
        self.scope = Some(value.into());
        self
    }

    pub fn updated_at(mut self, value: DateTime<Utc>) -> Self {
        self.updated_at = Some(value);
        self
    }
}

impl ObjectBuilder for ReservedResourceBuilder {
    type Object = ReservedResource;

    fn is_empty(&self) -> bool {
        self.availability_zone_type.is_none()
            && self.billing_marketplace_account.is_none()
            && self.billing_model.is_none()
            && self.byoc.is_none()
            && self.count.is_none()
            && self.created_at.is_none()
            && self.resource_name.is_none()
            && self.resource_type.is_none()
            && self.scope.is_none()
            && self.updated_at.is_none()
    }

    fn copy(self, object: &ReservedResource) -> Self {
        Self {
            availability_zone_type: object.availability_zone_type.clone(),
            billing_marketplace_account: object.billing_marketplace_account.clone(),
            billing_model: object.billing_model.clone(),
            byoc: object.byoc,
            count: object.count,
            created_at: object.created_at,
            resource_name: object.resource_name.clone(),
            resource_type: object.resource_type.clone(),
            scope: object.scope.clone(),
            updated_at: object.updated_at,
        }
    }

    fn build(&self) -> Result<ReservedResource, BuildError> {
        Ok(ReservedResource {
            availability_zone_type: self.availability_zone_type.clone(),
            billing_marketplace_account: self.billing_marketplace_account.clone(),
            billing_model: self.billing_model.clone(),
            byoc: self.byoc,
            count: self.count,
            created_at: self.created_at,
            resource_name: self.resource_name.clone(),
            resource_type: self.resource_type.clone(),
            scope: self.scope.clone(),
            updated_at: self.updated_at,
        })
    }
}
