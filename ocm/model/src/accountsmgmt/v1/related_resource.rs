use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Resource counted against a quota and its cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    byoc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
}

impl RelatedResource {
    /// Returns a builder for this type.
    pub fn builder() -> RelatedResourceBuilder {
        RelatedResourceBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.availability_zone_type.is_none()
            && self.billing_model.is_none()
            && self.byoc.is_none()
            && self.cloud_provider.is_none()
            && self.cost.is_none()
            && self.product.is_none()
            && self.resource_name.is_none()
            && self.resource_type.is_none()
    }

    pub fn availability_zone_type(&self) -> &str {
        self.availability_zone_type.as_deref().unwrap_or_default()
    }

    pub fn get_availability_zone_type(&self) -> Option<&str> {
        self.availability_zone_type.as_deref()
    }

    pub fn billing_model(&self) -> &str {
        self.billing_model.as_deref().unwrap_or_default()
    }

    pub fn get_billing_model(&self) -> Option<&str> {
        self.billing_model.as_deref()
    }

    pub fn byoc(&self) -> &str {
        self.byoc.as_deref().unwrap_or_default()
    }

    pub fn get_byoc(&self) -> Option<&str> {
        self.byoc.as_deref()
    }

    pub fn cloud_provider(&self) -> &str {
        self.cloud_provider.as_deref().unwrap_or_default()
    }

    pub fn get_cloud_provider(&self) -> Option<&str> {
        self.cloud_provider.as_deref()
    }

    /// Quota units consumed by one instance of the resource.
    pub fn cost(&self) -> i32 {
        self.cost.unwrap_or_default()
    }

    pub fn get_cost(&self) -> Option<i32> {
        self.cost
    }

    pub fn product(&self) -> &str {
        self.product.as_deref().unwrap_or_default()
    }

    pub fn get_product(&self) -> Option<&str> {
        self.product.as_deref()
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
}

/// Builder for [`RelatedResource`].
#[derive(Debug, Clone, Default)]
pub struct RelatedResourceBuilder {
    availability_zone_type: Option<String>,
    billing_model: Option<String>,
    byoc: Option<String>,
    cloud_provider: Option<String>,
    cost: Option<i32>,
    product: Option<String>,
    resource_name: Option<String>,
    resource_type: Option<String>,
}

impl RelatedResourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn availability_zone_type(mut self, value: impl Into<String>) -> Self {
        self.availability_zone_type = Some(value.into());
        self
    }

    pub fn billing_model(mut self, value: impl Into<String>) -> Self {
        self.billing_model = Some(value.into());
        self
    }

    pub fn byoc(mut self, value: impl Into<String>) -> Self {
        self.byoc = Some(value.into());
        self
    }

    pub fn cloud_provider(mut self, value: impl Into<String>) -> Self {
        self.cloud_provider = Some(value.into());
        self
    }

    /// Quota units consumed by one instance of the resource.
    pub fn cost(mut self, value: i32) -> Self {
        self.cost = Some(value);
        self
    }

    pub fn product(mut self, value: impl Into<String>) -> Self {
        self.product = Some(value.into());
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
}

impl ObjectBuilder for RelatedResourceBuilder {
    type Object = RelatedResource;

    fn is_empty(&self) -> bool {
        self.availability_zone_type.is_none()
            && self.billing_model.is_none()
            && self.byoc.is_none()
            && self.cloud_provider.is_none()
            && self.cost.is_none()
            && self.product.is_none()
            && self.resource_name.is_none()
            && self.resource_type.is_none()
    }

    fn copy(self, object: &RelatedResource) -> Self {
        Self {
            availability_zone_type: object.availability_zone_type.clone(),
            billing_model: object.billing_model.clone(),
            byoc: object.byoc.clone(),
            cloud_provider: object.cloud_provider.clone(),
            cost: object.cost,
            product: object.product.clone(),
            resource_name: object.resource_name.clone(),
            resource_type: object.resource_type.clone(),
        }
    }

    fn build(&self) -> Result<RelatedResource, BuildError> {
        Ok(RelatedResource {
            availability_zone_type: self.availability_zone_type.clone(),
            billing_model: self.billing_model.clone(),
            byoc: self.byoc.clone(),
            cloud_provider: self.cloud_provider.clone(),
            cost: self.cost,
            product: self.product.clone(),
            resource_name: self.resource_name.clone(),
            resource_type: self.resource_type.clone(),
        })
    }
}
