use ocm_model_core::{builder::{build_all, copy_all}, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::subnetwork::{Subnetwork, SubnetworkBuilder};

/// Description of a cloud provider virtual private cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudVpc {
    #[serde(skip_serializing_if = "Option::is_none")]
    aws_subnets: Option<Vec<Subnetwork>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    red_hat_managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnets: Option<Vec<String>>,
}

impl CloudVpc {
    /// Returns a builder for this type.
    pub fn builder() -> CloudVpcBuilder {
        CloudVpcBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.aws_subnets.is_none()
            && self.cidr_block.is_none()
            && self.id.is_none()
            && self.name.is_none()
            && self.red_hat_managed.is_none()
            && self.subnets.is_none()
    }

    /// List of AWS subnetworks with details.
    pub fn aws_subnets(&self) -> &[Subnetwork] {
        self.aws_subnets.as_deref().unwrap_or_default()
    }

    pub fn get_aws_subnets(&self) -> Option<&[Subnetwork]> {
        self.aws_subnets.as_deref()
    }

    /// CIDR block of the virtual private cloud.
    pub fn cidr_block(&self) -> &str {
        self.cidr_block.as_deref().unwrap_or_default()
    }

    pub fn get_cidr_block(&self) -> Option<&str> {
        self.cidr_block.as_deref()
    }

    /// ID of virtual private cloud.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Name of virtual private cloud according to its `Name` tag on AWS.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// If the resource is RH managed.
    pub fn red_hat_managed(&self) -> bool {
        self.red_hat_managed.unwrap_or_default()
    }

    pub fn get_red_hat_managed(&self) -> Option<bool> {
        self.red_hat_managed
    }

    /// List of subnets used by the virtual private cloud.
    pub fn subnets(&self) -> &[String] {
        self.subnets.as_deref().unwrap_or_default()
    }

    pub fn get_subnets(&self) -> Option<&[String]> {
        self.subnets.as_deref()
    }
}

/// Builder for [`CloudVpc`].
#[derive(Debug, Clone, Default)]
pub struct CloudVpcBuilder {
    aws_subnets: Option<Vec<SubnetworkBuilder>>,
    cidr_block: Option<String>,
    id: Option<String>,
    name: Option<String>,
    red_hat_managed: Option<bool>,
    subnets: Option<Vec<String>>,
}

impl CloudVpcBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// List of AWS subnetworks with details.
    pub fn aws_subnets<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = SubnetworkBuilder>,
    {
        self.aws_subnets = Some(values.into_iter().collect());
        self
    }

    /// CIDR block of the virtual private cloud.
    pub fn cidr_block(mut self, value: impl Into<String>) -> Self {
        self.cidr_block = Some(value.into());
        self
    }

    /// ID of virtual private cloud.
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    /// Name of virtual private cloud according to its `Name` tag on AWS.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// If the resource is RH managed.
    pub fn red_hat_managed(mut self, value: bool) -> Self {
        self.red_hat_managed = Some(value);
        self
    }

    /// List of subnets used by the virtual private cloud.
    pub fn subnets<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl ObjectBuilder for CloudVpcBuilder {
    type Object = CloudVpc;

    fn is_empty(&self) -> bool {
        self.aws_subnets.is_none()
            && self.cidr_block.is_none()
            && self.id.is_none()
            && self.name.is_none()
            && self.red_hat_managed.is_none()
            && self.subnets.is_none()
    }

    fn copy(self, object: &CloudVpc) -> Self {
        Self {
            aws_subnets: copy_all(&object.aws_subnets),
            cidr_block: object.cidr_block.clone(),
            id: object.id.clone(),
            name: object.name.clone(),
            red_hat_managed: object.red_hat_managed,
            subnets: object.subnets.clone(),
        }
    }

    fn build(&self) -> Result<CloudVpc, BuildError> {
        Ok(CloudVpc {
            aws_subnets: build_all(&self.aws_subnets)?,
            cidr_block: self.cidr_block.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
            red_hat_managed: self.red_hat_managed,
            subnets: self.subnets.clone(),
        })
    }
}
