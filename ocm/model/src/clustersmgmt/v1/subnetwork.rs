use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// AWS subnetwork object to be used while installing a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subnetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    red_hat_managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
}

impl Subnetwork {
    /// Returns a builder for this type.
    pub fn builder() -> SubnetworkBuilder {
        SubnetworkBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.cidr_block.is_none()
            && self.availability_zone.is_none()
            && self.name.is_none()
            && self.public.is_none()
            && self.red_hat_managed.is_none()
            && self.subnet_id.is_none()
            && self.vpc_id.is_none()
    }

    /// The CIDR Block of the subnet.
    pub fn cidr_block(&self) -> &str {
        self.cidr_block.as_deref().unwrap_or_default()
    }

    pub fn get_cidr_block(&self) -> Option<&str> {
        self.cidr_block.as_deref()
    }

    /// The availability zone to which the subnet is related.
    pub fn availability_zone(&self) -> &str {
        self.availability_zone.as_deref().unwrap_or_default()
    }

    pub fn get_availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// Name of the subnet according to its `Name` tag on AWS.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether or not it is a public subnet.
    pub fn public(&self) -> bool {
        self.public.unwrap_or_default()
    }

    pub fn get_public(&self) -> Option<bool> {
        self.public
    }

    /// If the resource is RH managed.
    pub fn red_hat_managed(&self) -> bool {
        self.red_hat_managed.unwrap_or_default()
    }

    pub fn get_red_hat_managed(&self) -> Option<bool> {
        self.red_hat_managed
    }

    /// The subnet ID to be used while installing a cluster.
    pub fn subnet_id(&self) -> &str {
        self.subnet_id.as_deref().unwrap_or_default()
    }

    pub fn get_subnet_id(&self) -> Option<&str> {
        self.subnet_id.as_deref()
    }

    pub fn vpc_id(&self) -> &str {
        self.vpc_id.as_deref().unwrap_or_default()
    }

    pub fn get_vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }
}

/// Builder for [`Subnetwork`].
#[derive(Debug, Clone, Default)]
pub struct SubnetworkBuilder {
    cidr_block: Option<String>,
    availability_zone: Option<String>,
    name: Option<String>,
    public: Option<bool>,
    red_hat_managed: Option<bool>,
    subnet_id: Option<String>,
    vpc_id: Option<String>,
}

impl SubnetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The CIDR Block of the subnet.
    pub fn cidr_block(mut self, value: impl Into<String>) -> Self {
        self.cidr_block = Some(value.into());
        self
    }

    /// The availability zone to which the subnet is related.
    pub fn availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    /// Name of the subnet according to its `Name` tag on AWS.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Whether or not it is a public subnet.
    pub fn public(mut self, value: bool) -> Self {
        self.public = Some(value);
        self
    }

    /// If the resource is RH managed.
    pub fn red_hat_managed(mut self, value: bool) -> Self {
        self.red_hat_managed = Some(value);
        self
    }

    /// The subnet ID to be used while installing a cluster.
    pub fn subnet_id(mut self, value: impl Into<String>) -> Self {
        self.subnet_id = Some(value.into());
        self
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }
}

impl ObjectBuilder for SubnetworkBuilder {
    type Object = Subnetwork;

    fn is_empty(&self) -> bool {
        self.cidr_block.is_none()
            && self.availability_zone.is_none()
            && self.name.is_none()
            && self.public.is_none()
            && self.red_hat_managed.is_none()
            && self.subnet_id.is_none()
            && self.vpc_id.is_none()
    }

    fn copy(self, object: &Subnetwork) -> Self {
        Self {
            cidr_block: object.cidr_block.clone(),
            availability_zone: object.availability_zone.clone(),
            name: object.name.clone(),
            public: object.public,
            red_hat_managed: object.red_hat_managed,
            subnet_id: object.subnet_id.clone(),
            vpc_id: object.vpc_id.clone(),
        }
    }

    fn build(&self) -> Result<Subnetwork, BuildError> {
        Ok(Subnetwork {
            cidr_block: self.cidr_block.clone(),
            availability_zone: self.availability_zone.clone(),
            name: self.name.clone(),
            public: self.public,
            red_hat_managed: self.red_hat_managed,
            subnet_id: self.subnet_id.clone(),
            vpc_id: self.vpc_id.clone(),
        })
    }
}
