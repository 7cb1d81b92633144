use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Network configuration of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    #[serde(skip_serializing_if = "Option::is_none")]
    host_prefix: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    machine_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pod_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_cidr: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<String>,
}

impl Network {
    /// Returns a builder for this type.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.host_prefix.is_none()
            && self.machine_cidr.is_none()
            && self.pod_cidr.is_none()
            && self.service_cidr.is_none()
            && self.type_.is_none()
    }

    /// Network host prefix which is defaulted to `23` if not specified.
    pub fn host_prefix(&self) -> i32 {
        self.host_prefix.unwrap_or_default()
    }

    pub fn get_host_prefix(&self) -> Option<i32> {
        self.host_prefix
    }

    /// IP address block from which to assign machine IP addresses, for example
    /// `10.0.0.0/16`.
    pub fn machine_cidr(&self) -> &str {
        self.machine_cidr.as_deref().unwrap_or_default()
    }

    pub fn get_machine_cidr(&self) -> Option<&str> {
        self.machine_cidr.as_deref()
    }

    /// IP address block from which to assign pod IP addresses, for example
    /// `10.128.0.0/14`.
    pub fn pod_cidr(&self) -> &str {
        self.pod_cidr.as_deref().unwrap_or_default()
    }

    pub fn get_pod_cidr(&self) -> Option<&str> {
        self.pod_cidr.as_deref()
    }

    /// IP address block from which to assign service IP addresses, for example
    /// `172.30.0.0/16`.
    pub fn service_cidr(&self) -> &str {
        self.service_cidr.as_deref().unwrap_or_default()
    }

    pub fn get_service_cidr(&self) -> Option<&str> {
        self.service_cidr.as_deref()
    }

    /// The main controller responsible for rendering the core networking
    /// components.
    pub fn type_(&self) -> &str {
        self.type_.as_deref().unwrap_or_default()
    }

    pub fn get_type(&self) -> Option<&str> {
        self.type_.as_deref()
    }
}

/// Builder for [`Network`].
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    host_prefix: Option<i32>,
    machine_cidr: Option<String>,
    pod_cidr: Option<String>,
    service_cidr: Option<String>,
    type_: Option<String>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Network host prefix which is defaulted to `23` if not specified.
    pub fn host_prefix(mut self, value: i32) -> Self {
        self.host_prefix = Some(value);
        self
    }

    /// IP address block from which to assign machine IP addresses, for example
    /// `10.0.0.0/16`.
    pub fn machine_cidr(mut self, value: impl Into<String>) -> Self {
        self.machine_cidr = Some(value.into());
        self
    }

    /// IP address block from which to assign pod IP addresses, for example
    /// `10.128.0.0/14`.
    pub fn pod_cidr(mut self, value: impl Into<String>) -> Self {
        self.pod_cidr = Some(value.into());
        self
    }

    /// IP address block from which to assign service IP addresses, for example
    /// `172.30.0.0/16`.
    pub fn service_cidr(mut self, value: impl Into<String>) -> Self {
        self.service_cidr = Some(value.into());
        self
    }

    /// The main controller responsible for rendering the core networking
    /// components.
    pub fn type_(mut self, value: impl Into<String>) -> Self {
        self.type_ = Some(value.into());
        self
    }
}

impl ObjectBuilder for NetworkBuilder {
    type Object = Network;

    fn is_empty(&self) -> bool {
        self.host_prefix.is_none()
            && self.machine_cidr.is_none()
            && self.pod_cidr.is_none()
            && self.service_cidr.is_none()
            && self.type_.is_none()
    }

    fn copy(self, object: &Network) -> Self {
        Self {
            host_prefix: object.host_prefix,
            machine_cidr: object.machine_cidr.clone(),
            pod_cidr: object.pod_cidr.clone(),
            service_cidr: object.service_cidr.clone(),
            type_: object.type_.clone(),
        }
    }

    fn build(&self) -> Result<Network, BuildError> {
        Ok(Network {
            host_prefix: self.host_prefix,
            machine_cidr: self.machine_cidr.clone(),
            pod_cidr: self.pod_cidr.clone(),
            service_cidr: self.service_cidr.clone(),
            type_: self.type_.clone(),
        })
    }
}
