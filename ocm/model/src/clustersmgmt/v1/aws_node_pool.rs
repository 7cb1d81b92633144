use std::collections::BTreeMap;

use ocm_model_core::{empty_map, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Representation of aws node pool specific parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsNodePool {
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl AwsNodePool {
    /// Returns a builder for this type.
    pub fn builder() -> AwsNodePoolBuilder {
        AwsNodePoolBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.additional_security_group_ids.is_none()
            && self.instance_profile.is_none()
            && self.instance_type.is_none()
            && self.tags.is_none()
    }

    pub fn additional_security_group_ids(&self) -> &[String] {
        self.additional_security_group_ids.as_deref().unwrap_or_default()
    }

    pub fn get_additional_security_group_ids(&self) -> Option<&[String]> {
        self.additional_security_group_ids.as_deref()
    }

    /// InstanceProfile is the AWS EC2 instance profile, which is a container for an
    /// IAM role that the EC2 instance uses.
    pub fn instance_profile(&self) -> &str {
        self.instance_profile.as_deref().unwrap_or_default()
    }

    pub fn get_instance_profile(&self) -> Option<&str> {
        self.instance_profile.as_deref()
    }

    /// InstanceType is an ec2 instance type for node instances (e.g. m5.large).
    pub fn instance_type(&self) -> &str {
        self.instance_type.as_deref().unwrap_or_default()
    }

    pub fn get_instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        self.tags.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }
}

/// Builder for [`AwsNodePool`].
#[derive(Debug, Clone, Default)]
pub struct AwsNodePoolBuilder {
    additional_security_group_ids: Option<Vec<String>>,
    instance_profile: Option<String>,
    instance_type: Option<String>,
    tags: Option<BTreeMap<String, String>>,
}

impl AwsNodePoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn additional_security_group_ids<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_security_group_ids = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// InstanceProfile is the AWS EC2 instance profile, which is a container for an
    /// IAM role that the EC2 instance uses.
    pub fn instance_profile(mut self, value: impl Into<String>) -> Self {
        self.instance_profile = Some(value.into());
        self
    }

    /// InstanceType is an ec2 instance type for node instances (e.g. m5.large).
    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.instance_type = Some(value.into());
        self
    }

    pub fn tags<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }
}

impl ObjectBuilder for AwsNodePoolBuilder {
    type Object = AwsNodePool;

    fn is_empty(&self) -> bool {
        self.additional_security_group_ids.is_none()
            && self.instance_profile.is_none()
            && self.instance_type.is_none()
            && self.tags.is_none()
    }

    fn copy(self, object: &AwsNodePool) -> Self {
        Self {
            additional_security_group_ids: object.additional_security_group_ids.clone(),
            instance_profile: object.instance_profile.clone(),
            instance_type: object.instance_type.clone(),
            tags: object.tags.clone(),
        }
    }

    fn build(&self) -> Result<AwsNodePool, BuildError> {
        Ok(AwsNodePool {
            additional_security_group_ids: self.additional_security_group_ids.clone(),
            instance_profile: self.instance_profile.clone(),
            instance_type: self.instance_type.clone(),
            tags: self.tags.clone(),
        })
    }
}
