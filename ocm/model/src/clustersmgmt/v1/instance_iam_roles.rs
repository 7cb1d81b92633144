use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Instance IAM roles to use for the instance profiles of the master and worker
/// instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceIamRoles {
    #[serde(skip_serializing_if = "Option::is_none")]
    master_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    worker_role_arn: Option<String>,
}

impl InstanceIamRoles {
    /// Returns a builder for this type.
    pub fn builder() -> InstanceIamRolesBuilder {
        InstanceIamRolesBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.master_role_arn.is_none() && self.worker_role_arn.is_none()
    }

    pub fn master_role_arn(&self) -> &str {
        self.master_role_arn.as_deref().unwrap_or_default()
    }

    pub fn get_master_role_arn(&self) -> Option<&str> {
        self.master_role_arn.as_deref()
    }

    pub fn worker_role_arn(&self) -> &str {
        self.worker_role_arn.as_deref().unwrap_or_default()
    }

    pub fn get_worker_role_arn(&self) -> Option<&str> {
        self.worker_role_arn.as_deref()
    }
}

/// Builder for [`InstanceIamRoles`].
#[derive(Debug, Clone, Default)]
pub struct InstanceIamRolesBuilder {
    master_role_arn: Option<String>,
    worker_role_arn: Option<String>,
}

impl InstanceIamRolesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master_role_arn(mut self, value: impl Into<String>) -> Self {
        self.master_role_arn = Some(value.into());
        self
    }

    pub fn worker_role_arn(mut self, value: impl Into<String>) -> Self {
        self.worker_role_arn = Some(value.into());
        self
    }
}

impl ObjectBuilder for InstanceIamRolesBuilder {
    type Object = InstanceIamRoles;

    fn is_empty(&self) -> bool {
        self.master_role_arn.is_none() && self.worker_role_arn.is_none()
    }

    fn copy(self, object: &InstanceIamRoles) -> Self {
        Self {
            master_role_arn: object.master_role_arn.clone(),
            worker_role_arn: object.worker_role_arn.clone(),
        }
    }

    fn build(&self) -> Result<InstanceIamRoles, BuildError> {
        Ok(InstanceIamRoles {
            master_role_arn: self.master_role_arn.clone(),
            worker_role_arn: self.worker_role_arn.clone(),
        })
    }
}
