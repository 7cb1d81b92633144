use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Contains the necessary attributes to allow each operator to access the necessary
/// AWS resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorIamRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_account: Option<String>,
}

impl OperatorIamRole {
    /// Returns a builder for this type.
    pub fn builder() -> OperatorIamRoleBuilder {
        OperatorIamRoleBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.namespace.is_none()
            && self.role_arn.is_none()
            && self.service_account.is_none()
    }

    /// Randomly-generated ID to identify the operator role.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Name of the credentials secret used to access cloud resources.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Namespace where the credentials secret lives in the cluster.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }

    pub fn get_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Role to assume when accessing AWS resources.
    pub fn role_arn(&self) -> &str {
        self.role_arn.as_deref().unwrap_or_default()
    }

    pub fn get_role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    /// Service account name to use when authenticating.
    pub fn service_account(&self) -> &str {
        self.service_account.as_deref().unwrap_or_default()
    }

    pub fn get_service_account(&self) -> Option<&str> {
        self.service_account.as_deref()
    }
}

/// Builder for [`OperatorIamRole`].
#[derive(Debug, Clone, Default)]
pub struct OperatorIamRoleBuilder {
    id: Option<String>,
    name: Option<String>,
    namespace: Option<String>,
    role_arn: Option<String>,
    service_account: Option<String>,
}

impl OperatorIamRoleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Randomly-generated ID to identify the operator role.
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    /// Name of the credentials secret used to access cloud resources.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Namespace where the credentials secret lives in the cluster.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = Some(value.into());
        self
    }

    /// Role to assume when accessing AWS resources.
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }

    /// Service account name to use when authenticating.
    pub fn service_account(mut self, value: impl Into<String>) -> Self {
        self.service_account = Some(value.into());
        self
    }
}

impl ObjectBuilder for OperatorIamRoleBuilder {
    type Object = OperatorIamRole;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.namespace.is_none()
            && self.role_arn.is_none()
            && self.service_account.is_none()
    }

    fn copy(self, object: &OperatorIamRole) -> Self {
        Self {
            id: object.id.clone(),
            name: object.name.clone(),
            namespace: object.namespace.clone(),
            role_arn: object.role_arn.clone(),
            service_account: object.service_account.clone(),
        }
    }

    fn build(&self) -> Result<OperatorIamRole, BuildError> {
        Ok(OperatorIamRole {
            id: self.id.clone(),
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            role_arn: self.role_arn.clone(),
            service_account: self.service_account.clone(),
        })
    }
}
