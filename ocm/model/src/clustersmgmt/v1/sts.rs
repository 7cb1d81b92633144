use ocm_model_core::{
    builder::{build_all, build_nested, copy_all, copy_nested},
    BuildError,
    ObjectBuilder,
};
use serde::{Deserialize, Serialize};

use super::instance_iam_roles::{InstanceIamRoles, InstanceIamRolesBuilder};
use super::operator_iam_role::{OperatorIamRole, OperatorIamRoleBuilder};

/// Contains the necessary attributes to support role-based authentication on AWS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sts {
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_iam_roles: Option<InstanceIamRoles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    managed_policies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oidc_endpoint_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator_iam_roles: Option<Vec<OperatorIamRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator_role_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    support_role_arn: Option<String>,
}

impl Sts {
    /// Returns a builder for this type.
    pub fn builder() -> StsBuilder {
        StsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.auto_mode.is_none()
            && self.enabled.is_none()
            && self.external_id.is_none()
            && self.instance_iam_roles.is_none()
            && self.managed_policies.is_none()
            && self.oidc_endpoint_url.is_none()
            && self.operator_iam_roles.is_none()
            && self.operator_role_prefix.is_none()
            && self.role_arn.is_none()
            && self.support_role_arn.is_none()
    }

    /// If true, cluster account and operator roles are created by the service.
    pub fn auto_mode(&self) -> bool {
        self.auto_mode.unwrap_or_default()
    }

    pub fn get_auto_mode(&self) -> Option<bool> {
        self.auto_mode
    }

    /// If STS is enabled or not.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Optional unique identifier when assuming role in another account.
    pub fn external_id(&self) -> &str {
        self.external_id.as_deref().unwrap_or_default()
    }

    pub fn get_external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// Instance IAM roles to use for the instance profiles of the master and worker
    /// instances.
    pub fn instance_iam_roles(&self) -> Option<&InstanceIamRoles> {
        self.instance_iam_roles.as_ref()
    }

    pub fn get_instance_iam_roles(&self) -> Option<&InstanceIamRoles> {
        self.instance_iam_roles.as_ref()
    }

    /// If true, cluster uses managed policies instead of customer-managed ones.
    pub fn managed_policies(&self) -> bool {
        self.managed_policies.unwrap_or_default()
    }

    pub fn get_managed_policies(&self) -> Option<bool> {
        self.managed_policies
    }

    /// URL of the OpenID Connect provider used for the service accounts of the
    /// cluster.
    pub fn oidc_endpoint_url(&self) -> &str {
        self.oidc_endpoint_url.as_deref().unwrap_or_default()
    }

    pub fn get_oidc_endpoint_url(&self) -> Option<&str> {
        self.oidc_endpoint_url.as_deref()
    }

    /// List of roles used by the cluster operators.
    pub fn operator_iam_roles(&self) -> &[OperatorIamRole] {
        self.operator_iam_roles.as_deref().unwrap_or_default()
    }

    pub fn get_operator_iam_roles(&self) -> Option<&[OperatorIamRole]> {
        self.operator_iam_roles.as_deref()
    }

    /// Optional user provided prefix for operator roles.
    pub fn operator_role_prefix(&self) -> &str {
        self.operator_role_prefix.as_deref().unwrap_or_default()
    }

    pub fn get_operator_role_prefix(&self) -> Option<&str> {
        self.operator_role_prefix.as_deref()
    }

    /// ARN of the AWS role to assume when installing the cluster.
    pub fn role_arn(&self) -> &str {
        self.role_arn.as_deref().unwrap_or_default()
    }

    pub fn get_role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    /// ARN of the AWS role used by SREs to access the cluster AWS account for
    /// support.
    pub fn support_role_arn(&self) -> &str {
        self.support_role_arn.as_deref().unwrap_or_default()
    }

    pub fn get_support_role_arn(&self) -> Option<&str> {
        self.support_role_arn.as_deref()
    }
}

/// Builder for [`Sts`].
#[derive(Debug, Clone, Default)]
pub struct StsBuilder {
    auto_mode: Option<bool>,
    enabled: Option<bool>,
    external_id: Option<String>,
    instance_iam_roles: Option<InstanceIamRolesBuilder>,
    managed_policies: Option<bool>,
    oidc_endpoint_url: Option<String>,
    operator_iam_roles: Option<Vec<OperatorIamRoleBuilder>>,
    operator_role_prefix: Option<String>,
    role_arn: Option<String>,
    support_role_arn: Option<String>,
}

impl StsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// If true, cluster account and operator roles are created by the service.
    pub fn auto_mode(mut self, value: bool) -> Self {
        self.auto_mode = Some(value);
        self
    }

    /// If STS is enabled or not.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }

    /// Optional unique identifier when assuming role in another account.
    pub fn external_id(mut self, value: impl Into<String>) -> Self {
        self.external_id = Some(value.into());
        self
    }

    /// Instance IAM roles to use for the instance profiles of the master and worker
    /// instances.
    pub fn instance_iam_roles(mut self, value: InstanceIamRolesBuilder) -> Self {
        self.instance_iam_roles = Some(value);
        self
    }

    /// If true, cluster uses managed policies instead of customer-managed ones.
    pub fn managed_policies(mut self, value: bool) -> Self {
        self.managed_policies = Some(value);
        self
    }

    /// URL of the OpenID Connect provider used for the service accounts of the
    /// cluster.
    pub fn oidc_endpoint_url(mut self, value: impl Into<String>) -> Self {
        self.oidc_endpoint_url = Some(value.into());
        self
    }

    /// List of roles used by the cluster operators.
    pub fn operator_iam_roles<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = OperatorIamRoleBuilder>,
    {
        self.operator_iam_roles = Some(values.into_iter().collect());
        self
    }

    /// Optional user provided prefix for operator roles.
    pub fn operator_role_prefix(mut self, value: impl Into<String>) -> Self {
        self.operator_role_prefix = Some(value.into());
        self
    }

    /// ARN of the AWS role to assume when installing the cluster.
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }

    /// ARN of the AWS role used by SREs to access the cluster AWS account for
    /// support.
    pub fn support_role_arn(mut self, value: impl Into<String>) -> Self {
        self.support_role_arn = Some(value.into());
        self
    }
}

impl ObjectBuilder for StsBuilder {
    type Object = Sts;

    fn is_empty(&self) -> bool {
        self.auto_mode.is_none()
            && self.enabled.is_none()
            && self.external_id.is_none()
            && self.instance_iam_roles.is_none()
            && self.managed_policies.is_none()
            && self.oidc_endpoint_url.is_none()
            && self.operator_iam_roles.is_none()
            && self.operator_role_prefix.is_none()
            && self.role_arn.is_none()
            && self.support_role_arn.is_none()
    }

    fn copy(self, object: &Sts) -> Self {
        Self {
            auto_mode: object.auto_mode,
            enabled: object.enabled,
            external_id: object.external_id.clone(),
            instance_iam_roles: copy_nested(&object.instance_iam_roles),
            managed_policies: object.managed_policies,
            oidc_endpoint_url: object.oidc_endpoint_url.clone(),
            operator_iam_roles: copy_all(&object.operator_iam_roles),
            operator_role_prefix: object.operator_role_prefix.clone(),
            role_arn: object.role_arn.clone(),
            support_role_arn: object.support_role_arn.clone(),
        }
    }

    fn build(&self) -> Result<Sts, BuildError> {
        Ok(Sts {
            auto_mode: self.auto_mode,
            enabled: self.enabled,
            external_id: self.external_id.clone(),
            instance_iam_roles: build_nested(&self.instance_iam_roles)?,
            managed_policies: self.managed_policies,
            oidc_endpoint_url: self.oidc_endpoint_url.clone(),
            operator_iam_roles: build_all(&self.operator_iam_roles)?,
            operator_role_prefix: self.operator_role_prefix.clone(),
            role_arn: self.role_arn.clone(),
            support_role_arn: self.support_role_arn.clone(),
        })
    }
}
