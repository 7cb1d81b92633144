use std::collections::BTreeMap;

use ocm_model_core::{builder::{build_nested, copy_nested}, empty_map, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::sts::{Sts, StsBuilder};

/// _Amazon Web Services_ specific settings of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aws {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_compute_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_hosted_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_hosted_zone_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sts: Option<Sts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl Aws {
    /// Returns a builder for this type.
    pub fn builder() -> AwsBuilder {
        AwsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.access_key_id.is_none()
            && self.account_id.is_none()
            && self.additional_compute_security_group_ids.is_none()
            && self.billing_account_id.is_none()
            && self.private_hosted_zone_id.is_none()
            && self.private_hosted_zone_role_arn.is_none()
            && self.private_link.is_none()
            && self.secret_access_key.is_none()
            && self.subnet_ids.is_none()
            && self.sts.is_none()
            && self.tags.is_none()
    }

    /// AWS access key identifier.
    pub fn access_key_id(&self) -> &str {
        self.access_key_id.as_deref().unwrap_or_default()
    }

    pub fn get_access_key_id(&self) -> Option<&str> {
        self.access_key_id.as_deref()
    }

    /// AWS account identifier.
    pub fn account_id(&self) -> &str {
        self.account_id.as_deref().unwrap_or_default()
    }

    pub fn get_account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Additional AWS Security Groups to be added to default worker (compute)
    /// machine pool.
    pub fn additional_compute_security_group_ids(&self) -> &[String] {
        self.additional_compute_security_group_ids.as_deref().unwrap_or_default()
    }

    pub fn get_additional_compute_security_group_ids(&self) -> Option<&[String]> {
        self.additional_compute_security_group_ids.as_deref()
    }

    /// BillingAccountID is the account used for billing subscriptions purchased via
    /// the marketplace.
    pub fn billing_account_id(&self) -> &str {
        self.billing_account_id.as_deref().unwrap_or_default()
    }

    pub fn get_billing_account_id(&self) -> Option<&str> {
        self.billing_account_id.as_deref()
    }

    /// ID of private hosted zone.
    pub fn private_hosted_zone_id(&self) -> &str {
        self.private_hosted_zone_id.as_deref().unwrap_or_default()
    }

    pub fn get_private_hosted_zone_id(&self) -> Option<&str> {
        self.private_hosted_zone_id.as_deref()
    }

    /// Role ARN for private hosted zone.
    pub fn private_hosted_zone_role_arn(&self) -> &str {
        self.private_hosted_zone_role_arn.as_deref().unwrap_or_default()
    }

    pub fn get_private_hosted_zone_role_arn(&self) -> Option<&str> {
        self.private_hosted_zone_role_arn.as_deref()
    }

    /// Sets cluster to be inaccessible externally.
    pub fn private_link(&self) -> bool {
        self.private_link.unwrap_or_default()
    }

    pub fn get_private_link(&self) -> Option<bool> {
        self.private_link
    }

    /// AWS secret access key.
    pub fn secret_access_key(&self) -> &str {
        self.secret_access_key.as_deref().unwrap_or_default()
    }

    pub fn get_secret_access_key(&self) -> Option<&str> {
        self.secret_access_key.as_deref()
    }

    /// The subnet ids to be used when installing the cluster.
    pub fn subnet_ids(&self) -> &[String] {
        self.subnet_ids.as_deref().unwrap_or_default()
    }

    pub fn get_subnet_ids(&self) -> Option<&[String]> {
        self.subnet_ids.as_deref()
    }

    /// Contains the necessary attributes to support role-based authentication on
    /// AWS.
    pub fn sts(&self) -> Option<&Sts> {
        self.sts.as_ref()
    }

    pub fn get_sts(&self) -> Option<&Sts> {
        self.sts.as_ref()
    }

    /// Optional keys and values that the installer will add as tags to all AWS
    /// resources it creates.
    pub fn tags(&self) -> &BTreeMap<String, String> {
        self.tags.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }
}

/// Builder for [`Aws`].
#[derive(Debug, Clone, Default)]
pub struct AwsBuilder {
    access_key_id: Option<String>,
    account_id: Option<String>,
    additional_compute_security_group_ids: Option<Vec<String>>,
    billing_account_id: Option<String>,
    private_hosted_zone_id: Option<String>,
    private_hosted_zone_role_arn: Option<String>,
    private_link: Option<bool>,
    secret_access_key: Option<String>,
    subnet_ids: Option<Vec<String>>,
    sts: Option<StsBuilder>,
    tags: Option<BTreeMap<String, String>>,
}

impl AwsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// AWS access key identifier.
    pub fn access_key_id(mut self, value: impl Into<String>) -> Self {
        self.access_key_id = Some(value.into());
        self
    }

    /// AWS account identifier.
    pub fn account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }

    /// Additional AWS Security Groups to be added to default worker (compute)
    /// machine pool.
    pub fn additional_compute_security_group_ids<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_compute_security_group_ids = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// BillingAccountID is the account used for billing subscriptions purchased via
    /// the marketplace.
    pub fn billing_account_id(mut self, value: impl Into<String>) -> Self {
        self.billing_account_id = Some(value.into());
        self
    }

    /// ID of private hosted zone.
    pub fn private_hosted_zone_id(mut self, value: impl Into<String>) -> Self {
        self.private_hosted_zone_id = Some(value.into());
        self
    }

    /// Role ARN for private hosted zone.
    pub fn private_hosted_zone_role_arn(mut self, value: impl Into<String>) -> Self {
        self.private_hosted_zone_role_arn = Some(value.into());
        self
    }

    /// Sets cluster to be inaccessible externally.
    pub fn private_link(mut self, value: bool) -> Self {
        self.private_link = Some(value);
        self
    }

    /// AWS secret access key.
    pub fn secret_access_key(mut self, value: impl Into<String>) -> Self {
        self.secret_access_key = Some(value.into());
        self
    }

    /// The subnet ids to be used when installing the cluster.
    pub fn subnet_ids<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnet_ids = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Contains the necessary attributes to support role-based authentication on
    /// AWS.
    pub fn sts(mut self, value: StsBuilder) -> Self {
        self.sts = Some(value);
        self
    }

    /// Optional keys and values that the installer will add as tags to all AWS
    /// resources it creates.
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

impl ObjectBuilder for AwsBuilder {
    type Object = Aws;

    fn is_empty(&self) -> bool {
        self.access_key_id.is_none()
            && self.account_id.is_none()
            && self.additional_compute_security_group_ids.is_none()
            && self.billing_account_id.is_none()
            && self.private_hosted_zone_id.is_none()
            && self.private_hosted_zone_role_arn.is_none()
            && self.private_link.is_none()
            && self.secret_access_key.is_none()
            && self.subnet_ids.is_none()
            && self.sts.is_none()
            && self.tags.is_none()
    }

    fn copy(self, object: &Aws) -> Self {
        Self {
            access_key_id: object.access_key_id.clone(),
            account_id: object.account_id.clone(),
            additional_compute_security_group_ids: object.additional_compute_security_group_ids.clone(),
            billing_account_id: object.billing_account_id.clone(),
            private_hosted_zone_id: object.private_hosted_zone_id.clone(),
            private_hosted_zone_role_arn: object.private_hosted_zone_role_arn.clone(),
            private_link: object.private_link,
            secret_access_key: object.secret_access_key.clone(),
            subnet_ids: object.subnet_ids.clone(),
            sts: copy_nested(&object.sts),
            tags: object.tags.clone(),
        }
    }

    fn build(&self) -> Result<Aws, BuildError> {
        Ok(Aws {
            access_key_id: self.access_key_id.clone(),
            account_id: self.account_id.clone(),
            additional_compute_security_group_ids: self.additional_compute_security_group_ids.clone(),
            billing_account_id: self.billing_account_id.clone(),
            private_hosted_zone_id: self.private_hosted_zone_id.clone(),
            private_hosted_zone_role_arn: self.private_hosted_zone_role_arn.clone(),
            private_link: self.private_link,
            secret_access_key: self.secret_access_key.clone(),
            subnet_ids: self.subnet_ids.clone(),
            sts: build_nested(&self.sts)?,
            tags: self.tags.clone(),
        })
    }
}
