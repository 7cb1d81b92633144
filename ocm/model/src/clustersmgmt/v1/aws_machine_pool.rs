use std::collections::BTreeMap;

use ocm_model_core::{builder::{build_nested, copy_nested}, empty_map, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::aws_spot_market_options::{AwsSpotMarketOptions, AwsSpotMarketOptionsBuilder};

/// Representation of aws machine pool specific parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsMachinePool {
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spot_market_options: Option<AwsSpotMarketOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl AwsMachinePool {
    /// Returns a builder for this type.
    pub fn builder() -> AwsMachinePoolBuilder {
        AwsMachinePoolBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.additional_security_group_ids.is_none()
            && self.spot_market_options.is_none()
            && self.tags.is_none()
    }

    /// Additional AWS Security Groups to be added machine pool.
    pub fn additional_security_group_ids(&self) -> &[String] {
        self.additional_security_group_ids.as_deref().unwrap_or_default()
    }

    pub fn get_additional_security_group_ids(&self) -> Option<&[String]> {
        self.additional_security_group_ids.as_deref()
    }

    /// Use spot instances on this machine pool to reduce cost.
    pub fn spot_market_options(&self) -> Option<&AwsSpotMarketOptions> {
        self.spot_market_options.as_ref()
    }

    pub fn get_spot_market_options(&self) -> Option<&AwsSpotMarketOptions> {
        self.spot_market_options.as_ref()
    }

    /// Optional keys and values that the machine pool provisioner will add as AWS
    /// tags to all AWS resources it creates.
    pub fn tags(&self) -> &BTreeMap<String, String> {
        self.tags.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }
}

/// Builder for [`AwsMachinePool`].
#[derive(Debug, Clone, Default)]
pub struct AwsMachinePoolBuilder {
    additional_security_group_ids: Option<Vec<String>>,
    spot_market_options: Option<AwsSpotMarketOptionsBuilder>,
    tags: Option<BTreeMap<String, String>>,
}

impl AwsMachinePoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Additional AWS Security Groups to be added machine pool.
    pub fn additional_security_group_ids<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_security_group_ids = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Use spot instances on this machine pool to reduce cost.
    pub fn spot_market_options(mut self, value: AwsSpotMarketOptionsBuilder) -> Self {
        self.spot_market_options = Some(value);
        self
    }

    /// Optional keys and values that the machine pool provisioner will add as AWS
    /// tags to all AWS resources it creates.
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

impl ObjectBuilder for AwsMachinePoolBuilder {
    type Object = AwsMachinePool;

    fn is_empty(&self) -> bool {
        self.additional_security_group_ids.is_none()
            && self.spot_market_options.is_none()
            && self.tags.is_none()
    }

    fn copy(self, object: &AwsMachinePool) -> Self {
        Self {
            additional_security_group_ids: object.additional_security_group_ids.clone(),
            spot_market_options: copy_nested(&object.spot_market_options),
            tags: object.tags.clone(),
        }
    }

    fn build(&self) -> Result<AwsMachinePool, BuildError> {
        Ok(AwsMachinePool {
            additional_security_group_ids: self.additional_security_group_ids.clone(),
            spot_market_options: build_nested(&self.spot_market_options)?,
            tags: self.tags.clone(),
        })
    }
}
