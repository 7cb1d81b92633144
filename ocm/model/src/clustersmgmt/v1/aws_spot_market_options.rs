use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// Spot market options for AWS machine pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsSpotMarketOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<f64>,
}

impl AwsSpotMarketOptions {
    /// Returns a builder for this type.
    pub fn builder() -> AwsSpotMarketOptionsBuilder {
        AwsSpotMarketOptionsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.max_price.is_none()
    }

    /// The maximum price the user is willing to pay for their instances.
    pub fn max_price(&self) -> f64 {
        self.max_price.unwrap_or_default()
    }

    pub fn get_max_price(&self) -> Option<f64> {
        self.max_price
    }
}

/// Builder for [`AwsSpotMarketOptions`].
#[derive(Debug, Clone, Default)]
pub struct AwsSpotMarketOptionsBuilder {
    max_price: Option<f64>,
}

impl AwsSpotMarketOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum price the user is willing to pay for their instances.
    pub fn max_price(mut self, value: f64) -> Self {
        self.max_price = Some(value);
        self
    }
}

impl ObjectBuilder for AwsSpotMarketOptionsBuilder {
    type Object = AwsSpotMarketOptions;

    fn is_empty(&self) -> bool {
        self.max_price.is_none()
    }

    fn copy(self, object: &AwsSpotMarketOptions) -> Self {
        Self {
            max_price: object.max_price,
        }
    }

    fn build(&self) -> Result<AwsSpotMarketOptions, BuildError> {
        Ok(AwsSpotMarketOptions {
            max_price: self.max_price,
        })
    }
}
