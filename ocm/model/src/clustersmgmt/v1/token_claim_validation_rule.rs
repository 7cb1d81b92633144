use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

/// A rule that is applied to validate token claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenClaimValidationRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_value: Option<String>,
}

impl TokenClaimValidationRule {
    /// Returns a builder for this type.
    pub fn builder() -> TokenClaimValidationRuleBuilder {
        TokenClaimValidationRuleBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.claim.is_none() && self.required_value.is_none()
    }

    pub fn claim(&self) -> &str {
        self.claim.as_deref().unwrap_or_default()
    }

    pub fn get_claim(&self) -> Option<&str> {
        self.claim.as_deref()
    }

    pub fn required_value(&self) -> &str {
        self.required_value.as_deref().unwrap_or_default()
    }

    pub fn get_required_value(&self) -> Option<&str> {
        self.required_value.as_deref()
    }
}

/// Builder for [`TokenClaimValidationRule`].
#[derive(Debug, Clone, Default)]
pub struct TokenClaimValidationRuleBuilder {
    claim: Option<String>,
    required_value: Option<String>,
}

impl TokenClaimValidationRuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(mut self, value: impl Into<String>) -> Self {
        self.claim = Some(value.into());
        self
    }

    pub fn required_value(mut self, value: impl Into<String>) -> Self {
        self.required_value = Some(value.into());
        self
    }
}

impl ObjectBuilder for TokenClaimValidationRuleBuilder {
    type Object = TokenClaimValidationRule;

    fn is_empty(&self) -> bool {
        self.claim.is_none() && self.required_value.is_none()
    }

    fn copy(self, object: &TokenClaimValidationRule) -> Self {
        Self {
            claim: object.claim.clone(),
            required_value: object.required_value.clone(),
        }
    }

    fn build(&self) -> Result<TokenClaimValidationRule, BuildError> {
        Ok(TokenClaimValidationRule {
            claim: self.claim.clone(),
            required_value: self.required_value.clone(),
        })
    }
}
