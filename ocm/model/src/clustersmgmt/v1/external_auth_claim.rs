use ocm_model_core::{
    builder::{build_all, build_nested, copy_all, copy_nested},
    BuildError,
    ObjectBuilder,
};
use serde::{Deserialize, Serialize};

use super::token_claim_mappings::{TokenClaimMappings, TokenClaimMappingsBuilder};
use super::token_claim_validation_rule::{TokenClaimValidationRule, TokenClaimValidationRuleBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAuthClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    mappings: Option<TokenClaimMappings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_rules: Option<Vec<TokenClaimValidationRule>>,
}

impl ExternalAuthClaim {
    /// Returns a builder for this type.
    pub fn builder() -> ExternalAuthClaimBuilder {
        ExternalAuthClaimBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_none() && self.validation_rules.is_none()
    }

    /// Mapping describes rules on how to transform information from an ID token
    /// into a cluster identity.
    pub fn mappings(&self) -> Option<&TokenClaimMappings> {
        self.mappings.as_ref()
    }

    pub fn get_mappings(&self) -> Option<&TokenClaimMappings> {
        self.mappings.as_ref()
    }

    /// Rules that are applied to validate token claims to authenticate users.
    pub fn validation_rules(&self) -> &[TokenClaimValidationRule] {
        self.validation_rules.as_deref().unwrap_or_default()
    }

    pub fn get_validation_rules(&self) -> Option<&[TokenClaimValidationRule]> {
        self.validation_rules.as_deref()
    }
}

/// Builder for [`ExternalAuthClaim`].
#[derive(Debug, Clone, Default)]
pub struct ExternalAuthClaimBuilder {
    mappings: Option<TokenClaimMappingsBuilder>,
    validation_rules: Option<Vec<TokenClaimValidationRuleBuilder>>,
}

impl ExternalAuthClaimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping describes rules on how to transform information from an ID token
    /// into a cluster identity.
    pub fn mappings(mut self, value: TokenClaimMappingsBuilder) -> Self {
        self.mappings = Some(value);
        self
    }

    /// Rules that are applied to validate token claims to authenticate users.
    pub fn validation_rules<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = TokenClaimValidationRuleBuilder>,
    {
        self.validation_rules = Some(values.into_iter().collect());
        self
    }
}

impl ObjectBuilder for ExternalAuthClaimBuilder {
    type Object = ExternalAuthClaim;

    fn is_empty(&self) -> bool {
        self.mappings.is_none() && self.validation_rules.is_none()
    }

    fn copy(self, object: &ExternalAuthClaim) -> Self {
        Self {
            mappings: copy_nested(&object.mappings),
            validation_rules: copy_all(&object.validation_rules),
        }
    }

    fn build(&self) -> Result<ExternalAuthClaim, BuildError> {
        Ok(ExternalAuthClaim {
            mappings: build_nested(&self.mappings)?,
            validation_rules: build_all(&self.validation_rules)?,
        })
    }
}
