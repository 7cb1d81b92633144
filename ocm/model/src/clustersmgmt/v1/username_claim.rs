use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsernameClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix_policy: Option<String>,
}

impl UsernameClaim {
    /// Returns a builder for this type.
    pub fn builder() -> UsernameClaimBuilder {
        UsernameClaimBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.claim.is_none()
            && self.prefix.is_none()
            && self.prefix_policy.is_none()
    }

    /// The claim used in the token.
    pub fn claim(&self) -> &str {
        self.claim.as_deref().unwrap_or_default()
    }

    pub fn get_claim(&self) -> Option<&str> {
        self.claim.as_deref()
    }

    /// A string to prefix the value of the claim with.
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }

    pub fn get_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Specifies how a prefix should apply.
    pub fn prefix_policy(&self) -> &str {
        self.prefix_policy.as_deref().unwrap_or_default()
    }

    pub fn get_prefix_policy(&self) -> Option<&str> {
        self.prefix_policy.as_deref()
    }
}

/// Builder for [`UsernameClaim`].
#[derive(Debug, Clone, Default)]
pub struct UsernameClaimBuilder {
    claim: Option<String>,
    prefix: Option<String>,
    prefix_policy: Option<String>,
}

impl UsernameClaimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The claim used in the token.
    pub fn claim(mut self, value: impl Into<String>) -> Self {
        self.claim = Some(value.into());
        self
    }

    /// A string to prefix the value of the claim with.
    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.prefix = Some(value.into());
        self
    }

    /// Specifies how a prefix should apply.
    pub fn prefix_policy(mut self, value: impl Into<String>) -> Self {
        self.prefix_policy = Some(value.into());
        self
    }
}

impl ObjectBuilder for UsernameClaimBuilder {
    type Object = UsernameClaim;

    fn is_empty(&self) -> bool {
        self.claim.is_none()
            && self.prefix.is_none()
            && self.prefix_policy.is_none()
    }

    fn copy(self, object: &UsernameClaim) -> Self {
        Self {
            claim: object.claim.clone(),
            prefix: object.prefix.clone(),
            prefix_policy: object.prefix_policy.clone(),
        }
    }

    fn build(&self) -> Result<UsernameClaim, BuildError> {
        Ok(UsernameClaim {
            claim: self.claim.clone(),
            prefix: self.prefix.clone(),
            prefix_policy: self.prefix_policy.clone(),
        })
    }
}
