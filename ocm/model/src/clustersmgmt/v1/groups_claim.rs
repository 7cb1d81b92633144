use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
}

impl GroupsClaim {
    /// Returns a builder for this type.
    pub fn builder() -> GroupsClaimBuilder {
        GroupsClaimBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.claim.is_none() && self.prefix.is_none()
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
}

/// Builder for [`GroupsClaim`].
#[derive(Debug, Clone, Default)]
pub struct GroupsClaimBuilder {
    claim: Option<String>,
    prefix: Option<String>,
}

impl GroupsClaimBuilder {
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
}

impl ObjectBuilder for GroupsClaimBuilder {
    type Object = GroupsClaim;

    fn is_empty(&self) -> bool {
        self.claim.is_none() && self.prefix.is_none()
    }

    fn copy(self, object: &GroupsClaim) -> Self {
        Self {
            claim: object.claim.clone(),
            prefix: object.prefix.clone(),
        }
    }

    fn build(&self) -> Result<GroupsClaim, BuildError> {
        Ok(GroupsClaim {
            claim: self.claim.clone(),
            prefix: self.prefix.clone(),
        })
    }
}
