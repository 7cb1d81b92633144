use ocm_model_core::{builder::{build_nested, copy_nested}, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::groups_claim::{GroupsClaim, GroupsClaimBuilder};
use super::username_claim::{UsernameClaim, UsernameClaimBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenClaimMappings {
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<GroupsClaim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<UsernameClaim>,
}

impl TokenClaimMappings {
    /// Returns a builder for this type.
    pub fn builder() -> TokenClaimMappingsBuilder {
        TokenClaimMappingsBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.groups.is_none() && self.user_name.is_none()
    }

    pub fn groups(&self) -> Option<&GroupsClaim> {
        self.groups.as_ref()
    }

    pub fn get_groups(&self) -> Option<&GroupsClaim> {
        self.groups.as_ref()
    }

    pub fn user_name(&self) -> Option<&UsernameClaim> {
        self.user_name.as_ref()
    }

    pub fn get_user_name(&self) -> Option<&UsernameClaim> {
        self.user_name.as_ref()
    }
}

/// Builder for [`TokenClaimMappings`].
#[derive(Debug, Clone, Default)]
pub struct TokenClaimMappingsBuilder {
    groups: Option<GroupsClaimBuilder>,
    user_name: Option<UsernameClaimBuilder>,
}

impl TokenClaimMappingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(mut self, value: GroupsClaimBuilder) -> Self {
        self.groups = Some(value);
        self
    }

    pub fn user_name(mut self, value: UsernameClaimBuilder) -> Self {
        self.user_name = Some(value);
        self
    }
}

impl ObjectBuilder for TokenClaimMappingsBuilder {
    type Object = TokenClaimMappings;

    fn is_empty(&self) -> bool {
        self.groups.is_none() && self.user_name.is_none()
    }

    fn copy(self, object: &TokenClaimMappings) -> Self {
        Self {
            groups: copy_nested(&object.groups),
            user_name: copy_nested(&object.user_name),
        }
    }

    fn build(&self) -> Result<TokenClaimMappings, BuildError> {
        Ok(TokenClaimMappings {
            groups: build_nested(&self.groups)?,
            user_name: build_nested(&self.user_name)?,
        })
    }
}
