use ocm_model_core::{builder::{build_nested, copy_nested}, BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

use super::cidr_block_allow_access::{CidrBlockAllowAccess, CidrBlockAllowAccessBuilder};

/// Access rules for the API server by CIDR block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CidrBlockAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    allow: Option<CidrBlockAllowAccess>,
}

impl CidrBlockAccess {
    /// Returns a builder for this type.
    pub fn builder() -> CidrBlockAccessBuilder {
        CidrBlockAccessBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.allow.is_none()
    }

    pub fn allow(&self) -> Option<&CidrBlockAllowAccess> {
        self.allow.as_ref()
    }

    pub fn get_allow(&self) -> Option<&CidrBlockAllowAccess> {
        self.allow.as_ref()
    }
}

/// Builder for [`CidrBlockAccess`].
#[derive(Debug, Clone, Default)]
pub struct CidrBlockAccessBuilder {
    allow: Option<CidrBlockAllowAccessBuilder>,
}

impl CidrBlockAccessBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(mut self, value: CidrBlockAllowAccessBuilder) -> Self {
        self.allow = Some(value);
        self
    }
}

impl ObjectBuilder for CidrBlockAccessBuilder {
    type Object = CidrBlockAccess;

    fn is_empty(&self) -> bool {
        self.allow.is_none()
    }

    fn copy(self, object: &CidrBlockAccess) -> Self {
        Self {
            allow: copy_nested(&object.allow),
        }
    }

    fn build(&self) -> Result<CidrBlockAccess, BuildError> {
        Ok(CidrBlockAccess {
            allow: build_nested(&self.allow)?,
        })
    }
}
