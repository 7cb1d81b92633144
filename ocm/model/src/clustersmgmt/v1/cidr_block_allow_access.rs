use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CidrBlockAllowAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
}

impl CidrBlockAllowAccess {
    /// Returns a builder for this type.
    pub fn builder() -> CidrBlockAllowAccessBuilder {
        CidrBlockAllowAccessBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.values.is_none()
    }

    /// Either `allow_all` or `allow_list`.
    pub fn mode(&self) -> &str {
        self.mode.as_deref().unwrap_or_default()
    }

    pub fn get_mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// CIDR blocks allowed when the mode is `allow_list`.
    pub fn values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }

    pub fn get_values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }
}

/// Builder for [`CidrBlockAllowAccess`].
#[derive(Debug, Clone, Default)]
pub struct CidrBlockAllowAccessBuilder {
    mode: Option<String>,
    values: Option<Vec<String>>,
}

impl CidrBlockAllowAccessBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Either `allow_all` or `allow_list`.
    pub fn mode(mut self, value: impl Into<String>) -> Self {
        self.mode = Some(value.into());
        self
    }

    /// CIDR blocks allowed when the mode is `allow_list`.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl ObjectBuilder for CidrBlockAllowAccessBuilder {
    type Object = CidrBlockAllowAccess;

    fn is_empty(&self) -> bool {
        self.mode.is_none() && self.values.is_none()
    }

    fn copy(self, object: &CidrBlockAllowAccess) -> Self {
        Self {
            mode: object.mode.clone(),
            values: object.values.clone(),
        }
    }

    fn build(&self) -> Result<CidrBlockAllowAccess, BuildError> {
        Ok(CidrBlockAllowAccess {
            mode: self.mode.clone(),
            values: self.values.clone(),
        })
    }
}
