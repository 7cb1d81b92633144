use ocm_model_core::{BuildError, ObjectBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
}

impl ClientComponent {
    /// Returns a builder for this type.
    pub fn builder() -> ClientComponentBuilder {
        ClientComponentBuilder::new()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.namespace.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }

    pub fn get_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

/// Builder for [`ClientComponent`].
#[derive(Debug, Clone, Default)]
pub struct ClientComponentBuilder {
    name: Option<String>,
    namespace: Option<String>,
}

impl ClientComponentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = Some(value.into());
        self
    }
}

impl ObjectBuilder for ClientComponentBuilder {
    type Object = ClientComponent;

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.namespace.is_none()
    }

    fn copy(self, object: &ClientComponent) -> Self {
        Self {
            name: object.name.clone(),
            namespace: object.namespace.clone(),
        }
    }

    fn build(&self) -> Result<ClientComponent, BuildError> {
        Ok(ClientComponent {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
        })
    }
}
