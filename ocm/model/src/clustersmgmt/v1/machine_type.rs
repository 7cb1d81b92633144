use ocm_model_core::{
    builder::{build_nested, copy_nested},
    BuildError,
    KindTag,
    List,
    ListBuilder,
    ObjectBuilder,
    Resource,
};
use serde::{Deserialize, Serialize};

use super::cloud_provider::{CloudProvider, CloudProviderBuilder};
use super::enums::{MachineTypeCategory, MachineTypeSize};
use super::value::{Value, ValueBuilder};

/// Machine type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineType {
    kind: KindTag<MachineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<MachineTypeCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_provider: Option<CloudProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpu: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<MachineTypeSize>,
}

impl Resource for MachineType {
    const KIND: &'static str = "MachineType";
    const LINK_KIND: &'static str = "MachineTypeLink";
    const NIL_KIND: &'static str = "MachineTypeNil";
    const LIST_KIND: &'static str = "MachineTypeList";
    const LIST_LINK_KIND: &'static str = "MachineTypeListLink";
    const LIST_NIL_KIND: &'static str = "MachineTypeListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl MachineType {
    /// Returns a builder for this type.
    pub fn builder() -> MachineTypeBuilder {
        MachineTypeBuilder::new()
    }

    /// Returns `MachineTypeLink` for links and `MachineType` otherwise.
    pub fn kind(&self) -> &'static str {
        Self::kind_of(Some(self))
    }

    /// Returns `true` if this is a link to the object rather than the object
    /// itself.
    pub fn link(&self) -> bool {
        self.kind.is_link()
    }

    /// Identifier of the object.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Self link.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    pub fn get_href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.category.is_none()
            && self.cloud_provider.is_none()
            && self.cpu.is_none()
            && self.memory.is_none()
            && self.name.is_none()
            && self.size.is_none()
    }

    /// The category which the machine type is suitable for.
    pub fn category(&self) -> MachineTypeCategory {
        self.category.clone().unwrap_or_default()
    }

    pub fn get_category(&self) -> Option<&MachineTypeCategory> {
        self.category.as_ref()
    }

    /// Link to the cloud provider that the machine type belongs to.
    pub fn cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    pub fn get_cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    /// The amount of cpu's of the machine type.
    pub fn cpu(&self) -> Option<&Value> {
        self.cpu.as_ref()
    }

    pub fn get_cpu(&self) -> Option<&Value> {
        self.cpu.as_ref()
    }

    /// The amount of memory of the machine type.
    pub fn memory(&self) -> Option<&Value> {
        self.memory.as_ref()
    }

    pub fn get_memory(&self) -> Option<&Value> {
        self.memory.as_ref()
    }

    /// Human friendly identifier of the machine type, for example `r5.xlarge -
    /// Memory Optimized`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The size of the machine type.
    pub fn size(&self) -> MachineTypeSize {
        self.size.clone().unwrap_or_default()
    }

    pub fn get_size(&self) -> Option<&MachineTypeSize> {
        self.size.as_ref()
    }
}

/// Builder for [`MachineType`].
#[derive(Debug, Clone, Default)]
pub struct MachineTypeBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    category: Option<MachineTypeCategory>,
    cloud_provider: Option<CloudProviderBuilder>,
    cpu: Option<ValueBuilder>,
    memory: Option<ValueBuilder>,
    name: Option<String>,
    size: Option<MachineTypeSize>,
}

impl MachineTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag that indicates if this is a link.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// The category which the machine type is suitable for.
    pub fn category(mut self, value: impl Into<MachineTypeCategory>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Link to the cloud provider that the machine type belongs to.
    pub fn cloud_provider(mut self, value: CloudProviderBuilder) -> Self {
        self.cloud_provider = Some(value);
        self
    }

    /// The amount of cpu's of the machine type.
    pub fn cpu(mut self, value: ValueBuilder) -> Self {
        self.cpu = Some(value);
        self
    }

    /// The amount of memory of the machine type.
    pub fn memory(mut self, value: ValueBuilder) -> Self {
        self.memory = Some(value);
        self
    }

    /// Human friendly identifier of the machine type, for example `r5.xlarge -
    /// Memory Optimized`.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// The size of the machine type.
    pub fn size(mut self, value: impl Into<MachineTypeSize>) -> Self {
        self.size = Some(value.into());
        self
    }
}

impl ObjectBuilder for MachineTypeBuilder {
    type Object = MachineType;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.category.is_none()
            && self.cloud_provider.is_none()
            && self.cpu.is_none()
            && self.memory.is_none()
            && self.name.is_none()
            && self.size.is_none()
    }

    fn copy(self, object: &MachineType) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            category: object.category.clone(),
            cloud_provider: copy_nested(&object.cloud_provider),
            cpu: copy_nested(&object.cpu),
            memory: copy_nested(&object.memory),
            name: object.name.clone(),
            size: object.size.clone(),
        }
    }

    fn build(&self) -> Result<MachineType, BuildError> {
        Ok(MachineType {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            category: self.category.clone(),
            cloud_provider: build_nested(&self.cloud_provider)?,
            cpu: build_nested(&self.cpu)?,
            memory: build_nested(&self.memory)?,
            name: self.name.clone(),
            size: self.size.clone(),
        })
    }
}

/// A list of [`MachineType`] objects.
pub type MachineTypeList = List<MachineType>;

/// Builder for [`MachineTypeList`].
pub type MachineTypeListBuilder = ListBuilder<MachineTypeBuilder>;
