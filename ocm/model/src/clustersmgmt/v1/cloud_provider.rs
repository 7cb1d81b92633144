use ocm_model_core::{
    builder::{build_all, copy_all},
    BuildError,
    KindTag,
    List,
    ListBuilder,
    ObjectBuilder,
    Resource,
};
use serde::{Deserialize, Serialize};

use super::cloud_region::{CloudRegion, CloudRegionBuilder};

/// Cloud provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudProvider {
    kind: KindTag<CloudProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    regions: Option<Vec<CloudRegion>>,
}

impl Resource for CloudProvider {
    const KIND: &'static str = "CloudProvider";
    const LINK_KIND: &'static str = "CloudProviderLink";
    const NIL_KIND: &'static str = "CloudProviderNil";
    const LIST_KIND: &'static str = "CloudProviderList";
    const LIST_LINK_KIND: &'static str = "CloudProviderListLink";
    const LIST_NIL_KIND: &'static str = "CloudProviderListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl CloudProvider {
    /// Returns a builder for this type.
    pub fn builder() -> CloudProviderBuilder {
        CloudProviderBuilder::new()
    }

    /// Returns `CloudProviderLink` for links and `CloudProvider` otherwise.
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
            && self.display_name.is_none()
            && self.name.is_none()
            && self.regions.is_none()
    }

    /// Name of the cloud provider for display purposes. It can contain any
    /// characters, including spaces.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    pub fn get_display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Human friendly identifier of the cloud provider, for example `aws`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// (optional) Provider's regions - only included when listing providers with
    /// `fetchRegions=true`.
    pub fn regions(&self) -> &[CloudRegion] {
        self.regions.as_deref().unwrap_or_default()
    }

    pub fn get_regions(&self) -> Option<&[CloudRegion]> {
        self.regions.as_deref()
    }
}

/// Builder for [`CloudProvider`].
#[derive(Debug, Clone, Default)]
pub struct CloudProviderBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    display_name: Option<String>,
    name: Option<String>,
    regions: Option<Vec<CloudRegionBuilder>>,
}

impl CloudProviderBuilder {
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

    /// Name of the cloud provider for display purposes. It can contain any
    /// characters, including spaces.
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    /// Human friendly identifier of the cloud provider, for example `aws`.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// (optional) Provider's regions - only included when listing providers with
    /// `fetchRegions=true`.
    pub fn regions<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = CloudRegionBuilder>,
    {
        self.regions = Some(values.into_iter().collect());
        self
    }
}

impl ObjectBuilder for CloudProviderBuilder {
    type Object = CloudProvider;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.display_name.is_none()
            && self.name.is_none()
            && self.regions.is_none()
    }

    fn copy(self, object: &CloudProvider) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            display_name: object.display_name.clone(),
            name: object.name.clone(),
            regions: copy_all(&object.regions),
        }
    }

    fn build(&self) -> Result<CloudProvider, BuildError> {
        Ok(CloudProvider {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            display_name: self.display_name.clone(),
            name: self.name.clone(),
            regions: build_all(&self.regions)?,
        })
    }
}

/// A list of [`CloudProvider`] objects.
pub type CloudProviderList = List<CloudProvider>;

/// Builder for [`CloudProviderList`].
pub type CloudProviderListBuilder = ListBuilder<CloudProviderBuilder>;
