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

/// Description of a region of a cloud provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudRegion {
    kind: KindTag<CloudRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ccs_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_provider: Option<CloudProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    govcloud: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supports_multi_az: Option<bool>,
}

impl Resource for CloudRegion {
    const KIND: &'static str = "CloudRegion";
    const LINK_KIND: &'static str = "CloudRegionLink";
    const NIL_KIND: &'static str = "CloudRegionNil";
    const LIST_KIND: &'static str = "CloudRegionList";
    const LIST_LINK_KIND: &'static str = "CloudRegionListLink";
    const LIST_NIL_KIND: &'static str = "CloudRegionListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl CloudRegion {
    /// Returns a builder for this type.
    pub fn builder() -> CloudRegionBuilder {
        CloudRegionBuilder::new()
    }

    /// Returns `CloudRegionLink` for links and `CloudRegion` otherwise.
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
            && self.ccs_only.is_none()
            && self.cloud_provider.is_none()
            && self.display_name.is_none()
            && self.enabled.is_none()
            && self.govcloud.is_none()
            && self.kms_location_id.is_none()
            && self.name.is_none()
            && self.supports_multi_az.is_none()
    }

    /// 'true' if the region is supported only for CCS clusters, 'false' otherwise.
    pub fn ccs_only(&self) -> bool {
        self.ccs_only.unwrap_or_default()
    }

    pub fn get_ccs_only(&self) -> Option<bool> {
        self.ccs_only
    }

    /// Link to the cloud provider that the region belongs to.
    pub fn cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    pub fn get_cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    /// Name of the region for display purposes, for example `N. Virginia`.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    pub fn get_display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Whether the region is enabled for deploying an OSD cluster.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Whether the region is an AWS GovCloud region.
    pub fn govcloud(&self) -> bool {
        self.govcloud.unwrap_or_default()
    }

    pub fn get_govcloud(&self) -> Option<bool> {
        self.govcloud
    }

    /// The location of the KMS key ring in GCP.
    pub fn kms_location_id(&self) -> &str {
        self.kms_location_id.as_deref().unwrap_or_default()
    }

    pub fn get_kms_location_id(&self) -> Option<&str> {
        self.kms_location_id.as_deref()
    }

    /// Human friendly identifier of the region, for example `us-east-1`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the region supports multiple availability zones.
    pub fn supports_multi_az(&self) -> bool {
        self.supports_multi_az.unwrap_or_default()
    }

    pub fn get_supports_multi_az(&self) -> Option<bool> {
        self.supports_multi_az
    }
}

/// Builder for [`CloudRegion`].
#[derive(Debug, Clone, Default)]
pub struct CloudRegionBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    ccs_only: Option<bool>,
    cloud_provider: Option<CloudProviderBuilder>,
    display_name: Option<String>,
    enabled: Option<bool>,
    govcloud: Option<bool>,
    kms_location_id: Option<String>,
    name: Option<String>,
    supports_multi_az: Option<bool>,
}

impl CloudRegionBuilder {
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

    /// 'true' if the region is supported only for CCS clusters, 'false' otherwise.
    pub fn ccs_only(mut self, value: bool) -> Self {
        self.ccs_only = Some(value);
        self
    }

    /// Link to the cloud provider that the region belongs to.
    pub fn cloud_provider(mut self, value: CloudProviderBuilder) -> Self {
        self.cloud_provider = Some(value);
        self
    }

    /// Name of the region for display purposes, for example `N. Virginia`.
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    /// Whether the region is enabled for deploying an OSD cluster.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }

    /// Whether the region is an AWS GovCloud region.
    pub fn govcloud(mut self, value: bool) -> Self {
        self.govcloud = Some(value);
        self
    }

    /// The location of the KMS key ring in GCP.
    pub fn kms_location_id(mut self, value: impl Into<String>) -> Self {
        self.kms_location_id = Some(value.into());
        self
    }

    /// Human friendly identifier of the region, for example `us-east-1`.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Whether the region supports multiple availability zones.
    pub fn supports_multi_az(mut self, value: bool) -> Self {
        self.supports_multi_az = Some(value);
        self
    }
}

impl ObjectBuilder for CloudRegionBuilder {
    type Object = CloudRegion;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.ccs_only.is_none()
            && self.cloud_provider.is_none()
            && self.display_name.is_none()
            && self.enabled.is_none()
            && self.govcloud.is_none()
            && self.kms_location_id.is_none()
            && self.name.is_none()
            && self.supports_multi_az.is_none()
    }

    fn copy(self, object: &CloudRegion) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            ccs_only: object.ccs_only,
            cloud_provider: copy_nested(&object.cloud_provider),
            display_name: object.display_name.clone(),
            enabled: object.enabled,
            govcloud: object.govcloud,
            kms_location_id: object.kms_location_id.clone(),
            name: object.name.clone(),
            supports_multi_az: object.supports_multi_az,
        }
    }

    fn build(&self) -> Result<CloudRegion, BuildError> {
        Ok(CloudRegion {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            ccs_only: self.ccs_only,
            cloud_provider: build_nested(&self.cloud_provider)?,
            display_name: self.display_name.clone(),
            enabled: self.enabled,
            govcloud: self.govcloud,
            kms_location_id: self.kms_location_id.clone(),
            name: self.name.clone(),
            supports_multi_az: self.supports_multi_az,
        })
    }
}

/// A list of [`CloudRegion`] objects.
pub type CloudRegionList = List<CloudRegion>;

/// Builder for [`CloudRegionList`].
pub type CloudRegionListBuilder = ListBuilder<CloudRegionBuilder>;
