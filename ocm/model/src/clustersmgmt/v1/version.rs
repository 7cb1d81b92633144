use chrono::{DateTime, Utc};
use ocm_model_core::{BuildError, KindTag, List, ListBuilder, ObjectBuilder, Resource};
use serde::{Deserialize, Serialize};

/// Representation of an _OpenShift_ version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    kind: KindTag<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_upgrades: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_group: Option<String>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_of_life_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosted_control_plane_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rosa_enabled: Option<bool>,
}

impl Resource for Version {
    const KIND: &'static str = "Version";
    const LINK_KIND: &'static str = "VersionLink";
    const NIL_KIND: &'static str = "VersionNil";
    const LIST_KIND: &'static str = "VersionList";
    const LIST_LINK_KIND: &'static str = "VersionListLink";
    const LIST_NIL_KIND: &'static str = "VersionListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl Version {
    /// Returns a builder for this type.
    pub fn builder() -> VersionBuilder {
        VersionBuilder::new()
    }

    /// Returns `VersionLink` for links and `Version` otherwise.
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
            && self.available_upgrades.is_none()
            && self.channel_group.is_none()
            && self.is_default.is_none()
            && self.enabled.is_none()
            && self.end_of_life_timestamp.is_none()
            && self.hosted_control_plane_enabled.is_none()
            && self.raw_id.is_none()
            && self.rosa_enabled.is_none()
    }

    /// AvailableUpgrades is the list of versions this version can be upgraded to.
    pub fn available_upgrades(&self) -> &[String] {
        self.available_upgrades.as_deref().unwrap_or_default()
    }

    pub fn get_available_upgrades(&self) -> Option<&[String]> {
        self.available_upgrades.as_deref()
    }

    /// ChannelGroup is the name of the group where this image belongs.
    pub fn channel_group(&self) -> &str {
        self.channel_group.as_deref().unwrap_or_default()
    }

    pub fn get_channel_group(&self) -> Option<&str> {
        self.channel_group.as_deref()
    }

    /// Indicates if this should be selected as the default version when a cluster
    /// is created without specifying explicitly the version.
    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or_default()
    }

    pub fn get_default(&self) -> Option<bool> {
        self.is_default
    }

    /// Indicates if this version can be used to create clusters.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// EndOfLifeTimestamp is the date and time when the version will get to End of
    /// Life, using the format defined in RFC 3339.
    pub fn end_of_life_timestamp(&self) -> DateTime<Utc> {
        self.end_of_life_timestamp.unwrap_or_default()
    }

    pub fn get_end_of_life_timestamp(&self) -> Option<DateTime<Utc>> {
        self.end_of_life_timestamp
    }

    /// HostedControlPlaneEnabled indicates whether this version can be used to
    /// create HCP clusters.
    pub fn hosted_control_plane_enabled(&self) -> bool {
        self.hosted_control_plane_enabled.unwrap_or_default()
    }

    pub fn get_hosted_control_plane_enabled(&self) -> Option<bool> {
        self.hosted_control_plane_enabled
    }

    /// RawID is the id of the version - without channel group and prefix.
    pub fn raw_id(&self) -> &str {
        self.raw_id.as_deref().unwrap_or_default()
    }

    pub fn get_raw_id(&self) -> Option<&str> {
        self.raw_id.as_deref()
    }

    /// ROSAEnabled indicates whether this version can be used to create ROSA
    /// clusters.
    pub fn rosa_enabled(&self) -> bool {
        self.rosa_enabled.unwrap_or_default()
    }

    pub fn get_rosa_enabled(&self) -> Option<bool> {
        self.rosa_enabled
    }
}

/// Builder for [`Version`].
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    available_upgrades: Option<Vec<String>>,
    channel_group: Option<String>,
    is_default: Option<bool>,
    enabled: Option<bool>,
    end_of_life_timestamp: Option<DateTime<Utc>>,
    hosted_control_plane_enabled: Option<bool>,
    raw_id: Option<String>,
    rosa_enabled: Option<bool>,
}

impl VersionBuilder {
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

    /// AvailableUpgrades is the list of versions this version can be upgraded to.
    pub fn available_upgrades<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_upgrades = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// ChannelGroup is the name of the group where this image belongs.
    pub fn channel_group(mut self, value: impl Into<String>) -> Self {
        self.channel_group = Some(value.into());
        self
    }

    /// Indicates if this should be selected as the default version when a cluster
    /// is created without specifying explicitly the version.
    pub fn is_default(mut self, value: bool) -> Self {
        self.is_default = Some(value);
        self
    }

    /// Indicates if this version can be used to create clusters.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }

    /// EndOfLifeTimestamp is the date and time when the version will get to End of
    /// Life, using the format defined in RFC 3339.
    pub fn end_of_life_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.end_of_life_timestamp = Some(value);
        self
    }

    /// HostedControlPlaneEnabled indicates whether this version can be used to
    /// create HCP clusters.
    pub fn hosted_control_plane_enabled(mut self, value: bool) -> Self {
        self.hosted_control_plane_enabled = Some(value);
        self
    }

    /// RawID is the id of the version - without channel group and prefix.
    pub fn raw_id(mut self, value: impl Into<String>) -> Self {
        self.raw_id = Some(value.into());
        self
    }

    /// ROSAEnabled indicates whether this version can be used to create ROSA
    /// clusters.
    pub fn rosa_enabled(mut self, value: bool) -> Self {
        self.rosa_enabled = Some(value);
        self
    }
}

impl ObjectBuilder for VersionBuilder {
    type Object = Version;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.available_upgrades.is_none()
            && self.channel_group.is_none()
            && self.is_default.is_none()
            && self.enabled.is_none()
            && self.end_of_life_timestamp.is_none()
            && self.hosted_control_plane_enabled.is_none()
            && self.raw_id.is_none()
            && self.rosa_enabled.is_none()
    }

    fn copy(self, object: &Version) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            available_upgrades: object.available_upgrades.clone(),
            channel_group: object.channel_group.clone(),
            is_default: object.is_default,
            enabled: object.enabled,
            end_of_life_timestamp: object.end_of_life_timestamp,
            hosted_control_plane_enabled: object.hosted_control_plane_enabled,
            raw_id: object.raw_id.clone(),
            rosa_enabled: object.rosa_enabled,
        }
    }

    fn build(&self) -> Result<Version, BuildError> {
        Ok(Version {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            available_upgrades: self.available_upgrades.clone(),
            channel_group: self.channel_group.clone(),
            is_default: self.is_default,
            enabled: self.enabled,
            end_of_life_timestamp: self.end_of_life_timestamp,
            hosted_control_plane_enabled: self.hosted_control_plane_enabled,
            raw_id: self.raw_id.clone(),
            rosa_enabled: self.rosa_enabled,
        })
    }
}

/// A list of [`Version`] objects.
pub type VersionList = List<Version>;

/// Builder for [`VersionList`].
pub type VersionListBuilder = ListBuilder<VersionBuilder>;
