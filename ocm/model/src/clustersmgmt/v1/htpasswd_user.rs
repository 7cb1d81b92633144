use ocm_model_core::{BuildError, KindTag, List, ListBuilder, ObjectBuilder, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtpasswdUser {
    kind: KindTag<HtpasswdUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hashed_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

impl Resource for HtpasswdUser {
    const KIND: &'static str = "HtpasswdUser";
    const LINK_KIND: &'static str = "HtpasswdUserLink";
    const NIL_KIND: &'static str = "HtpasswdUserNil";
    const LIST_KIND: &'static str = "HtpasswdUserList";
    const LIST_LINK_KIND: &'static str = "HtpasswdUserListLink";
    const LIST_NIL_KIND: &'static str = "HtpasswdUserListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl HtpasswdUser {
    /// Returns a builder for this type.
    pub fn builder() -> HtpasswdUserBuilder {
        HtpasswdUserBuilder::new()
    }

    /// Returns `HtpasswdUserLink` for links and `HtpasswdUser` otherwise.
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
            && self.hashed_password.is_none()
            && self.password.is_none()
            && self.username.is_none()
    }

    /// HTPasswd hashed password.
    pub fn hashed_password(&self) -> &str {
        self.hashed_password.as_deref().unwrap_or_default()
    }

    pub fn get_hashed_password(&self) -> Option<&str> {
        self.hashed_password.as_deref()
    }

    /// Password in plain text.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    pub fn get_password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn get_username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Builder for [`HtpasswdUser`].
#[derive(Debug, Clone, Default)]
pub struct HtpasswdUserBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    hashed_password: Option<String>,
    password: Option<String>,
    username: Option<String>,
}

impl HtpasswdUserBuilder {
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

    /// HTPasswd hashed password.
    pub fn hashed_password(mut self, value: impl Into<String>) -> Self {
        self.hashed_password = Some(value.into());
        self
    }

    /// Password in plain text.
    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(value.into());
        self
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }
}

impl ObjectBuilder for HtpasswdUserBuilder {
    type Object = HtpasswdUser;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.hashed_password.is_none()
            && self.password.is_none()
            && self.username.is_none()
    }

    fn copy(self, object: &HtpasswdUser) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            hashed_password: object.hashed_password.clone(),
            password: object.password.clone(),
            username: object.username.clone(),
        }
    }

    fn build(&self) -> Result<HtpasswdUser, BuildError> {
        Ok(HtpasswdUser {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            hashed_password: self.hashed_password.clone(),
            password: self.password.clone(),
            username: self.username.clone(),
        })
    }
}

/// A list of [`HtpasswdUser`] objects.
pub type HtpasswdUserList = List<HtpasswdUser>;

/// Builder for [`HtpasswdUserList`].
pub type HtpasswdUserListBuilder = ListBuilder<HtpasswdUserBuilder>;
