use ocm_model_core::{BuildError, KindTag, List, ListBuilder, ObjectBuilder, Resource};
use serde::{Deserialize, Serialize};

/// Definition of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    kind: KindTag<Subscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

impl Resource for Subscription {
    const KIND: &'static str = "Subscription";
    const LINK_KIND: &'static str = "SubscriptionLink";
    const NIL_KIND: &'static str = "SubscriptionNil";
    const LIST_KIND: &'static str = "SubscriptionList";
    const LIST_LINK_KIND: &'static str = "SubscriptionListLink";
    const LIST_NIL_KIND: &'static str = "SubscriptionListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl Subscription {
    /// Returns a builder for this type.
    pub fn builder() -> SubscriptionBuilder {
        SubscriptionBuilder::new()
    }

    /// Returns `SubscriptionLink` for links and `Subscription` otherwise.
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
        self.id.is_none() && self.href.is_none()
    }
}

/// Builder for [`Subscription`].
#[derive(Debug, Clone, Default)]
pub struct SubscriptionBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
}

impl SubscriptionBuilder {
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
}

impl ObjectBuilder for SubscriptionBuilder {
    type Object = Subscription;

    fn is_empty(&self) -> bool {
        self.id.is_none() && self.href.is_none()
    }

    fn copy(self, object: &Subscription) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
        }
    }

    fn build(&self) -> Result<Subscription, BuildError> {
        Ok(Subscription {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
        })
    }
}

/// A list of [`Subscription`] objects.
pub type SubscriptionList = List<Subscription>;

/// Builder for [`SubscriptionList`].
pub type SubscriptionListBuilder = ListBuilder<SubscriptionBuilder>;
