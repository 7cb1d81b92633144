use std::collections::BTreeMap;

use ocm_model_core::{empty_map, BuildError, KindTag, List, ListBuilder, ObjectBuilder, Resource};
use serde::{Deserialize, Serialize};

use super::enums::{ListeningMethod, LoadBalancerFlavor};

/// Representation of an ingress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingress {
    kind: KindTag<Ingress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excluded_namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    listening: Option<ListeningMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_balancer_type: Option<LoadBalancerFlavor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route_selectors: Option<BTreeMap<String, String>>,
}

impl Resource for Ingress {
    const KIND: &'static str = "Ingress";
    const LINK_KIND: &'static str = "IngressLink";
    const NIL_KIND: &'static str = "IngressNil";
    const LIST_KIND: &'static str = "IngressList";
    const LIST_LINK_KIND: &'static str = "IngressListLink";
    const LIST_NIL_KIND: &'static str = "IngressListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl Ingress {
    /// Returns a builder for this type.
    pub fn builder() -> IngressBuilder {
        IngressBuilder::new()
    }

    /// Returns `IngressLink` for links and `Ingress` otherwise.
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
            && self.is_default.is_none()
            && self.dns_name.is_none()
            && self.excluded_namespaces.is_none()
            && self.listening.is_none()
            && self.load_balancer_type.is_none()
            && self.route_selectors.is_none()
    }

    /// Indicates if this is the default ingress.
    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or_default()
    }

    pub fn get_default(&self) -> Option<bool> {
        self.is_default
    }

    /// DNS Name of the ingress.
    pub fn dns_name(&self) -> &str {
        self.dns_name.as_deref().unwrap_or_default()
    }

    pub fn get_dns_name(&self) -> Option<&str> {
        self.dns_name.as_deref()
    }

    /// A set of excluded namespaces for the ingress.
    pub fn excluded_namespaces(&self) -> &[String] {
        self.excluded_namespaces.as_deref().unwrap_or_default()
    }

    pub fn get_excluded_namespaces(&self) -> Option<&[String]> {
        self.excluded_namespaces.as_deref()
    }

    /// Listening method of the ingress.
    pub fn listening(&self) -> ListeningMethod {
        self.listening.clone().unwrap_or_default()
    }

    pub fn get_listening(&self) -> Option<&ListeningMethod> {
        self.listening.as_ref()
    }

    /// Load Balancer type of the ingress.
    pub fn load_balancer_type(&self) -> LoadBalancerFlavor {
        self.load_balancer_type.clone().unwrap_or_default()
    }

    pub fn get_load_balancer_type(&self) -> Option<&LoadBalancerFlavor> {
        self.load_balancer_type.as_ref()
    }

    /// A set of labels for the ingress.
    pub fn route_selectors(&self) -> &BTreeMap<String, String> {
        self.route_selectors.as_ref().unwrap_or_else(|| empty_map())
    }

    pub fn get_route_selectors(&self) -> Option<&BTreeMap<String, String>> {
        self.route_selectors.as_ref()
    }
}

/// Builder for [`Ingress`].
#[derive(Debug, Clone, Default)]
pub struct IngressBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    is_default: Option<bool>,
    dns_name: Option<String>,
    excluded_namespaces: Option<Vec<String>>,
    listening: Option<ListeningMethod>,
    load_balancer_type: Option<LoadBalancerFlavor>,
    route_selectors: Option<BTreeMap<String, String>>,
}

impl IngressBuilder {
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

    /// Indicates if this is the default ingress.
    pub fn is_default(mut self, value: bool) -> Self {
        self.is_default = Some(value);
        self
    }

    /// DNS Name of the ingress.
    pub fn dns_name(mut self, value: impl Into<String>) -> Self {
        self.dns_name = Some(value.into());
        self
    }

    /// A set of excluded namespaces for the ingress.
    pub fn excluded_namespaces<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_namespaces = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Listening method of the ingress.
    pub fn listening(mut self, value: impl Into<ListeningMethod>) -> Self {
        self.listening = Some(value.into());
        self
    }

    /// Load Balancer type of the ingress.
    pub fn load_balancer_type(mut self, value: impl Into<LoadBalancerFlavor>) -> Self {
        self.load_balancer_type = Some(value.into());
        self
    }

    /// A set of labels for the ingress.
    pub fn route_selectors<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.route_selectors = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }
}

impl ObjectBuilder for IngressBuilder {
    type Object = Ingress;

    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.is_default.is_none()
            && self.dns_name.is_none()
            && self.excluded_namespaces.is_none()
            && self.listening.is_none()
            && self.load_balancer_type.is_none()
            && self.route_selectors.is_none()
    }

    fn copy(self, object: &Ingress) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            is_default: object.is_default,
            dns_name: object.dns_name.clone(),
            excluded_namespaces: object.excluded_namespaces.clone(),
            listening: object.listening.clone(),
            load_balancer_type: object.load_balancer_type.clone(),
            route_selectors: object.route_selectors.clone(),
        }
    }

    fn build(&self) -> Result<Ingress, BuildError> {
        Ok(Ingress {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            is_default: self.is_default,
            dns_name: self.dns_name.clone(),
            excluded_namespaces: self.excluded_namespaces.clone(),
            listening: self.listening.clone(),
            load_balancer_type: self.load_balancer_type.clone(),
            route_selectors: self.route_selectors.clone(),
        })
    }
}

/// A list of [`Ingress`] objects.
pub type IngressList = List<Ingress>;

/// Builder for [`IngressList`].
pub type IngressListBuilder = ListBuilder<IngressBuilder>;
