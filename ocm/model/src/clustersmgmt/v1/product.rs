use ocm_model_core::{BuildError, KindTag, List, ListBuilder, ObjectBuilder, Resource};
use serde::{Deserialize, Serialize};

/// Representation of an product that can be selected as a cluster type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    kind: KindTag<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Resource for Product {
    const KIND: &'static str = "Product";
    const LINK_KIND: &'static str = "ProductLink";
    const NIL_KIND: &'static str = "ProductNil";
    const LIST_KIND: &'static str = "ProductList";
    const LIST_LINK_KIND: &'static str = "ProductListLink";
    const LIST_NIL_KIND: &'static str = "ProductListNil";

    fn is_link(&self) -> bool {
        self.kind.is_link()
    }
}

impl Product {
    /// Returns a builder for this type.
    pub fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }

    /// Returns `ProductLink` for links and `Product` otherwise.
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
        self.id.is_none() && self.href.is_none() && self.name.is_none()
    }

    /// Name of the product.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Builder for [`Product`].
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    link: bool,
    id: Option<String>,
    href: Option<String>,
    name: Option<String>,
}

impl ProductBuilder {
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

    /// Name of the product.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
}

impl ObjectBuilder for ProductBuilder {
    type Object = Product;

    fn is_empty(&self) -> bool {
        self.id.is_none() && self.href.is_none() && self.name.is_none()
    }

    fn copy(self, object: &Product) -> Self {
        Self {
            link: object.link(),
            id: object.id.clone(),
            href: object.href.clone(),
            name: object.name.clone(),
        }
    }

    fn build(&self) -> Result<Product, BuildError> {
        Ok(Product {
            kind: KindTag::new(self.link),
            id: self.id.clone(),
            href: self.href.clone(),
            name: self.name.clone(),
        })
    }
}

/// A list of [`Product`] objects.
pub type ProductList = List<Product>;

/// Builder for [`ProductList`].
pub type ProductListBuilder = ListBuilder<ProductBuilder>;
