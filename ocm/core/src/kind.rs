//! Kind discriminator for top-level resources.
//!
//! Every resource of the API (clusters, machine pools, versions, ...) is
//! written with a leading `kind` field. The value tells the reader whether the
//! document is the full representation of the object (`Cluster`) or just a
//! reference to it (`ClusterLink`). A missing object is reported as
//! `ClusterNil`, which never appears on the wire but is returned by
//! [`Resource::kind_of`] for `None`.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A top-level API resource, identified by `id` and `href`.
///
/// The associated constants are the closed set of kind names for the type and
/// for lists of the type.
pub trait Resource {
    /// Kind of the full representation, e.g. `Cluster`.
    const KIND: &'static str;
    /// Kind of a reference, e.g. `ClusterLink`.
    const LINK_KIND: &'static str;
    /// Kind reported for a missing object, e.g. `ClusterNil`.
    const NIL_KIND: &'static str;
    /// Kind of a list of objects, e.g. `ClusterList`.
    const LIST_KIND: &'static str;
    /// Kind of a reference to a list, e.g. `ClusterListLink`.
    const LIST_LINK_KIND: &'static str;
    /// Kind reported for a missing list, e.g. `ClusterListNil`.
    const LIST_NIL_KIND: &'static str;

    /// Returns `true` if this value is only a link to the real object.
    fn is_link(&self) -> bool;

    /// Returns the kind name for an optional object.
    ///
    /// ```
    /// use ocm_model_core::Resource;
    ///
    /// struct Widget(bool);
    ///
    /// impl Resource for Widget {
    ///     const KIND: &'static str = "Widget";
    ///     const LINK_KIND: &'static str = "WidgetLink";
    ///     const NIL_KIND: &'static str = "WidgetNil";
    ///     const LIST_KIND: &'static str = "WidgetList";
    ///     const LIST_LINK_KIND: &'static str = "WidgetListLink";
    ///     const LIST_NIL_KIND: &'static str = "WidgetListNil";
    ///
    ///     fn is_link(&self) -> bool {
    ///         self.0
    ///     }
    /// }
    ///
    /// assert_eq!(Widget::kind_of(None), "WidgetNil");
    /// assert_eq!(Widget::kind_of(Some(&Widget(true))), "WidgetLink");
    /// assert_eq!(Widget::kind_of(Some(&Widget(false))), "Widget");
    /// ```
    fn kind_of(object: Option<&Self>) -> &'static str
    where
        Self: Sized,
    {
        match object {
            None => Self::NIL_KIND,
            Some(object) if object.is_link() => Self::LINK_KIND,
            Some(_) => Self::KIND,
        }
    }
}

/// The link flag of a resource, carried on the wire as its `kind` field.
///
/// Serializes to `T::LINK_KIND` when set and to `T::KIND` otherwise. When
/// reading, only `T::LINK_KIND` sets the flag; any other string, or `null`, is
/// taken as the full representation.
pub struct KindTag<T> {
    link: bool,
    _resource: PhantomData<fn() -> T>,
}

impl<T> KindTag<T> {
    /// Creates a tag with the given link flag.
    pub const fn new(link: bool) -> Self {
        Self {
            link,
            _resource: PhantomData,
        }
    }

    /// Returns `true` if the tagged object is a link.
    pub const fn is_link(&self) -> bool {
        self.link
    }
}

// Manual impls: the derives would put bounds on `T`, which is the tagged
// resource itself.
impl<T> Clone for KindTag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for KindTag<T> {}

impl<T> Default for KindTag<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T> PartialEq for KindTag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl<T> Eq for KindTag<T> {}

impl<T> fmt::Debug for KindTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindTag").field("link", &self.link).finish()
    }
}

impl<T: Resource> Serialize for KindTag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = if self.link { T::LINK_KIND } else { T::KIND };
        serializer.serialize_str(kind)
    }
}

impl<'de, T: Resource> Deserialize<'de> for KindTag<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = Option::<String>::deserialize(deserializer)?;
        Ok(Self::new(kind.as_deref() == Some(T::LINK_KIND)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal resource used by the tests of this crate.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub(crate) struct Widget {
        pub(crate) kind: KindTag<Widget>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub(crate) id: Option<String>,
    }

    impl Resource for Widget {
        const KIND: &'static str = "Widget";
        const LINK_KIND: &'static str = "WidgetLink";
        const NIL_KIND: &'static str = "WidgetNil";
        const LIST_KIND: &'static str = "WidgetList";
        const LIST_LINK_KIND: &'static str = "WidgetListLink";
        const LIST_NIL_KIND: &'static str = "WidgetListNil";

        fn is_link(&self) -> bool {
            self.kind.is_link()
        }
    }

    pub(crate) fn widget(id: &str) -> Widget {
        Widget {
            kind: KindTag::new(false),
            id: Some(id.to_string()),
        }
    }

    #[test]
    fn kind_written_first() {
        let json = serde_json::to_string(&widget("123")).unwrap();
        assert_eq!(json, r#"{"kind":"Widget","id":"123"}"#);
    }

    #[test]
    fn link_kind_written_for_links() {
        let link = Widget {
            kind: KindTag::new(true),
            id: Some("123".to_string()),
        };
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"kind":"WidgetLink","id":"123"}"#);
    }

    #[test]
    fn only_link_kind_sets_the_flag() {
        let link: Widget = serde_json::from_str(r#"{"kind":"WidgetLink"}"#).unwrap();
        assert!(link.is_link());

        for kind in ["Widget", "WidgetNil", "Gadget"] {
            let json = format!(r#"{{"kind":"{kind}"}}"#);
            let parsed: Widget = serde_json::from_str(&json).unwrap();
            assert!(!parsed.is_link(), "{kind} must not be a link");
        }
    }

    #[test]
    fn missing_kind_is_not_a_link() {
        let parsed: Widget = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert!(!parsed.is_link());
        assert_eq!(parsed.id.as_deref(), Some("abc"));
    }

    #[test]
    fn null_kind_is_not_a_link() {
        let parsed: Widget = serde_json::from_str(r#"{"kind":null,"id":"abc"}"#).unwrap();
        assert!(!parsed.is_link());
        assert_eq!(parsed, widget("abc"));
    }

    #[test]
    fn kind_of_covers_nil_link_and_full() {
        assert_eq!(Widget::kind_of(None), "WidgetNil");
        assert_eq!(Widget::kind_of(Some(&widget("1"))), "Widget");

        let link = Widget {
            kind: KindTag::new(true),
            id: None,
        };
        assert_eq!(Widget::kind_of(Some(&link)), "WidgetLink");
    }
}
