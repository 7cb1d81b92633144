//! Lists of resources.
//!
//! A list-valued attribute such as `cluster.machine_pools` is not a bare JSON
//! array: it can be a link to the collection, so it carries its own kind and
//! `href` next to the items.
//!
//! ```json
//! {
//!   "kind": "MachinePoolListLink",
//!   "href": "/api/clusters_mgmt/v1/clusters/123/machine_pools"
//! }
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::ObjectBuilder;
use crate::error::BuildError;
use crate::kind::Resource;

/// An immutable list of model objects.
#[derive(Clone, PartialEq)]
pub struct List<T> {
    link: bool,
    href: Option<String>,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: None,
            items: Vec::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("link", &self.link)
            .field("href", &self.href)
            .field("items", &self.items)
            .finish()
    }
}

impl<T> List<T> {
    /// Returns `true` if this list is only a link to the collection.
    pub fn link(&self) -> bool {
        self.link
    }

    /// Returns the link to the collection, or an empty string.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    /// Returns the link to the collection if it has one.
    pub fn get_href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Borrows the items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns a copy of the items.
    ///
    /// Prefer [`each`](Self::each), [`range`](Self::range) or
    /// [`iter`](Self::iter) when the copy isn't needed.
    pub fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Calls `f` for every item in order until it returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Calls `f` with the index and item in order until it returns `false`.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }

    /// Iterates over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Resource> List<T> {
    /// Returns `ClusterList` or `ClusterListLink` (for a list of clusters).
    pub fn kind(&self) -> &'static str {
        Self::kind_of(Some(self))
    }

    /// Returns the kind name for an optional list, `ClusterListNil` for `None`.
    pub fn kind_of(list: Option<&Self>) -> &'static str {
        match list {
            None => T::LIST_NIL_KIND,
            Some(list) if list.link => T::LIST_LINK_KIND,
            Some(_) => T::LIST_KIND,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// List operations on an optional list, treating `None` as empty.
///
/// Model accessors return `Option<&List<T>>`; this trait lets callers query
/// the result without unwrapping it first.
pub trait OptionalList<T> {
    /// Number of items, zero for `None`.
    fn len(&self) -> usize;
    /// Returns `true` for `None` or an empty list.
    fn is_empty(&self) -> bool;
    /// Returns the item at `index`, `None` for a missing list.
    fn get(&self, index: usize) -> Option<&T>;
    /// Copy of the items, empty for `None`.
    fn slice(&self) -> Vec<T>
    where
        T: Clone;
    /// See [`List::each`]; does nothing for `None`.
    fn each<F: FnMut(&T) -> bool>(&self, f: F);
    /// See [`List::range`]; does nothing for `None`.
    fn range<F: FnMut(usize, &T) -> bool>(&self, f: F);
}

impl<T> OptionalList<T> for Option<&List<T>> {
    fn len(&self) -> usize {
        self.map_or(0, List::len)
    }

    fn is_empty(&self) -> bool {
        self.is_none_or(|list| list.is_empty())
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.and_then(|list| list.get(index))
    }

    fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.map(List::slice).unwrap_or_default()
    }

    fn each<F: FnMut(&T) -> bool>(&self, f: F) {
        if let Some(list) = self {
            list.each(f);
        }
    }

    fn range<F: FnMut(usize, &T) -> bool>(&self, f: F) {
        if let Some(list) = self {
            list.range(f);
        }
    }
}

impl<T: Resource + Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let write_items = !(self.link && self.items.is_empty());
        let len = 1 + usize::from(self.href.is_some()) + usize::from(write_items);
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("kind", self.kind())?;
        if let Some(href) = &self.href {
            map.serialize_entry("href", href)?;
        }
        if write_items {
            map.serialize_entry("items", &self.items)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct WireList<T> {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl<'de, T: Resource + DeserializeOwned> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireList::<T>::deserialize(deserializer)?;
        Ok(Self {
            link: wire.kind.as_deref() == Some(T::LIST_LINK_KIND),
            href: wire.href,
            items: wire.items,
        })
    }
}

/// Builder for [`List`].
#[derive(Debug, Clone)]
pub struct ListBuilder<B> {
    link: bool,
    href: Option<String>,
    items: Vec<B>,
}

impl<B> Default for ListBuilder<B> {
    fn default() -> Self {
        Self {
            link: false,
            href: None,
            items: Vec::new(),
        }
    }
}

impl<B> ListBuilder<B> {
    /// Creates an empty list builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag that indicates if this is a link.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    /// Sets the link to the collection.
    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// Replaces the items.
    pub fn items<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = B>,
    {
        self.items = values.into_iter().collect();
        self
    }

    /// Appends one item.
    pub fn push(mut self, value: B) -> Self {
        self.items.push(value);
        self
    }
}

impl<B: ObjectBuilder> ObjectBuilder for ListBuilder<B> {
    type Object = List<B::Object>;

    /// Only the items count: a builder holding just an `href` or the link
    /// flag is still empty.
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn copy(self, list: &List<B::Object>) -> Self {
        Self {
            link: list.link,
            href: list.href.clone(),
            items: list
                .items
                .iter()
                .map(|item| B::default().copy(item))
                .collect(),
        }
    }

    fn build(&self) -> Result<List<B::Object>, BuildError> {
        let items = self
            .items
            .iter()
            .map(|item| item.build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(List {
            link: self.link,
            href: self.href.clone(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindTag;
    use crate::kind::tests::{Widget, widget};

    #[derive(Debug, Clone, Default)]
    struct WidgetBuilder {
        link: bool,
        id: Option<String>,
    }

    impl ObjectBuilder for WidgetBuilder {
        type Object = Widget;

        fn is_empty(&self) -> bool {
            self.id.is_none()
        }

        fn copy(self, object: &Widget) -> Self {
            Self {
                link: object.is_link(),
                id: object.id.clone(),
            }
        }

        fn build(&self) -> Result<Widget, BuildError> {
            Ok(Widget {
                kind: KindTag::new(self.link),
                id: self.id.clone(),
            })
        }
    }

    fn widgets(ids: &[&str]) -> List<Widget> {
        List {
            link: false,
            href: None,
            items: ids.iter().map(|id| widget(id)).collect(),
        }
    }

    #[test]
    fn get_is_bounds_checked() {
        let list = widgets(&["a", "b"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).and_then(|w| w.id.as_deref()), Some("b"));
        assert!(list.get(2).is_none());
    }

    #[test]
    fn slice_is_a_copy() {
        let list = widgets(&["a"]);
        let mut copy = list.slice();
        copy.push(widget("b"));
        copy[0].id = Some("changed".to_string());

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).and_then(|w| w.id.as_deref()), Some("a"));
    }

    #[test]
    fn each_and_range_stop_early() {
        let list = widgets(&["a", "b", "c"]);

        let mut seen = Vec::new();
        list.each(|w| {
            seen.push(w.id.clone().unwrap_or_default());
            seen.len() < 2
        });
        assert_eq!(seen, vec!["a", "b"]);

        let mut indexes = Vec::new();
        list.range(|index, _| {
            indexes.push(index);
            index != 0
        });
        assert_eq!(indexes, vec![0]);
    }

    #[test]
    fn missing_list_behaves_as_empty() {
        let missing: Option<&List<Widget>> = None;
        assert_eq!(missing.len(), 0);
        assert!(missing.is_empty());
        assert!(missing.get(0).is_none());
        assert!(missing.slice().is_empty());

        let mut calls = 0;
        missing.each(|_| {
            calls += 1;
            true
        });
        missing.range(|_, _| {
            calls += 1;
            true
        });
        assert_eq!(calls, 0);
        assert_eq!(List::<Widget>::kind_of(missing), "WidgetListNil");
    }

    #[test]
    fn present_list_through_option() {
        let list = widgets(&["a", "b"]);
        let present = Some(&list);
        assert_eq!(present.len(), 2);
        assert!(!present.is_empty());
        assert!(present.get(1).is_some());
    }

    #[test]
    fn serializes_kind_href_and_items() {
        let list = ListBuilder::<WidgetBuilder>::new()
            .href("/widgets")
            .push(WidgetBuilder::default().copy(&widget("a")))
            .build()
            .unwrap();

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"WidgetList","href":"/widgets","items":[{"kind":"Widget","id":"a"}]}"#
        );
    }

    #[test]
    fn empty_link_list_omits_items() {
        let list = ListBuilder::<WidgetBuilder>::new()
            .link(true)
            .href("/widgets")
            .build()
            .unwrap();
        assert_eq!(list.kind(), "WidgetListLink");

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"{"kind":"WidgetListLink","href":"/widgets"}"#);

        let parsed: List<Widget> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn reads_ignore_paging_fields() {
        let json = r#"{"kind":"WidgetList","page":1,"size":1,"total":9,"items":[{"id":"x"}]}"#;
        let parsed: List<Widget> = serde_json::from_str(json).unwrap();
        assert!(!parsed.link());
        assert_eq!(parsed.get_href(), None);
        assert_eq!(parsed.href(), "");
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn builder_copy_and_build_round_trip() {
        let list = ListBuilder::<WidgetBuilder>::new()
            .href("/widgets")
            .items(vec![
                WidgetBuilder::default().copy(&widget("a")),
                WidgetBuilder::default().copy(&widget("b")),
            ])
            .build()
            .unwrap();

        let rebuilt = ListBuilder::<WidgetBuilder>::new().copy(&list).build().unwrap();
        assert_eq!(rebuilt, list);
    }

    #[test]
    fn builder_is_empty_looks_at_items_only() {
        let builder = ListBuilder::<WidgetBuilder>::new().link(true).href("/x");
        assert!(builder.is_empty());
        assert!(!builder.push(WidgetBuilder::default()).is_empty());
    }

    #[test]
    fn bare_link_items_build() {
        let bare = WidgetBuilder {
            link: true,
            id: None,
        };
        let list = ListBuilder::new().push(bare).build().unwrap();
        assert!(list.get(0).is_some_and(Widget::is_link));
        assert_eq!(list.get(0).and_then(|w| w.id.as_deref()), None);
    }
}
