//! Shared primitives for the OCM client model.
//!
//! The model crate (`ocm-api-model`) declares hundreds of attributes across
//! dozens of types. Everything those types have in common lives here:
//!
//! - [`Resource`] and [`KindTag`] - the `kind` discriminator of top-level
//!   resources (`Cluster`, `ClusterLink`, `ClusterNil`)
//! - [`List`], [`ListBuilder`] and [`OptionalList`] - list-valued attributes
//!   with their `href` and link flag
//! - [`ObjectBuilder`] - the builder contract (`is_empty`, `copy`, `build`)
//!   and the helpers for nested builders in [`builder`]
//! - [`string_enum!`] - open string enumerations such as `ClusterState`
//! - [`codec`] - `marshal`/`unmarshal` over strings, bytes and readers
//! - [`BuildError`], [`CodecError`] and [`Error`]
//!
//! Attributes themselves are plain `Option<T>` fields: `None` is "not set",
//! which replaces the presence bitmaps of other client generators.

pub mod builder;
pub mod codec;
pub mod enums;
pub mod error;
pub mod kind;
pub mod list;

use std::collections::BTreeMap;

pub use builder::ObjectBuilder;
pub use error::{BuildError, CodecError, Error};
pub use kind::{KindTag, Resource};
pub use list::{List, ListBuilder, OptionalList};

/// The empty string map, returned by map accessors of unset attributes.
pub fn empty_map() -> &'static BTreeMap<String, String> {
    static EMPTY: BTreeMap<String, String> = BTreeMap::new();
    &EMPTY
}

/// Items most code working with the model needs in scope.
pub mod prelude {
    pub use crate::builder::ObjectBuilder;
    pub use crate::codec::{Source, marshal, marshal_list, unmarshal, unmarshal_list};
    pub use crate::kind::Resource;
    pub use crate::list::{List, ListBuilder, OptionalList};
}
