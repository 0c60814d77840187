//! property-list - an insertion-ordered list of key/value text properties.
//!
//! # Types
//!
//! | Rust type           | Semantics                                           |
//! |---------------------|-----------------------------------------------------|
//! | [`Property`]        | One owned `key` / `value` text pair                 |
//! | [`PropertyList`]    | Ordered `Vec<Property>` with keyed lookup + upsert  |
//! | [`PropertyListError`] | Rejections from [`PropertyList::from_json`]       |
//!
//! The list is not a map: duplicate keys can enter through [`PropertyList::push`]
//! or construction from a sequence. [`PropertyList::get_value`] resolves them
//! first-match-wins while the JSON export ([`JsonAware::to_json`]) resolves
//! them last-write-wins.
//!
//! ```
//! use property_list::{JsonAware, PropertyList};
//! use serde_json::json;
//!
//! let mut props = PropertyList::new();
//! props.set_property("a", "1");
//! props.set_property("b", "2");
//! props.set_property("a", "3");
//!
//! assert_eq!(props.get_value("a"), Some("3"));
//! assert_eq!(props.len(), 2);
//! assert_eq!(props.to_json(), json!({"a": "3", "b": "2"}));
//! ```

mod error;
mod list;
mod property;

pub use error::PropertyListError;
pub use json_aware::JsonAware;
pub use list::PropertyList;
pub use property::Property;
