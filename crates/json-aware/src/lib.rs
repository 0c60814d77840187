//! json-aware - the "convertible to JSON" capability.
//!
//! Types that can present themselves as a [`serde_json::Value`] implement
//! [`JsonAware`]. The trait is a capability, not a base type: anything from a
//! flat property list to a full document model can opt in without sharing
//! any other structure.

use serde_json::Value;

/// A value that can export itself as a generic JSON value.
pub trait JsonAware {
    /// Build a fresh JSON view of `self`.
    fn to_json(&self) -> Value;

    /// Compact JSON text of [`JsonAware::to_json`].
    fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl<T: JsonAware + ?Sized> JsonAware for &T {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

impl<T: JsonAware + ?Sized> JsonAware for Box<T> {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}
