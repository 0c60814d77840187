use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key/value text pair.
///
/// The key is fixed at construction; the value can be replaced in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    key: String,
    value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A property whose value starts out empty.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::new(key, String::new())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Property {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
