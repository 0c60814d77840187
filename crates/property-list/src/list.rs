use json_aware::JsonAware;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{kind_of, PropertyListError};
use crate::property::Property;

/// Insertion-ordered list of [`Property`] entries with keyed lookup.
///
/// Keys are not required to be unique. [`PropertyList::set_property`] never
/// creates a duplicate, but [`PropertyList::push`] and the `From` / collect
/// constructors store whatever they are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyList {
    entries: Vec<Property>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Sequence access ─────────────────────────────────────────────────

    /// Append `property` at the end, even if its key is already present.
    pub fn push(&mut self, property: Property) {
        self.entries.push(property);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Property> {
        self.entries.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Property> {
        self.entries.get(index)
    }

    pub fn first(&self) -> Option<&Property> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&Property> {
        self.entries.last()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.entries
    }

    pub fn into_inner(self) -> Vec<Property> {
        self.entries
    }

    /// Keys in list order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Property::key)
    }

    // ── Keyed access ────────────────────────────────────────────────────

    /// Value of the first entry whose key equals `property_name` exactly.
    pub fn get_value(&self, property_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.key() == property_name)
            .map(Property::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }

    /// Upsert: overwrite the value of the first entry keyed `key`, keeping its
    /// position, or append a new entry when no entry matches.
    ///
    /// Later entries sharing the key are left untouched.
    pub fn set_property(&mut self, key: &str, value: impl Into<String>) {
        if let Some((index, property)) = self
            .entries
            .iter_mut()
            .enumerate()
            .find(|(_, p)| p.key() == key)
        {
            property.set_value(value);
            tracing::trace!(key, index, "updated property in place");
            return;
        }
        self.entries.push(Property::new(key, value));
        tracing::trace!(key, index = self.entries.len() - 1, "appended property");
    }

    // ── JSON ────────────────────────────────────────────────────────────

    /// Object body of [`JsonAware::to_json`].
    ///
    /// Entries are inserted in list order, so a later duplicate overwrites the
    /// value of an earlier one while the field stays where it first appeared.
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for property in &self.entries {
            map.insert(
                property.key().to_string(),
                Value::String(property.value().to_string()),
            );
        }
        map
    }

    /// Build a list from a flat JSON object of string fields, in field order.
    pub fn from_json(json: &Value) -> Result<Self, PropertyListError> {
        let Value::Object(map) = json else {
            let found = kind_of(json);
            tracing::debug!(found, "rejected property list json");
            return Err(PropertyListError::NotAnObject { found });
        };
        map.iter()
            .map(|(key, value)| match value {
                Value::String(value) => Ok(Property::new(key.as_str(), value.as_str())),
                other => {
                    tracing::debug!(
                        key = key.as_str(),
                        found = kind_of(other),
                        "rejected property value"
                    );
                    Err(PropertyListError::NonStringValue { key: key.clone() })
                }
            })
            .collect()
    }
}

impl JsonAware for PropertyList {
    fn to_json(&self) -> Value {
        Value::Object(self.to_json_map())
    }
}

// ── Construction / iteration ────────────────────────────────────────────

impl From<Vec<Property>> for PropertyList {
    fn from(entries: Vec<Property>) -> Self {
        Self { entries }
    }
}

impl<const N: usize> From<[Property; N]> for PropertyList {
    fn from(entries: [Property; N]) -> Self {
        Self {
            entries: Vec::from(entries),
        }
    }
}

impl From<PropertyList> for Vec<Property> {
    fn from(list: PropertyList) -> Self {
        list.entries
    }
}

impl FromIterator<Property> for PropertyList {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().map(Property::from).collect()
    }
}

impl Extend<Property> for PropertyList {
    fn extend<I: IntoIterator<Item = Property>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for PropertyList {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut PropertyList {
    type Item = &'a mut Property;
    type IntoIter = std::slice::IterMut<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}
