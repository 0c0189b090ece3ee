use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of field name to field value.
///
/// Insertion order is kept, so a snapshot extracted from a form lists the
/// fields in document order.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: IndexMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        FormSnapshot::default()
    }

    /// Set the value for a field, keeping its original position if the
    /// name was already present.
    ///
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over name/value pairs in insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a snapshot from JSON or YAML text. JSON is a subset of YAML,
    /// so the YAML parser accepts both.
    ///
    pub fn from_text(text: &str) -> Result<FormSnapshot, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Parse a `name=value` pair as given on the command line.
    ///
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_owned(), value.to_owned()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        FormSnapshot {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
