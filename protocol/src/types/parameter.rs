use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::Serialize;

/// A single decoded contract field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(i64),
    /// Base58check address text.
    Address(String),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn is_empty_string(&self) -> bool {
        match self {
            ParamValue::Text(s) | ParamValue::Address(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) | ParamValue::Address(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_owned())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Number(i64::from(n))
    }
}

/// Field name to decoded value, built fresh for every decode call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecodedParameters(BTreeMap<String, ParamValue>);

impl DecodedParameters {
    pub fn new() -> Self {
        DecodedParameters(BTreeMap::new())
    }

    pub fn insert<V: Into<ParamValue>>(&mut self, name: &str, value: V) {
        self.0.insert(name.to_owned(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Sparse form: absence means "not set".
    pub fn without_empty(mut self) -> Self {
        self.0.retain(|_, value| !value.is_empty_string());
        self
    }

    pub fn into_inner(self) -> BTreeMap<String, ParamValue> {
        self.0
    }
}

impl FromIterator<(String, ParamValue)> for DecodedParameters {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        DecodedParameters(iter.into_iter().collect())
    }
}
