//! Types for decoded call data and return data.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

use crate::types::DecodedValue;

/// Positional collection of decoded values.
///
/// Serializes as `{"0": v0, "1": v1, ..., "_length": n}` for consumers
/// that index results by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedValues {
    items: Vec<DecodedValue>,
}

impl DecodedValues {
    pub fn new(items: Vec<DecodedValue>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DecodedValue> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecodedValue> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<DecodedValue> {
        self.items
    }
}

impl Index<usize> for DecodedValues {
    type Output = DecodedValue;

    fn index(&self, index: usize) -> &DecodedValue {
        &self.items[index]
    }
}

impl From<Vec<DecodedValue>> for DecodedValues {
    fn from(items: Vec<DecodedValue>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a DecodedValues {
    type Item = &'a DecodedValue;
    type IntoIter = std::slice::Iter<'a, DecodedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for DecodedValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len() + 1))?;
        for (i, v) in self.items.iter().enumerate() {
            map.serialize_entry(&i.to_string(), v)?;
        }
        map.serialize_entry("_length", &self.items.len())?;
        map.end()
    }
}

/// Result of decoding the inputs or outputs of one function call.
///
/// `parameter_names`, `parameter_types` and `values` always have the same
/// length. When no ABI entry matched the selector, `method_name` is `None`
/// and all three are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCall {
    pub method_name: Option<String>,
    /// Declared names; `None` for unnamed slots and tuple arrays.
    pub parameter_names: Vec<Option<String>>,
    /// Canonical type strings, e.g. `address`, `(uint256,address)[]`.
    pub parameter_types: Vec<String>,
    pub values: DecodedValues,
}

impl DecodedCall {
    /// The "no ABI entry matched" result.
    pub fn unmatched() -> Self {
        Self::default()
    }

    /// A matched function whose declared parameter list is empty or absent.
    pub fn empty(method_name: impl Into<String>) -> Self {
        Self {
            method_name: Some(method_name.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if an ABI entry matched the selector.
    pub fn is_match(&self) -> bool {
        self.method_name.is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a decoded value by declared parameter name.
    pub fn value(&self, name: &str) -> Option<&DecodedValue> {
        self.parameter_names
            .iter()
            .position(|n| n.as_deref() == Some(name))
            .and_then(|i| self.values.get(i))
    }

    /// `(name, type, value)` triples in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&str>, &str, &DecodedValue)> {
        self.parameter_names
            .iter()
            .zip(&self.parameter_types)
            .zip(&self.values)
            .map(|((n, t), v)| (n.as_deref(), t.as_str(), v))
    }
}

/// Result of decoding a call's return data.
///
/// When the node substituted a failure message for the return data, the
/// message is returned as-is instead of a value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum DecodedOutput {
    Values(DecodedCall),
    FailureMessage(String),
}

impl DecodedOutput {
    pub fn as_call(&self) -> Option<&DecodedCall> {
        match self {
            Self::Values(call) => Some(call),
            Self::FailureMessage(_) => None,
        }
    }

    pub fn as_failure_message(&self) -> Option<&str> {
        match self {
            Self::FailureMessage(m) => Some(m),
            Self::Values(_) => None,
        }
    }
}
