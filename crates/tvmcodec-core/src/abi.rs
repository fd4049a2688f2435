//! ABI description types.
//!
//! Entries are supplied as published by the contract, either as a standard
//! JSON ABI array or as the `{"entrys": [...]}` object a full node returns
//! from `getcontract`. They are read, never validated or mutated.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DecodeError;

// ─── EntryKind ────────────────────────────────────────────────────────────────

/// The declared `type` of an ABI entry.
///
/// Matched case-insensitively: full nodes emit `"Function"`, JSON ABIs
/// emit `"function"`. A missing `type` means `function`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EntryKind {
    #[default]
    Function,
    Event,
    Constructor,
    Fallback,
    Receive,
    Error,
    /// Any kind this crate does not know about, kept verbatim.
    Other(String),
}

impl EntryKind {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "function" => Self::Function,
            "event" => Self::Event,
            "constructor" => Self::Constructor,
            "fallback" => Self::Fallback,
            "receive" => Self::Receive,
            "error" => Self::Error,
            _ => Self::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Function => "function",
            Self::Event => "event",
            Self::Constructor => "constructor",
            Self::Fallback => "fallback",
            Self::Receive => "receive",
            Self::Error => "error",
            Self::Other(s) => s,
        }
    }

    /// Only functions take part in selector resolution.
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

// ─── AbiParameter ─────────────────────────────────────────────────────────────

/// One input or output slot of an ABI entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    /// Declared name; often empty or absent, especially on outputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw type string, e.g. `uint256`, `address[]`, `tuple`, `tuple[]`.
    #[serde(rename = "type", default)]
    pub ty: String,
    /// Nested fields, present only for `tuple` and tuple-array types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<AbiParameter>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub indexed: bool,
}

impl AbiParameter {
    /// Build a flat, named parameter.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            components: None,
            indexed: false,
        }
    }

    /// Build a tuple-typed parameter (`ty` is `tuple`, `tuple[]`, `tuple[2]`, ...).
    pub fn tuple(
        name: impl Into<String>,
        ty: impl Into<String>,
        components: Vec<AbiParameter>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            components: Some(components),
            indexed: false,
        }
    }

    /// If this is a tuple type, the array suffix after `tuple`
    /// (`""` for a plain tuple, `"[]"` for a tuple array).
    pub fn tuple_suffix(&self) -> Option<&str> {
        let rest = self.ty.strip_prefix("tuple")?;
        (rest.is_empty() || rest.starts_with('[')).then_some(rest)
    }

    pub fn is_tuple(&self) -> bool {
        self.tuple_suffix().is_some()
    }

    /// `tuple[]`, `tuple[3]`, `tuple[][]`, ...
    pub fn is_tuple_array(&self) -> bool {
        self.tuple_suffix().is_some_and(|s| !s.is_empty())
    }
}

// ─── AbiEntry ─────────────────────────────────────────────────────────────────

/// One item of a contract ABI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParameter>,
    /// `None` when the entry declares no `outputs` field at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<AbiParameter>>,
    #[serde(
        rename = "stateMutability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<String>,
}

impl AbiEntry {
    /// Build a function entry.
    pub fn function(
        name: impl Into<String>,
        inputs: Vec<AbiParameter>,
        outputs: Option<Vec<AbiParameter>>,
    ) -> Self {
        Self {
            kind: EntryKind::Function,
            name: Some(name.into()),
            inputs,
            outputs,
            state_mutability: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AbiDocument {
    Entries(Vec<AbiEntry>),
    Node { entrys: Vec<AbiEntry> },
    Contract { abi: Box<AbiDocument> },
}

impl AbiDocument {
    fn into_entries(self) -> Vec<AbiEntry> {
        match self {
            Self::Entries(entries) | Self::Node { entrys: entries } => entries,
            Self::Contract { abi } => abi.into_entries(),
        }
    }
}

/// Parse an ABI from JSON.
///
/// Accepts a bare array, a full node `{"entrys": [...]}` object, or a
/// `getcontract` response wrapping either under `abi`.
pub fn parse_abi_json(json: &str) -> Result<Vec<AbiEntry>, DecodeError> {
    let doc: AbiDocument = serde_json::from_str(json).map_err(|e| DecodeError::InvalidAbi {
        reason: format!("expected an ABI array or an object with `entrys`: {e}"),
    })?;
    Ok(doc.into_entries())
}
