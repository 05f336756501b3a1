//! Lenient JSON ABI model.
//!
//! Pasted ABIs come from anywhere: compiler artifacts, block explorers, hand-written files.
//! Deserialization therefore defaults every missing, null or wrong-typed field and only fails
//! when the input is not JSON. Items with a `type` this model does not know are kept as
//! [`ItemKind::Unknown`]. After parsing, items are normalized so that `mutability` only exists
//! on functions and `indexed` only exists on event inputs.

use alloy_json_abi::StateMutability;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;

/// Name substituted for unnamed items.
pub const ANONYMOUS: &str = "anonymous";

/// Errors that can occur while parsing a pasted ABI.
#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    /// The input is not valid JSON or does not describe ABI items.
    #[error("ABI JSON format invalid: {0}")]
    InvalidFormat(#[from] serde_json::Error),
    /// The JSON is neither an array of items nor an artifact with an `abi` array.
    #[error("ABI JSON format invalid: expected an array of items or an object with an `abi` array")]
    UnexpectedShape,
}

/// The `type` discriminator of an ABI item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Function,
    Event,
    Error,
    Constructor,
    Receive,
    Fallback,
    /// Any other `type`, e.g. the `modifier` entries some old toolchains emit.
    Unknown,
}

impl ItemKind {
    /// Parses a JSON ABI `type` value. Unrecognized values map to [`ItemKind::Unknown`].
    pub fn from_type(ty: &str) -> Self {
        match ty {
            "function" => Self::Function,
            "event" => Self::Event,
            "error" => Self::Error,
            "constructor" => Self::Constructor,
            "receive" => Self::Receive,
            "fallback" => Self::Fallback,
            _ => Self::Unknown,
        }
    }

    /// Returns the JSON ABI spelling of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Event => "event",
            Self::Error => "error",
            Self::Constructor => "constructor",
            Self::Receive => "receive",
            Self::Fallback => "fallback",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function/event/error parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub ty: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    /// Only meaningful for event inputs.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Self>,
}

impl AbiParam {
    /// Creates a new parameter with the given name and type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into(), ..Default::default() }
    }

    /// Sets the `internalType` of the parameter.
    pub fn internal_type(mut self, internal_type: impl Into<String>) -> Self {
        self.internal_type = Some(internal_type.into());
        self
    }

    /// Sets the `indexed` flag of the parameter.
    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = Some(indexed);
        self
    }

    /// Returns the canonical type of the parameter, expanding tuples into their components.
    pub fn canonical_type(&self) -> String {
        match self.ty.strip_prefix("tuple") {
            Some(suffix) if !self.components.is_empty() => {
                format!("({}){suffix}", self.components.iter().map(Self::canonical_type).join(","))
            }
            _ => self.ty.clone(),
        }
    }
}

/// A single entry of a JSON ABI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAbiItem")]
pub struct AbiItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inputs: Vec<AbiParam>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<AbiParam>,
    /// Present only when `kind` is [`ItemKind::Function`].
    #[serde(rename = "stateMutability", skip_serializing_if = "Option::is_none")]
    pub mutability: Option<StateMutability>,
    /// Present only when `kind` is [`ItemKind::Event`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
}

impl AbiItem {
    /// Creates a new item of the given kind.
    pub fn new(kind: ItemKind) -> Self {
        Self { kind, ..Default::default() }
    }

    /// Creates a new function item.
    pub fn function(name: impl Into<String>, mutability: StateMutability) -> Self {
        Self { name: Some(name.into()), mutability: Some(mutability), ..Self::new(ItemKind::Function) }
    }

    /// Creates a new event item.
    pub fn event(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), anonymous: Some(false), ..Self::new(ItemKind::Event) }
    }

    /// Sets the name of the item.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends an input parameter.
    pub fn input(mut self, param: AbiParam) -> Self {
        self.inputs.push(param);
        self
    }

    /// Appends an output parameter.
    pub fn output(mut self, param: AbiParam) -> Self {
        self.outputs.push(param);
        self
    }

    /// Returns true if this is a function.
    pub fn is_function(&self) -> bool {
        self.kind == ItemKind::Function
    }

    /// Returns true if this is an event.
    pub fn is_event(&self) -> bool {
        self.kind == ItemKind::Event
    }

    /// Returns true if calling this item does not modify state, i.e. its mutability is `pure`
    /// or `view`. A missing mutability counts as a write.
    pub fn is_read(&self) -> bool {
        matches!(self.mutability, Some(StateMutability::Pure | StateMutability::View))
    }

    /// Returns the name of the item, or [`ANONYMOUS`] if it has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(ANONYMOUS)
    }

    /// Returns the human readable signature, e.g. `balanceOf(address)`.
    pub fn signature(&self) -> String {
        let inputs = self.inputs.iter().map(AbiParam::canonical_type).join(",");
        match self.kind {
            ItemKind::Function | ItemKind::Event | ItemKind::Error => {
                format!("{}({inputs})", self.display_name())
            }
            kind => format!("{kind}({inputs})"),
        }
    }

    /// Enforces the per-kind field invariants.
    fn normalize(mut self) -> Self {
        if !self.is_function() {
            self.mutability = None;
        }
        if !self.is_event() {
            self.anonymous = None;
            for input in &mut self.inputs {
                input.indexed = None;
            }
        }
        for output in &mut self.outputs {
            output.indexed = None;
        }
        self
    }
}

/// Returns the JSON ABI spelling of a state mutability.
pub fn mutability_str(mutability: StateMutability) -> &'static str {
    match mutability {
        StateMutability::Pure => "pure",
        StateMutability::View => "view",
        StateMutability::NonPayable => "nonpayable",
        StateMutability::Payable => "payable",
    }
}

/// Parses a `stateMutability` value, accepting the legacy `constant` spelling as `view`.
fn parse_mutability(s: &str) -> Option<StateMutability> {
    match s {
        "pure" => Some(StateMutability::Pure),
        "view" | "constant" => Some(StateMutability::View),
        "nonpayable" => Some(StateMutability::NonPayable),
        "payable" => Some(StateMutability::Payable),
        _ => None,
    }
}

/// Deserializes a field, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`], but falls back to the type's default.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// Wire shape of an item, including the pre-0.6 `constant` and `payable` flags.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAbiItem {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    inputs: Option<Vec<AbiParam>>,
    #[serde(default, deserialize_with = "lenient")]
    outputs: Option<Vec<AbiParam>>,
    #[serde(default, deserialize_with = "lenient")]
    state_mutability: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    constant: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    payable: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    anonymous: Option<bool>,
}

impl From<RawAbiItem> for AbiItem {
    fn from(raw: RawAbiItem) -> Self {
        let declared = raw.state_mutability.as_deref().and_then(parse_mutability);
        let mutability = declared.or_else(|| match (raw.constant, raw.payable) {
            (Some(true), _) => Some(StateMutability::View),
            (_, Some(true)) => Some(StateMutability::Payable),
            (Some(false), _) | (_, Some(false)) => Some(StateMutability::NonPayable),
            _ => None,
        });
        Self {
            kind: raw.kind.as_deref().map(ItemKind::from_type).unwrap_or_default(),
            name: raw.name,
            inputs: raw.inputs.unwrap_or_default(),
            outputs: raw.outputs.unwrap_or_default(),
            mutability,
            anonymous: raw.anonymous,
        }
        .normalize()
    }
}

/// Parses a pasted ABI.
///
/// Accepts either a JSON array of items or a compiler artifact object with an `abi` field.
/// Array entries that are not JSON objects are skipped.
pub fn parse_abi(json: &str) -> Result<Vec<AbiItem>, AbiError> {
    let value: Value = serde_json::from_str(json)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut artifact) => match artifact.remove("abi") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(AbiError::UnexpectedShape),
        },
        _ => return Err(AbiError::UnexpectedShape),
    };
    let total = entries.len();
    let items: Vec<AbiItem> = entries
        .into_iter()
        .filter(Value::is_object)
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()?;
    if items.len() < total {
        debug!(skipped = total - items.len(), "skipped non-object abi entries");
    }
    trace!(items = items.len(), "parsed abi");
    Ok(items)
}
