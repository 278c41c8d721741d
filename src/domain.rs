use std::fmt;

use serde::Deserialize;
use serde::de::Deserializer;
use serde_json::Value;

/// Label of a release line. The upstream encodes it as either a string or a
/// bare number, so the numeric form keeps its literal text (`8.10` must not
/// render as `8.1`).
#[derive(Debug, Clone, PartialEq)]
pub enum CycleLabel {
    Text(String),
    Number(serde_json::Number),
}

impl Default for CycleLabel {
    fn default() -> Self {
        CycleLabel::Text(String::new())
    }
}

impl fmt::Display for CycleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleLabel::Text(label) => write!(f, "{label}"),
            CycleLabel::Number(label) => write!(f, "{label}"),
        }
    }
}

impl<'de> Deserialize<'de> for CycleLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(label) => Ok(CycleLabel::Text(label)),
            Value::Number(label) => Ok(CycleLabel::Number(label)),
            _ => Ok(CycleLabel::default()),
        }
    }
}

/// Tri-state lifecycle field: the upstream sends a date string, a boolean,
/// or nothing at all for `eol`, `lts`, `support` and `discontinued`.
/// Any other JSON shape decodes to `Absent`, so record decoding never fails
/// on these fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    #[default]
    Absent,
}

impl FieldValue {
    pub fn display(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Flag(true) => "true",
            FieldValue::Flag(false) => "false",
            FieldValue::Absent => "N/A",
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(value) => Ok(FieldValue::Text(value)),
            Value::Bool(value) => Ok(FieldValue::Flag(value)),
            _ => Ok(FieldValue::Absent),
        }
    }
}

/// One release cycle of a tracked product, as returned by
/// `/api/<product>.json` and `/api/<product>/<cycle>.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCycle {
    #[serde(default)]
    pub cycle: CycleLabel,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub eol: FieldValue,
    #[serde(default)]
    pub latest: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub lts: FieldValue,
    #[serde(default)]
    pub support: FieldValue,
    #[serde(default)]
    pub discontinued: FieldValue,
}
