//! Inbound request and advisory output shapes

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Body of `POST /process`
///
/// `text` is optional at the serde level so an absent field is reported as
/// a validation error rather than a framework rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// The record the model is asked to produce.
///
/// Advisory only: the relay returns whatever JSON the repair pass yields,
/// this type is a typed view for callers and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<Number>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl ExtractedRecord {
    pub const FIELDS: [&'static str; 4] = ["name", "email", "age", "gender"];

    /// Typed view of `value` if it is an object whose known fields have the
    /// expected types. Extra keys are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Whether `value` is an object carrying all four keys with usable types
    pub fn matches_shape(value: &Value) -> bool {
        let Some(obj) = value.as_object() else {
            return false;
        };
        Self::FIELDS.iter().all(|key| obj.contains_key(*key)) && Self::from_value(value).is_some()
    }
}
