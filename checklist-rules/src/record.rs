use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::condition::FieldPath;
use crate::error::RuleError;

/// Applicant payload as returned by the upstream API.
///
/// The record is kept as raw JSON so that rules observe exactly what the API
/// sent: a `"true"` string is not a boolean and `"50"` is not a number. The
/// only structural guarantee is that the root is a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApplicantRecord(Value);

impl ApplicantRecord {
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        match value {
            Value::Object(_) => Ok(Self(value)),
            other => Err(RuleError::MalformedRecord {
                found: json_kind(&other),
            }),
        }
    }

    /// Looks up the value at `field`, if present.
    pub fn get(&self, field: &FieldPath) -> Option<&Value> {
        field.locate(&self.0)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl TryFrom<Value> for ApplicantRecord {
    type Error = RuleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ApplicantRecord::from_value(value)
    }
}

impl<'de> Deserialize<'de> for ApplicantRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ApplicantRecord::from_value(value).map_err(D::Error::custom)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
