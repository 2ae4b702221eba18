use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::ApplicantRecord;

/// Dotted field path used to inspect attributes on an [`ApplicantRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    pub(crate) fn locate<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in self.segments() {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(value) => current = value,
                    None => return None,
                },
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    current = items.get(index)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        FieldPath::new(value)
    }
}

impl From<String> for FieldPath {
    fn from(value: String) -> Self {
        FieldPath::new(value)
    }
}

/// Predicate deciding whether a rule passes for a given record.
///
/// Every variant is total: a missing field or a value of the wrong JSON type
/// makes the predicate fail instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleCondition {
    /// Passes for every record.
    Always,
    /// All nested conditions must pass.
    All { conditions: Vec<RuleCondition> },
    /// Any of the nested conditions must pass.
    Any { conditions: Vec<RuleCondition> },
    /// Negate the outcome of the nested condition.
    Not { condition: Box<RuleCondition> },
    /// The value at `field` equals `value`.
    Equals { field: FieldPath, value: Value },
    /// The value at `field` is absent or differs from `value`.
    NotEquals { field: FieldPath, value: Value },
    /// The field is present, whatever its value.
    Exists { field: FieldPath },
    /// The field is absent.
    Missing { field: FieldPath },
    /// The value at `field` is the JSON boolean `true`.
    IsTrue { field: FieldPath },
    /// The number at `field` is greater than `value`.
    GreaterThan { field: FieldPath, value: f64 },
    /// The number at `field` is less than `value`.
    LessThan { field: FieldPath, value: f64 },
    /// `numerator / denominator * 100` is strictly below `percent`.
    ///
    /// A zero denominator fails the rule rather than producing an infinite
    /// or undefined ratio.
    RatioBelow {
        numerator: FieldPath,
        denominator: FieldPath,
        percent: f64,
    },
}

impl RuleCondition {
    pub fn evaluate(&self, record: &ApplicantRecord) -> bool {
        match self {
            RuleCondition::Always => true,
            RuleCondition::All { conditions } => conditions
                .iter()
                .all(|condition| condition.evaluate(record)),
            RuleCondition::Any { conditions } => conditions
                .iter()
                .any(|condition| condition.evaluate(record)),
            RuleCondition::Not { condition } => !condition.evaluate(record),
            RuleCondition::Equals { field, value } => record
                .get(field)
                .map(|actual| values_equal(actual, value))
                .unwrap_or(false),
            RuleCondition::NotEquals { field, value } => !record
                .get(field)
                .map(|actual| values_equal(actual, value))
                .unwrap_or(false),
            RuleCondition::Exists { field } => record.get(field).is_some(),
            RuleCondition::Missing { field } => record.get(field).is_none(),
            RuleCondition::IsTrue { field } => {
                matches!(record.get(field), Some(Value::Bool(true)))
            }
            RuleCondition::GreaterThan { field, value } => record
                .get(field)
                .and_then(Value::as_f64)
                .map(|candidate| candidate > *value)
                .unwrap_or(false),
            RuleCondition::LessThan { field, value } => record
                .get(field)
                .and_then(Value::as_f64)
                .map(|candidate| candidate < *value)
                .unwrap_or(false),
            RuleCondition::RatioBelow {
                numerator,
                denominator,
                percent,
            } => ratio_percent(record, numerator, denominator)
                .map(|ratio| ratio < *percent)
                .unwrap_or(false),
        }
    }
}

/// Computes `numerator / denominator * 100`, or `None` when either side is
/// missing, non-numeric, the denominator is zero or the result is not finite.
pub fn ratio_percent(
    record: &ApplicantRecord,
    numerator: &FieldPath,
    denominator: &FieldPath,
) -> Option<f64> {
    let top = record.get(numerator).and_then(Value::as_f64)?;
    let bottom = record.get(denominator).and_then(Value::as_f64)?;
    if bottom == 0.0 {
        return None;
    }

    let ratio = (top / bottom) * 100.0;
    ratio.is_finite().then_some(ratio)
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        // `60` and `60.0` are equal; no tolerance beyond that.
        (Value::Number(lhs), Value::Number(rhs)) => lhs == rhs || lhs.as_f64() == rhs.as_f64(),
        _ => left == right,
    }
}
