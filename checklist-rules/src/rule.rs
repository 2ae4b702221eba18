use crate::condition::RuleCondition;
use serde::{Deserialize, Serialize};

/// Named eligibility check applied to an applicant record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Display name, also used as the rule identifier in results.
    pub name: String,
    /// Optional human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Predicate that decides whether the rule passes.
    pub condition: RuleCondition,
}

impl Rule {
    pub fn new(name: impl Into<String>, condition: RuleCondition) -> Self {
        Self {
            name: name.into(),
            description: None,
            condition,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
