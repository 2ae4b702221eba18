use tracing::debug;

use crate::defaults::default_rules;
use crate::error::RuleError;
use crate::loader::load_rules;
use crate::outcome::{RuleResult, RuleStatus};
use crate::record::ApplicantRecord;
use crate::rule::Rule;

/// Evaluates `rules` against `record`, one result per rule in rule order.
pub fn evaluate(rules: &[Rule], record: &ApplicantRecord) -> Vec<RuleResult> {
    rules
        .iter()
        .map(|rule| {
            let status = RuleStatus::from_passed(rule.condition.evaluate(record));
            debug!(rule = %rule.name, %status, "rule evaluated");
            RuleResult::new(rule.name.clone(), status)
        })
        .collect()
}

/// Immutable, ordered rule set evaluated against applicant records.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Construct an engine that keeps `rules` in the given order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Engine holding the built-in checklist.
    pub fn with_defaults() -> Self {
        Self::new(default_rules())
    }

    /// Loads rules from the given path (file or directory).
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, RuleError> {
        let rules = load_rules(path)?;
        Ok(Self::new(rules))
    }

    /// Borrow the underlying rule set.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the engine contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn evaluate(&self, record: &ApplicantRecord) -> Vec<RuleResult> {
        evaluate(&self.rules, record)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
