use std::fmt;

use serde::{Deserialize, Serialize};

/// Pass/fail state of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleStatus {
    Passed,
    Failed,
}

impl RuleStatus {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            RuleStatus::Passed
        } else {
            RuleStatus::Failed
        }
    }

    pub fn is_passed(self) -> bool {
        matches!(self, RuleStatus::Passed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleStatus::Passed => "Passed",
            RuleStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one rule against one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    pub rule_name: String,
    pub status: RuleStatus,
}

impl RuleResult {
    pub fn new(rule_name: impl Into<String>, status: RuleStatus) -> Self {
        Self {
            rule_name: rule_name.into(),
            status,
        }
    }
}

/// Pass/fail counts across a checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl ChecklistSummary {
    pub fn from_results(results: &[RuleResult]) -> Self {
        let passed = results
            .iter()
            .filter(|result| result.status.is_passed())
            .count();
        Self {
            passed,
            failed: results.len() - passed,
            total: results.len(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Ordered results together with their summary, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistReport {
    pub results: Vec<RuleResult>,
    pub summary: ChecklistSummary,
}

impl From<Vec<RuleResult>> for ChecklistReport {
    fn from(results: Vec<RuleResult>) -> Self {
        let summary = ChecklistSummary::from_results(&results);
        Self { results, summary }
    }
}
