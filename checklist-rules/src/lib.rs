//! Applicant eligibility rules.
//!
//! A checklist is an ordered list of named [`Rule`]s. Each rule carries a
//! declarative [`RuleCondition`] evaluated against an [`ApplicantRecord`], and
//! the [`RuleEngine`] turns a record into one [`RuleResult`] per rule in the
//! order the rules were defined. The built-in checklist lives in
//! [`default_rules`]; alternative rule sets can be loaded from YAML/JSON.

mod condition;
mod defaults;
mod engine;
mod error;
mod loader;
mod outcome;
mod record;
mod rule;
mod service;

pub use condition::{ratio_percent, FieldPath, RuleCondition};
pub use defaults::{
    default_rules, LTV_BELOW_60, MAX_LTV_PERCENT, RISK_RATING_MEDIUM, UK_RESIDENT,
    VALUATION_FEE_PAID,
};
pub use engine::{evaluate, RuleEngine};
pub use error::RuleError;
pub use loader::load_rules;
pub use outcome::{ChecklistReport, ChecklistSummary, RuleResult, RuleStatus};
pub use record::ApplicantRecord;
pub use rule::Rule;
pub use service::RuleApiBuilder;
