//! Applicant eligibility checklist.
//!
//! The workspace is split into three crates, re-exported here:
//!
//! * `checklist_core`: shared errors, configuration helpers and logging setup
//! * `checklist_rules`: applicant records, rules and the evaluation engine
//! * `checklist_dashboard`: data fetcher, HTML rendering and the HTTP server

pub use checklist_core as shared;
pub use checklist_dashboard as dashboard;
pub use checklist_rules as rules;

pub use checklist_dashboard::config::DashboardConfig;
pub use checklist_dashboard::{start_dashboard, DashboardHandle};
pub use checklist_rules::{
    default_rules, evaluate, ApplicantRecord, ChecklistReport, Rule, RuleCondition, RuleEngine,
    RuleResult, RuleStatus,
};
