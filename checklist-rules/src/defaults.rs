//! Built-in applicant checklist.

use serde_json::json;

use crate::condition::RuleCondition;
use crate::rule::Rule;

pub const VALUATION_FEE_PAID: &str = "Valuation Fee Paid";
pub const UK_RESIDENT: &str = "UK Resident";
pub const RISK_RATING_MEDIUM: &str = "Risk Rating Medium";
pub const LTV_BELOW_60: &str = "LTV Below 60%";

/// Maximum loan-to-value percentage, exclusive.
pub const MAX_LTV_PERCENT: f64 = 60.0;

/// Returns the four standard checks in their display order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            VALUATION_FEE_PAID,
            RuleCondition::IsTrue {
                field: "isValuationFeePaid".into(),
            },
        )
        .with_description("The valuation fee has been paid"),
        Rule::new(
            UK_RESIDENT,
            RuleCondition::IsTrue {
                field: "isUkResident".into(),
            },
        )
        .with_description("The applicant is resident in the UK"),
        Rule::new(
            RISK_RATING_MEDIUM,
            RuleCondition::Equals {
                field: "riskRating".into(),
                value: json!("Medium"),
            },
        )
        .with_description("The applicant risk rating is exactly \"Medium\""),
        Rule::new(
            LTV_BELOW_60,
            RuleCondition::RatioBelow {
                numerator: "loanRequired".into(),
                denominator: "purchasePrice".into(),
                percent: MAX_LTV_PERCENT,
            },
        )
        .with_description("loanRequired / purchasePrice is below 60%"),
    ]
}
