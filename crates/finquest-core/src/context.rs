//! Extracted query context
//!
//! A `QueryContext` is the sparse set of financial parameters found in a
//! query's raw text. Slots are extracted independently of the predicted
//! category; any subset (including none) may be present. The renderer only
//! consumes the slots relevant to the category it is given.

use serde::Serialize;

/// Contextual parameters extracted from a single query.
///
/// All slots are optional. An unset slot means the corresponding pattern did
/// not match (or its number failed to parse) — never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryContext {
    /// First standalone amount found anywhere in the text. Deliberately
    /// generic: it also fires on numbers meant for other slots.
    pub income: Option<f64>,
    pub debt_amount: Option<f64>,
    /// "credit card" or "loan"; only set together with `debt_amount`.
    pub debt_type: Option<String>,
    pub savings_goal: Option<f64>,
    /// Timeline as written in the query, e.g. "2 years".
    pub timeline: Option<String>,
    /// Timeline normalized to months (years multiplied by 12).
    pub timeline_months: Option<u32>,
    pub investment_amount: Option<f64>,
    /// "Low" or "Moderate"; only set together with `investment_amount`.
    pub risk_profile: Option<String>,
    /// Monthly stokvel contribution.
    pub contribution: Option<f64>,
    pub group_size: Option<u32>,
    /// Payout cycle in months.
    pub payout_cycle: Option<u32>,
    pub age: Option<u32>,
    pub retirement_goal: Option<f64>,
    pub retirement_age: Option<u32>,
}

impl QueryContext {
    /// True when no slot at all was extracted.
    pub fn is_empty(&self) -> bool {
        *self == QueryContext::default()
    }
}
