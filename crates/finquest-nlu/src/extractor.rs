//! Slot extraction from query text
//!
//! Pattern-based, classifier-agnostic slot filling. Each slot family has one
//! dedicated scan over the raw query text; the scans are independent and not
//! mutually exclusive, so a single query can populate slots for several
//! categories at once. The renderer later consumes only the slots relevant
//! to the predicted category and ignores the rest.
//!
//! All patterns are compiled once at program start using
//! `once_cell::sync::Lazy`. A number that fails to parse is treated as "no
//! match" for that slot rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

use finquest_core::QueryContext;

// Generic amount: the first standalone number anywhere in the text, with an
// optional currency marker. Intentionally fires on numbers meant for other
// slots too (debt amounts, ages, group sizes); that overlap is part of the
// contract and must not be "fixed" here.
static INCOME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(R?\d{1,6}(?:\.\d{2})?)\b").unwrap());

static DEBT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(debt|owe)\s+R?(\d{1,6})\b").unwrap());

// No plural alternation: "savings R2000" deliberately does not match.
static SAVINGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(save|saving)\s+R?(\d{1,6})\b").unwrap());

static TIMELINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*(month|year)s?\b").unwrap());

static INVESTMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(invest|investment)\s+R?(\d{1,6})\b").unwrap());

static STOKVEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(stokvel|group)\s+R?(\d{1,5})\b").unwrap());
static GROUP_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*(member|people)s?\b").unwrap());
static PAYOUT_CYCLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*month").unwrap());

static AGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*(year|yr)s?\s*old\b").unwrap());
static RETIREMENT_GOAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bretire\s+R?(\d{1,7})\b").unwrap());
static RETIREMENT_AGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bretire\s+at\s+(\d{1,2})\b").unwrap());

/// Default group size when a stokvel contribution is found without a
/// "<N> members" mention.
const DEFAULT_GROUP_SIZE: u32 = 10;
/// Default payout cycle in months.
const DEFAULT_PAYOUT_CYCLE: u32 = 12;
/// Default retirement age when a goal is found without "retire at <N>".
const DEFAULT_RETIREMENT_AGE: u32 = 65;

/// Strip the currency marker and parse the remaining digits.
fn parse_amount(raw: &str) -> Option<f64> {
    let digits = raw
        .strip_prefix('R')
        .or_else(|| raw.strip_prefix('r'))
        .unwrap_or(raw);
    digits.parse().ok()
}

/// Classifier-agnostic slot extractor.
///
/// `extract` is a pure function: the same query text always yields the same
/// slots, regardless of the predicted category.
#[derive(Debug, Clone, Default)]
pub struct ContextExtractor;

impl ContextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run every slot scan over the query and union the results.
    ///
    /// The scans share no slot names, so evaluation order does not matter;
    /// absence of any match leaves the slot unset, never an error.
    pub fn extract(&self, query: &str) -> QueryContext {
        let mut context = QueryContext::default();

        context.income = self.extract_income(query);

        if let Some((amount, debt_type)) = self.extract_debt(query) {
            context.debt_amount = Some(amount);
            context.debt_type = Some(debt_type);
        }

        context.savings_goal = self.extract_savings_goal(query);

        if let Some((timeline, months)) = self.extract_timeline(query) {
            context.timeline = Some(timeline);
            context.timeline_months = Some(months);
        }

        if let Some((amount, risk_profile)) = self.extract_investment(query) {
            context.investment_amount = Some(amount);
            context.risk_profile = Some(risk_profile);
        }

        if let Some((contribution, group_size, payout_cycle)) = self.extract_stokvel(query) {
            context.contribution = Some(contribution);
            context.group_size = Some(group_size);
            context.payout_cycle = Some(payout_cycle);
        }

        context.age = self.extract_age(query);

        if let Some((goal, retirement_age)) = self.extract_retirement(query) {
            context.retirement_goal = Some(goal);
            context.retirement_age = Some(retirement_age);
        }

        context
    }

    /// First standalone amount anywhere in the text.
    pub fn extract_income(&self, query: &str) -> Option<f64> {
        let caps = INCOME.captures(query)?;
        parse_amount(caps.get(1)?.as_str())
    }

    /// Amount following "debt" or "owe", with the debt type.
    ///
    /// The type is "credit card" when "card" appears anywhere in the query,
    /// else "loan".
    pub fn extract_debt(&self, query: &str) -> Option<(f64, String)> {
        let caps = DEBT.captures(query)?;
        let amount: f64 = caps.get(2)?.as_str().parse().ok()?;
        let debt_type = if query.to_lowercase().contains("card") {
            "credit card"
        } else {
            "loan"
        };
        Some((amount, debt_type.to_string()))
    }

    /// Amount following "save" or "saving".
    pub fn extract_savings_goal(&self, query: &str) -> Option<f64> {
        let caps = SAVINGS.captures(query)?;
        caps.get(2)?.as_str().parse().ok()
    }

    /// Timeline as written, normalized to months (years × 12).
    pub fn extract_timeline(&self, query: &str) -> Option<(String, u32)> {
        let caps = TIMELINE.captures(query)?;
        let n: u32 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps.get(2)?.as_str().to_lowercase();
        let months = if unit.contains("year") { n.checked_mul(12)? } else { n };
        Some((caps.get(0)?.as_str().to_string(), months))
    }

    /// Amount following "invest" or "investment", with the risk profile.
    ///
    /// Risk is "Low" when "safe" appears anywhere in the query, else
    /// "Moderate".
    pub fn extract_investment(&self, query: &str) -> Option<(f64, String)> {
        let caps = INVESTMENT.captures(query)?;
        let amount: f64 = caps.get(2)?.as_str().parse().ok()?;
        let risk_profile = if query.to_lowercase().contains("safe") {
            "Low"
        } else {
            "Moderate"
        };
        Some((amount, risk_profile.to_string()))
    }

    /// Contribution following "stokvel" or "group", with group size and
    /// payout cycle (defaults 10 members, 12 months).
    pub fn extract_stokvel(&self, query: &str) -> Option<(f64, u32, u32)> {
        let caps = STOKVEL.captures(query)?;
        let contribution: f64 = caps.get(2)?.as_str().parse().ok()?;

        let group_size = GROUP_SIZE
            .captures(query)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_GROUP_SIZE);

        let payout_cycle = PAYOUT_CYCLE
            .captures(query)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_PAYOUT_CYCLE);

        Some((contribution, group_size, payout_cycle))
    }

    /// Age from "<N> years old".
    pub fn extract_age(&self, query: &str) -> Option<u32> {
        let caps = AGE.captures(query)?;
        caps.get(1)?.as_str().parse().ok()
    }

    /// Retirement goal from "retire <amount>", with the retirement age from
    /// "retire at <N>" (default 65).
    pub fn extract_retirement(&self, query: &str) -> Option<(f64, u32)> {
        let caps = RETIREMENT_GOAL.captures(query)?;
        let goal: f64 = caps.get(1)?.as_str().parse().ok()?;

        let retirement_age = RETIREMENT_AGE
            .captures(query)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_RETIREMENT_AGE);

        Some((goal, retirement_age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_extraction() {
        let extractor = ContextExtractor::new();

        assert_eq!(extractor.extract_income("budget R5000"), Some(5000.0));
        assert_eq!(extractor.extract_income("I earn 3000 a month"), Some(3000.0));
        assert_eq!(extractor.extract_income("R1500.50 available"), Some(1500.50));
        assert_eq!(extractor.extract_income("no numbers here"), None);
    }

    #[test]
    fn test_income_takes_first_number() {
        let extractor = ContextExtractor::new();
        assert_eq!(extractor.extract_income("split R2000 and R9000"), Some(2000.0));
    }

    #[test]
    fn test_income_overlaps_with_debt_amount() {
        let extractor = ContextExtractor::new();

        // The generic amount scan fires on the debt amount too; this overlap
        // is contractual.
        let context = extractor.extract("owe R5000 on credit");
        assert_eq!(context.income, Some(5000.0));
        assert_eq!(context.debt_amount, Some(5000.0));
    }

    #[test]
    fn test_debt_extraction() {
        let extractor = ContextExtractor::new();

        let (amount, debt_type) = extractor.extract_debt("owe R5000 on my credit card").unwrap();
        assert_eq!(amount, 5000.0);
        assert_eq!(debt_type, "credit card");

        let (amount, debt_type) = extractor.extract_debt("debt 10000 from the bank").unwrap();
        assert_eq!(amount, 10000.0);
        assert_eq!(debt_type, "loan");

        assert!(extractor.extract_debt("reduce debt quickly").is_none());
    }

    #[test]
    fn test_savings_goal_extraction() {
        let extractor = ContextExtractor::new();

        assert_eq!(extractor.extract_savings_goal("save R10000 in a year"), Some(10000.0));
        assert_eq!(extractor.extract_savings_goal("saving 2000 monthly"), Some(2000.0));
        // "savings" (plural) does not trigger the scan.
        assert_eq!(extractor.extract_savings_goal("build savings R2000 monthly"), None);
    }

    #[test]
    fn test_timeline_normalization() {
        let extractor = ContextExtractor::new();

        let (timeline, months) = extractor.extract_timeline("save R10000 in 2 years").unwrap();
        assert_eq!(timeline, "2 years");
        assert_eq!(months, 24);

        let (timeline, months) = extractor.extract_timeline("pay off in 6 months").unwrap();
        assert_eq!(timeline, "6 months");
        assert_eq!(months, 6);

        let (timeline, months) = extractor.extract_timeline("in 1 year").unwrap();
        assert_eq!(timeline, "1 year");
        assert_eq!(months, 12);
    }

    #[test]
    fn test_investment_extraction() {
        let extractor = ContextExtractor::new();

        let (amount, risk) = extractor.extract_investment("invest R5000 safely").unwrap();
        assert_eq!(amount, 5000.0);
        assert_eq!(risk, "Low");

        let (amount, risk) = extractor.extract_investment("investment 20000 in stocks").unwrap();
        assert_eq!(amount, 20000.0);
        assert_eq!(risk, "Moderate");

        assert!(extractor.extract_investment("invest in bonds").is_none());
    }

    #[test]
    fn test_stokvel_extraction() {
        let extractor = ContextExtractor::new();

        let (contribution, group_size, payout_cycle) = extractor
            .extract_stokvel("stokvel R500 with 15 members paying every 6 months")
            .unwrap();
        assert_eq!(contribution, 500.0);
        assert_eq!(group_size, 15);
        assert_eq!(payout_cycle, 6);

        // Defaults apply when size and cycle are absent.
        let (contribution, group_size, payout_cycle) =
            extractor.extract_stokvel("join a group R300").unwrap();
        assert_eq!(contribution, 300.0);
        assert_eq!(group_size, 10);
        assert_eq!(payout_cycle, 12);
    }

    #[test]
    fn test_age_extraction() {
        let extractor = ContextExtractor::new();

        assert_eq!(extractor.extract_age("I am 30 years old"), Some(30));
        assert_eq!(extractor.extract_age("45 yrs old"), Some(45));
        assert_eq!(extractor.extract_age("30 years to go"), None);
    }

    #[test]
    fn test_retirement_extraction() {
        let extractor = ContextExtractor::new();

        let (goal, retirement_age) = extractor.extract_retirement("retire R1000000").unwrap();
        assert_eq!(goal, 1_000_000.0);
        assert_eq!(retirement_age, 65);

        let (goal, retirement_age) =
            extractor.extract_retirement("retire 500000, retire at 60").unwrap();
        assert_eq!(goal, 500_000.0);
        assert_eq!(retirement_age, 60);
    }

    #[test]
    fn test_slot_independence() {
        let extractor = ContextExtractor::new();

        let context = extractor.extract("invest R5000 safely");
        assert_eq!(context.income, Some(5000.0));
        assert_eq!(context.investment_amount, Some(5000.0));
        assert_eq!(context.risk_profile.as_deref(), Some("Low"));
        assert!(context.debt_amount.is_none());
    }

    #[test]
    fn test_multiple_slot_families_in_one_query() {
        let extractor = ContextExtractor::new();

        let context = extractor.extract("owe R3000 on my card and save R10000 in 2 years");
        assert_eq!(context.debt_amount, Some(3000.0));
        assert_eq!(context.debt_type.as_deref(), Some("credit card"));
        assert_eq!(context.savings_goal, Some(10000.0));
        assert_eq!(context.timeline_months, Some(24));
        assert_eq!(context.income, Some(3000.0));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let extractor = ContextExtractor::new();
        let query = "retire R1000000, 30 years old";
        assert_eq!(extractor.extract(query), extractor.extract(query));
    }

    #[test]
    fn test_empty_and_unmatched_queries_yield_empty_context() {
        let extractor = ContextExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("tell me about money").is_empty());
    }
}
