//! End-to-end pipeline tests: train once from the embedded corpus, then
//! exercise the full query -> category -> slots -> advice flow.

use finquest_advice::{Advisor, AdvisorOptions, ONBOARDING};
use finquest_core::Category;

fn advisor() -> Advisor {
    Advisor::train(&AdvisorOptions::default()).expect("embedded corpus must train")
}

#[test]
fn empty_and_whitespace_queries_return_onboarding() {
    let advisor = advisor();
    assert_eq!(advisor.advise(""), ONBOARDING);
    assert_eq!(advisor.advise("   "), ONBOARDING);
    assert_eq!(advisor.advise("\n\t"), ONBOARDING);
}

#[test]
fn every_query_yields_nonempty_advice() {
    let advisor = advisor();
    let queries = [
        "budget R5000",
        "how do I get out of debt",
        "xyzzy plugh",
        "42",
        "!!!",
        "mi historia financiera",
    ];
    for query in queries {
        let advice = advisor.advise(query);
        assert!(!advice.trim().is_empty(), "query {query:?} produced empty advice");
    }
}

#[test]
fn advice_is_deterministic() {
    let advisor = advisor();
    let query = "save R10000 in 2 years";
    assert_eq!(advisor.advise(query), advisor.advise(query));
}

#[test]
fn classification_is_closed_over_categories() {
    let advisor = advisor();
    for query in ["budget help", "weird unrelated text", "", "1234567890"] {
        assert!(Category::ALL.contains(&advisor.classify(query)));
    }
}

#[test]
fn slot_extraction_is_independent_of_category() {
    let advisor = advisor();
    let context = advisor.extract("invest R5000 safely");
    assert_eq!(context.income, Some(5000.0));
    assert_eq!(context.investment_amount, Some(5000.0));
    assert_eq!(context.risk_profile.as_deref(), Some("Low"));
}

#[test]
fn budget_query_renders_personalized_allocation() {
    let advisor = advisor();
    let advice = advisor.advise("budget R5000 for monthly expenses");
    assert!(advice.contains("Needs (50%): 2500.00 ZAR"));
    assert!(advice.contains("Wants (30%): 1500.00 ZAR"));
    assert!(advice.contains("Savings/Debt (20%): 1000.00 ZAR"));
}

#[test]
fn savings_query_normalizes_timeline() {
    let advisor = advisor();
    let context = advisor.extract("save R10000 in 2 years");
    assert_eq!(context.savings_goal, Some(10000.0));
    assert_eq!(context.timeline.as_deref(), Some("2 years"));
    assert_eq!(context.timeline_months, Some(24));

    let advice = advisor.advise("save R10000 in 2 years");
    assert!(advice.contains("Monthly Savings: 416.67 ZAR") || advice.contains("416.67 ZAR"));
}

#[test]
fn retirement_query_defaults_retirement_age() {
    let advisor = advisor();
    let context = advisor.extract("retire R1000000, 30 years old");
    assert_eq!(context.retirement_goal, Some(1_000_000.0));
    assert_eq!(context.retirement_age, Some(65));
    assert_eq!(context.age, Some(30));
}

#[test]
fn debt_query_keeps_generic_income_slot() {
    let advisor = advisor();
    let context = advisor.extract("owe R5000 on credit");
    assert_eq!(context.income, Some(5000.0));
    assert_eq!(context.debt_amount, Some(5000.0));
    assert_eq!(context.debt_type.as_deref(), Some("loan"));
}

#[test]
fn training_examples_classify_to_strong_categories() {
    let advisor = advisor();
    assert_eq!(advisor.classify("how to manage my budget"), Category::Budget);
    assert_eq!(advisor.classify("improve my credit score"), Category::CreditScore);
    assert_eq!(advisor.classify("retirement fund options"), Category::Retirement);
}
