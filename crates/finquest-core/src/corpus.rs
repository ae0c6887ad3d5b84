//! Embedded training corpus
//!
//! Ground truth for the classifier: 28 labeled queries, 4 per category.
//! The balance is not a hard invariant but keeps per-class quality even.
//! Compiled into the binary and retrained in memory on every process start.

use crate::Category;

/// A single labeled training query.
#[derive(Debug, Clone, Copy)]
pub struct TrainingExample {
    pub text: &'static str,
    pub category: Category,
}

const fn example(text: &'static str, category: Category) -> TrainingExample {
    TrainingExample { text, category }
}

static TRAINING_DATA: [TrainingExample; 28] = [
    example("budget R5000 for monthly expenses", Category::Budget),
    example("how to manage my budget", Category::Budget),
    example("spending plan for R3000 income", Category::Budget),
    example("create a budget for family", Category::Budget),
    example("pay off credit card debt", Category::Debt),
    example("manage R10000 loan", Category::Debt),
    example("reduce debt quickly", Category::Debt),
    example("owe R5000 on credit", Category::Debt),
    example("save for emergency fund", Category::Savings),
    example("build savings R2000 monthly", Category::Savings),
    example("stokvel for community savings", Category::Savings),
    example("save R10000 in a year", Category::Savings),
    example("invest R5000 safely", Category::Investment),
    example("stocks for beginners", Category::Investment),
    example("etf investment options", Category::Investment),
    example("invest in bonds", Category::Investment),
    example("improve my credit score", Category::CreditScore),
    example("check credit rating", Category::CreditScore),
    example("bad credit help", Category::CreditScore),
    example("credit report advice", Category::CreditScore),
    example("join a stokvel with 10 people", Category::Stokvel),
    example("stokvel savings R500 monthly", Category::Stokvel),
    example("group savings plan", Category::Stokvel),
    example("community savings advice", Category::Stokvel),
    example("retire with R1000000", Category::Retirement),
    example("pension plan for age 30", Category::Retirement),
    example("retirement fund options", Category::Retirement),
    example("save for retirement at 65", Category::Retirement),
];

/// The fixed corpus the model is trained from at startup.
pub fn training_corpus() -> &'static [TrainingExample] {
    &TRAINING_DATA
}
