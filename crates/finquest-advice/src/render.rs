//! Advice rendering
//!
//! `render` looks up the base template for the category and, when the
//! category's required slot is present, appends a computed personalization
//! block. Dispatch is a stateless category-to-personalizer lookup rather
//! than a branching chain, so adding a category means adding one table entry.
//!
//! Division guards use a minimum divisor of 1 throughout.

use finquest_core::{Category, QueryContext};

use crate::templates;

type Personalizer = fn(&QueryContext) -> Option<String>;

/// Personalizer for a category, if it has one. Credit score advice has no
/// computed fields and always renders the base template.
fn personalizer(category: Category) -> Option<Personalizer> {
    match category {
        Category::Budget => Some(budget_plan),
        Category::Debt => Some(debt_plan),
        Category::Savings => Some(savings_plan),
        Category::Investment => Some(investment_plan),
        Category::CreditScore => None,
        Category::Stokvel => Some(stokvel_plan),
        Category::Retirement => Some(retirement_plan),
    }
}

/// Render the advice document for a category and its extracted slots.
///
/// An empty slot set returns the base template verbatim. When the slot
/// required to personalize the category is absent, the base template is
/// returned even if unrelated slots were extracted.
pub fn render(category: Category, context: &QueryContext) -> String {
    let base = templates::template(category);
    if context.is_empty() {
        return base.to_string();
    }
    personalizer(category)
        .and_then(|plan| plan(context))
        .unwrap_or_else(|| base.to_string())
}

/// First letter uppercased, rest lowercased ("credit card" -> "Credit card").
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn budget_plan(context: &QueryContext) -> Option<String> {
    let income = context.income?;
    Some(format!(
        "\n{base}
**Personalized Budget Plan**
- **Income**: {income:.2} ZAR
- **Allocation**:
  - Needs (50%): {needs:.2} ZAR
  - Wants (30%): {wants:.2} ZAR
  - Savings/Debt (20%): {savings:.2} ZAR
- **AR Tip**: Use the AR camera to scan your environment and visualize budgeting goals.
",
        base = templates::BUDGET,
        needs = income * 0.5,
        wants = income * 0.3,
        savings = income * 0.2,
    ))
}

fn debt_plan(context: &QueryContext) -> Option<String> {
    let amount = context.debt_amount?;
    let debt_type = context.debt_type.as_deref();
    Some(format!(
        "\n{base}
**Debt Strategy**
- **Amount**: {amount:.2} ZAR
- **Type**: {display_type}
- **Action**: Focus on {focus} with highest interest; contact [Capitec](https://www.capitec.co.za).
- **AR Tip**: Visualize debt reduction progress with AR scan.
",
        base = templates::DEBT,
        display_type = capitalize(debt_type.unwrap_or("General")),
        focus = debt_type.unwrap_or("debts"),
    ))
}

fn savings_plan(context: &QueryContext) -> Option<String> {
    let goal = context.savings_goal?;
    let months = context.timeline_months.unwrap_or(12).max(1);
    Some(format!(
        "\n{base}
**Savings Plan**
- **Goal**: {goal:.2} ZAR
- **Timeline**: {timeline}
- **Monthly Savings**: {monthly:.2} ZAR
- **AR Tip**: Use AR to project savings goals in your environment.
",
        base = templates::SAVINGS,
        timeline = context.timeline.as_deref().unwrap_or("1 year"),
        monthly = goal / months as f64,
    ))
}

fn investment_plan(context: &QueryContext) -> Option<String> {
    let amount = context.investment_amount?;
    Some(format!(
        "\n{base}
**Investment Plan**
- **Amount**: {amount:.2} ZAR
- **Risk**: {risk}
- **Recommendation**: Start with [Satrix MSCI World ETF](https://satrix.co.za).
- **AR Tip**: Visualize investment growth with AR camera.
",
        base = templates::INVESTMENT,
        risk = context.risk_profile.as_deref().unwrap_or("Moderate"),
    ))
}

fn stokvel_plan(context: &QueryContext) -> Option<String> {
    let contribution = context.contribution?;
    let group_size = context.group_size.unwrap_or(10);
    Some(format!(
        "\n{base}
**Stokvel Plan**
- **Contribution**: {contribution:.2} ZAR/month
- **Group Size**: {group_size} members
- **Pool**: {pool:.2} ZAR/month
- **Payout**: Every {payout} months
- **AR Tip**: Use AR to visualize stokvel contributions.
",
        base = templates::STOKVEL,
        pool = contribution * group_size as f64,
        payout = context.payout_cycle.unwrap_or(12),
    ))
}

fn retirement_plan(context: &QueryContext) -> Option<String> {
    let goal = context.retirement_goal?;
    let retirement_age = i64::from(context.retirement_age.unwrap_or(65));
    let age = i64::from(context.age.unwrap_or(30));
    let months = ((retirement_age - age) * 12).max(1);
    Some(format!(
        "\n{base}
**Retirement Plan**
- **Goal**: {goal:.2} ZAR
- **Age**: {age_display}
- **Monthly Contribution**: {monthly:.2} ZAR
- **AR Tip**: Project retirement goals with AR visualization.
",
        base = templates::RETIREMENT,
        age_display = context
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        monthly = goal / months as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_returns_base_template() {
        let rendered = render(Category::Budget, &QueryContext::default());
        assert_eq!(rendered, templates::template(Category::Budget));
    }

    #[test]
    fn test_budget_allocation_arithmetic() {
        let context = QueryContext {
            income: Some(5000.0),
            ..Default::default()
        };
        let rendered = render(Category::Budget, &context);
        assert!(rendered.contains("Needs (50%): 2500.00 ZAR"));
        assert!(rendered.contains("Wants (30%): 1500.00 ZAR"));
        assert!(rendered.contains("Savings/Debt (20%): 1000.00 ZAR"));
        // Base template stays part of the output.
        assert!(rendered.contains("**50/30/20 Rule**"));
    }

    #[test]
    fn test_missing_required_slot_falls_back_to_base() {
        // Unrelated slots alone must not personalize the budget document.
        let context = QueryContext {
            debt_amount: Some(3000.0),
            debt_type: Some("loan".to_string()),
            ..Default::default()
        };
        let rendered = render(Category::Budget, &context);
        assert_eq!(rendered, templates::template(Category::Budget));
    }

    #[test]
    fn test_debt_type_is_capitalized() {
        let context = QueryContext {
            income: Some(5000.0),
            debt_amount: Some(5000.0),
            debt_type: Some("credit card".to_string()),
            ..Default::default()
        };
        let rendered = render(Category::Debt, &context);
        assert!(rendered.contains("- **Type**: Credit card"));
        assert!(rendered.contains("- **Amount**: 5000.00 ZAR"));
        assert!(rendered.contains("Focus on credit card with highest interest"));
    }

    #[test]
    fn test_savings_monthly_division() {
        let context = QueryContext {
            income: Some(10000.0),
            savings_goal: Some(10000.0),
            timeline: Some("2 years".to_string()),
            timeline_months: Some(24),
            ..Default::default()
        };
        let rendered = render(Category::Savings, &context);
        assert!(rendered.contains("- **Goal**: 10000.00 ZAR"));
        assert!(rendered.contains("- **Timeline**: 2 years"));
        assert!(rendered.contains("- **Monthly Savings**: 416.67 ZAR"));
    }

    #[test]
    fn test_savings_defaults_to_one_year() {
        let context = QueryContext {
            savings_goal: Some(1200.0),
            ..Default::default()
        };
        let rendered = render(Category::Savings, &context);
        assert!(rendered.contains("- **Timeline**: 1 year"));
        assert!(rendered.contains("- **Monthly Savings**: 100.00 ZAR"));
    }

    #[test]
    fn test_investment_risk_default() {
        let context = QueryContext {
            investment_amount: Some(5000.0),
            ..Default::default()
        };
        let rendered = render(Category::Investment, &context);
        assert!(rendered.contains("- **Risk**: Moderate"));
    }

    #[test]
    fn test_stokvel_pool_arithmetic() {
        let context = QueryContext {
            contribution: Some(500.0),
            group_size: Some(15),
            payout_cycle: Some(6),
            ..Default::default()
        };
        let rendered = render(Category::Stokvel, &context);
        assert!(rendered.contains("- **Contribution**: 500.00 ZAR/month"));
        assert!(rendered.contains("- **Group Size**: 15 members"));
        assert!(rendered.contains("- **Pool**: 7500.00 ZAR/month"));
        assert!(rendered.contains("- **Payout**: Every 6 months"));
    }

    #[test]
    fn test_stokvel_defaults() {
        let context = QueryContext {
            contribution: Some(500.0),
            ..Default::default()
        };
        let rendered = render(Category::Stokvel, &context);
        assert!(rendered.contains("- **Group Size**: 10 members"));
        assert!(rendered.contains("- **Pool**: 5000.00 ZAR/month"));
        assert!(rendered.contains("- **Payout**: Every 12 months"));
    }

    #[test]
    fn test_retirement_default_age_arithmetic() {
        // 30 years old, default retirement age 65: 35 years of saving.
        let context = QueryContext {
            retirement_goal: Some(1_000_000.0),
            retirement_age: Some(65),
            age: Some(30),
            ..Default::default()
        };
        let rendered = render(Category::Retirement, &context);
        assert!(rendered.contains("- **Age**: 30"));
        // 1000000 / (35 * 12)
        assert!(rendered.contains("- **Monthly Contribution**: 2380.95 ZAR"));
    }

    #[test]
    fn test_retirement_unknown_age_display() {
        let context = QueryContext {
            retirement_goal: Some(420_000.0),
            retirement_age: Some(65),
            ..Default::default()
        };
        let rendered = render(Category::Retirement, &context);
        assert!(rendered.contains("- **Age**: Unknown"));
        // Default age 30: 420000 / (35 * 12) = 1000.00
        assert!(rendered.contains("- **Monthly Contribution**: 1000.00 ZAR"));
    }

    #[test]
    fn test_retirement_past_retirement_age_guards_division() {
        // 70 years old with default retirement age 65: the divisor clamps to
        // 1 instead of going negative.
        let context = QueryContext {
            retirement_goal: Some(100_000.0),
            retirement_age: Some(65),
            age: Some(70),
            ..Default::default()
        };
        let rendered = render(Category::Retirement, &context);
        assert!(rendered.contains("- **Monthly Contribution**: 100000.00 ZAR"));
    }

    #[test]
    fn test_credit_score_never_personalizes() {
        let context = QueryContext {
            income: Some(5000.0),
            ..Default::default()
        };
        let rendered = render(Category::CreditScore, &context);
        assert_eq!(rendered, templates::template(Category::CreditScore));
    }
}
