//! Static advice templates
//!
//! One markdown document per category, fixed at build time and never
//! mutated. These are the base output before personalization; amounts are in
//! South African rand (ZAR) and links point at SA-relevant resources.

use finquest_core::Category;

pub(crate) const BUDGET: &str = r#"
**Budgeting Advice (Enhanced by AR Engagement)**
- **50/30/20 Rule**: Allocate 50% to needs (rent, groceries), 30% to wants (entertainment), 20% to savings/debt ([Investopedia](https://www.investopedia.com)).
- **Track Expenses**: Use [22seven](https://www.22seven.com) or [YNAB](https://www.ynab.com).
- **Automate Savings**: Set up transfers to a [SARS tax-free account](https://www.sars.gov.za).
- **AR Integration**: Use the AR camera scan to visualize spending goals in real-world contexts.
"#;

pub(crate) const DEBT: &str = r#"
**Debt Management (Enhanced by AR Engagement)**
- **Snowball Method**: Pay smallest debts first ([Debt.org](https://www.debt.org)).
- **Avalanche Method**: Prioritize high-interest debts ([MoneySmart.gov](https://www.moneysmart.gov)).
- **Negotiate**: Contact creditors for lower rates ([Nedbank](https://www.nedbank.co.za)).
- **AR Integration**: Visualize debt reduction progress via AR camera scan.
"#;

pub(crate) const SAVINGS: &str = r#"
**Savings Plan (Enhanced by AR Engagement)**
- **Emergency Fund**: Save 3-6 months of expenses ([MoneySmart.gov](https://www.moneysmart.gov)).
- **Automate**: Schedule transfers to a high-yield account ([FNB](https://www.fnb.co.za)).
- **Stokvel**: Join a community savings group ([Fin24](https://www.fin24.com)).
- **AR Integration**: Use AR to project savings goals in your environment.
"#;

pub(crate) const INVESTMENT: &str = r#"
**Investment Options (Enhanced by AR Engagement)**
- **Low-Risk**: Start with ETFs via a tax-free account ([SARS.gov.za](https://www.sars.gov.za)).
- **Diversify**: Spread across stocks, bonds, property ([Investopedia](https://www.investopedia.com)).
- **Learn**: Use [EasyEquities](https://www.easyequities.co.za) for beginners.
- **AR Integration**: Visualize investment growth with AR camera features.
"#;

pub(crate) const CREDIT_SCORE: &str = r#"
**Credit Score Improvement (Enhanced by AR Engagement)**
- **Check Score**: Free report from [TransUnion](https://www.transunion.com).
- **Pay on Time**: Timely payments boost your score.
- **Reduce Debt**: Keep card balances below 30% of limits.
- **AR Integration**: Use AR to track credit score progress visually.
"#;

pub(crate) const STOKVEL: &str = r#"
**Stokvel Guide (Enhanced by AR Engagement)**
- **Join**: Contribute monthly to a group pool ([NASASA](https://www.nasasa.co.za)).
- **Set Rules**: Agree on contributions and payouts.
- **Bank Account**: Use [FNB Stokvel Account](https://www.fnb.co.za).
- **AR Integration**: Visualize stokvel contributions via AR camera scan.
"#;

pub(crate) const RETIREMENT: &str = r#"
**Retirement Planning (Enhanced by AR Engagement)**
- **Start Early**: Contribute to a retirement annuity ([Sanlam](https://www.sanlam.co.za)).
- **Tax Benefits**: Use [SARS tax-free accounts](https://www.sars.gov.za).
- **Employer Plans**: Maximize pension contributions.
- **AR Integration**: Project retirement goals with AR visualization.
"#;

/// Fixed onboarding document returned for empty or whitespace-only queries,
/// bypassing classification and extraction entirely.
pub const ONBOARDING: &str = r#"
**Welcome to Financial World Quest**
- **Get Started with AR**: Use the AR camera scan to start your financial quest.
- **Ask Questions**: Query about budgeting, debt, savings, or stokvels.
- **Resources**: [MyMoney.gov](https://www.mymoney.gov), [SARS.gov.za](https://www.sars.gov.za).
- **Example**: "Budget R5000" or "Manage credit card debt".
"#;

/// Base template for a category.
pub fn template(category: Category) -> &'static str {
    match category {
        Category::Budget => BUDGET,
        Category::Debt => DEBT,
        Category::Savings => SAVINGS,
        Category::Investment => INVESTMENT,
        Category::CreditScore => CREDIT_SCORE,
        Category::Stokvel => STOKVEL,
        Category::Retirement => RETIREMENT,
    }
}
