//! Financial topic categories

use serde::{Deserialize, Serialize};

/// Closed set of financial topics a query can be classified into.
///
/// Every classification result is one of these variants; there is no
/// "unknown" category. `Category::ALL` fixes the ordering used wherever a
/// deterministic tie-break is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Budget,
    Debt,
    Savings,
    Investment,
    CreditScore,
    Stokvel,
    Retirement,
}

impl Category {
    /// All categories in their fixed, deterministic order.
    pub const ALL: [Category; 7] = [
        Category::Budget,
        Category::Debt,
        Category::Savings,
        Category::Investment,
        Category::CreditScore,
        Category::Stokvel,
        Category::Retirement,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Budget => "budget",
            Category::Debt => "debt",
            Category::Savings => "savings",
            Category::Investment => "investment",
            Category::CreditScore => "credit_score",
            Category::Stokvel => "stokvel",
            Category::Retirement => "retirement",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
