use serde::Deserialize;

use crate::models::domain::scalar::Scalar;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BudgetAllocation {
    #[serde(default = "Scalar::blank")]
    pub category: Scalar,
    #[serde(default)]
    pub amount: Scalar,
    #[serde(default)]
    pub percentage: Scalar,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetData {
    pub income: Scalar,
    pub allocations: Vec<BudgetAllocation>,
    pub total_allocated: Scalar,
    pub remaining: Scalar,
}

impl BudgetData {
    /// `"Food: ₹5000 (25%), Rent: ₹6000 (30%)"`
    pub fn allocation_summary(&self) -> String {
        self.allocations
            .iter()
            .map(|item| format!("{}: ₹{} ({}%)", item.category, item.amount, item.percentage))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
