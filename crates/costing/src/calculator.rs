use serde::{Deserialize, Serialize};

use farmwise_core::numeric::{ensure_non_negative, ensure_positive};
use farmwise_core::{AdvisoryResult, ValueObject};

use crate::breakdown::{CostBreakdown, cost_breakdown};
use crate::profitability::{ProfitabilityAnalysis, profitability_analysis};

/// The eight optional cost line items of a growing operation (currency units).
///
/// Missing items count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostItems {
    pub labor_cost: Option<f64>,
    pub seed_cost: Option<f64>,
    pub fertilizer_cost: Option<f64>,
    pub pesticide_cost: Option<f64>,
    pub water_cost: Option<f64>,
    pub electricity_cost: Option<f64>,
    pub transport_cost: Option<f64>,
    pub other_expenses: Option<f64>,
}

impl CostItems {
    pub fn labor(&self) -> f64 {
        self.labor_cost.unwrap_or(0.0)
    }

    pub fn seed(&self) -> f64 {
        self.seed_cost.unwrap_or(0.0)
    }

    pub fn fertilizer(&self) -> f64 {
        self.fertilizer_cost.unwrap_or(0.0)
    }

    pub fn pesticide(&self) -> f64 {
        self.pesticide_cost.unwrap_or(0.0)
    }

    pub fn water(&self) -> f64 {
        self.water_cost.unwrap_or(0.0)
    }

    pub fn electricity(&self) -> f64 {
        self.electricity_cost.unwrap_or(0.0)
    }

    pub fn transport(&self) -> f64 {
        self.transport_cost.unwrap_or(0.0)
    }

    pub fn other(&self) -> f64 {
        self.other_expenses.unwrap_or(0.0)
    }

    /// Every item with its wire name, missing ones as zero.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("labor_cost", self.labor()),
            ("seed_cost", self.seed()),
            ("fertilizer_cost", self.fertilizer()),
            ("pesticide_cost", self.pesticide()),
            ("water_cost", self.water()),
            ("electricity_cost", self.electricity()),
            ("transport_cost", self.transport()),
            ("other_expenses", self.other()),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum()
    }

    pub fn validate(&self) -> AdvisoryResult<()> {
        for (field, value) in self.entries() {
            ensure_non_negative(field, value)?;
        }
        Ok(())
    }
}

/// Cost calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    pub expected_yield_kg: f64,
    #[serde(default)]
    pub profit_margin_percent: f64,
    #[serde(flatten)]
    pub costs: CostItems,
}

impl CostInput {
    pub fn new(expected_yield_kg: f64, costs: CostItems) -> Self {
        Self {
            expected_yield_kg,
            profit_margin_percent: 0.0,
            costs,
        }
    }

    pub fn with_margin(mut self, profit_margin_percent: f64) -> Self {
        self.profit_margin_percent = profit_margin_percent;
        self
    }

    pub fn validate(&self) -> AdvisoryResult<()> {
        ensure_positive("expected_yield_kg", self.expected_yield_kg)?;
        ensure_non_negative("profit_margin_percent", self.profit_margin_percent)?;
        self.costs.validate()
    }
}

/// Cost and profitability projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub total_cost: f64,
    pub cost_per_kg: f64,
    pub selling_price_per_kg: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub breakdown: CostBreakdown,
    pub profitability: ProfitabilityAnalysis,
}

impl ValueObject for CostResult {}

/// Project cost per kg, margin-adjusted price, revenue and profit.
pub fn compute_cost(input: &CostInput) -> AdvisoryResult<CostResult> {
    input.validate()?;

    let yield_kg = input.expected_yield_kg;
    let total_cost = input.costs.total();
    let cost_per_kg = total_cost / yield_kg;

    let multiplier = 1.0 + input.profit_margin_percent / 100.0;
    let selling_price_per_kg = cost_per_kg * multiplier;

    let total_revenue = selling_price_per_kg * yield_kg;
    let total_profit = total_revenue - total_cost;

    Ok(CostResult {
        total_cost,
        cost_per_kg,
        selling_price_per_kg,
        total_revenue,
        total_profit,
        breakdown: cost_breakdown(&input.costs),
        profitability: profitability_analysis(total_cost, total_profit, total_revenue),
    })
}
