use serde::{Deserialize, Serialize};

use farmwise_core::ValueObject;
use farmwise_core::numeric::percent_of;

use crate::calculator::CostItems;

/// One category's amount and its share of the total, in percent (2 decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostShare {
    pub amount: f64,
    pub percentage: f64,
}

impl CostShare {
    fn of(amount: f64, total: f64) -> Self {
        Self {
            amount,
            percentage: percent_of(amount, total),
        }
    }
}

/// Costs grouped into the five reporting categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub labor: CostShare,
    /// seed + fertilizer + pesticide
    pub materials: CostShare,
    /// water + electricity
    pub utilities: CostShare,
    pub transport: CostShare,
    pub other: CostShare,
    pub total: f64,
}

impl ValueObject for CostBreakdown {}

impl CostBreakdown {
    pub fn shares(&self) -> [(&'static str, &CostShare); 5] {
        [
            ("labor", &self.labor),
            ("materials", &self.materials),
            ("utilities", &self.utilities),
            ("transport", &self.transport),
            ("other", &self.other),
        ]
    }
}

/// Group cost items into categories. Percentages are all zero when the total is zero.
///
/// Pure and infallible so stored cost records can be re-displayed without
/// re-running the calculator.
pub fn cost_breakdown(items: &CostItems) -> CostBreakdown {
    let labor = items.labor();
    let materials = items.seed() + items.fertilizer() + items.pesticide();
    let utilities = items.water() + items.electricity();
    let transport = items.transport();
    let other = items.other();

    let total = labor + materials + utilities + transport + other;

    CostBreakdown {
        labor: CostShare::of(labor, total),
        materials: CostShare::of(materials, total),
        utilities: CostShare::of(utilities, total),
        transport: CostShare::of(transport, total),
        other: CostShare::of(other, total),
        total,
    }
}
