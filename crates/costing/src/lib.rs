//! `farmwise-costing`: cost & profitability calculator.
//!
//! Turns itemised growing costs and an expected yield into per-kg cost, a
//! margin-adjusted selling price, revenue and profit, a categorised breakdown
//! and a profitability rating.

pub mod breakdown;
pub mod calculator;
pub mod profitability;

pub use breakdown::{CostBreakdown, CostShare, cost_breakdown};
pub use calculator::{CostInput, CostItems, CostResult, compute_cost};
pub use profitability::{ProfitabilityAnalysis, ProfitabilityRating, profitability_analysis};
