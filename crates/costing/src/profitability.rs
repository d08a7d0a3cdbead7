use serde::{Deserialize, Serialize};

use farmwise_core::ValueObject;
use farmwise_core::numeric::{percent_of, round_to};

/// Rating bands over return on investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitabilityRating {
    Excellent,
    Good,
    Moderate,
    Low,
    Poor,
}

impl ProfitabilityRating {
    /// Band for an ROI already rounded to 2 decimals.
    pub fn from_roi(roi_percent: f64) -> Self {
        if roi_percent >= 50.0 {
            Self::Excellent
        } else if roi_percent >= 30.0 {
            Self::Good
        } else if roi_percent >= 15.0 {
            Self::Moderate
        } else if roi_percent >= 5.0 {
            Self::Low
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Poor => "poor",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Excellent => "High profitability expected. Good investment opportunity.",
            Self::Good => "Solid profit margins. Recommended for experienced farmers.",
            Self::Moderate => "Moderate returns. Consider cost optimization strategies.",
            Self::Low => "Low profit margins. Review costs and consider alternative crops.",
            Self::Poor => "Minimal or negative returns. High risk investment.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityAnalysis {
    pub roi_percent: f64,
    /// Realised margin: profit over revenue.
    pub profit_margin_percent: f64,
    pub rating: ProfitabilityRating,
    pub recommendation: String,
    pub break_even_required: bool,
}

impl ValueObject for ProfitabilityAnalysis {}

pub fn profitability_analysis(
    total_cost: f64,
    total_profit: f64,
    total_revenue: f64,
) -> ProfitabilityAnalysis {
    let roi_percent = if total_cost > 0.0 {
        round_to(total_profit / total_cost * 100.0, 2)
    } else {
        0.0
    };
    let rating = ProfitabilityRating::from_roi(roi_percent);

    ProfitabilityAnalysis {
        roi_percent,
        profit_margin_percent: percent_of(total_profit, total_revenue),
        rating,
        recommendation: rating.recommendation().to_string(),
        break_even_required: total_cost > 0.0,
    }
}
