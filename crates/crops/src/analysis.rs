use farmwise_catalog::{BudgetTier, DemandTier, DifficultyTier};

use crate::conditions::{CropConditions, ExperienceLevel};
use crate::suitability::CropSuitability;

/// High-demand crops needed among the top picks to call the market strong.
pub const STRONG_MARKET_THRESHOLD: usize = 3;

const GENERAL_TIPS: [&str; 2] = [
    "Use certified seeds and follow recommended planting schedules",
    "Implement crop rotation to maintain soil health",
];

pub(crate) fn high_demand_count(top: &[CropSuitability]) -> usize {
    top.iter()
        .filter(|c| c.market_demand == DemandTier::High)
        .count()
}

/// Risks raised by the conditions and the top-ranked crops, in fixed order.
pub fn risk_factors(conditions: &CropConditions, top: &[CropSuitability]) -> Vec<String> {
    let mut risks = Vec::new();

    if conditions.climate_zone == "arid" {
        risks.push("Water scarcity - ensure adequate irrigation infrastructure");
    }
    if !conditions.has_irrigation() {
        risks.push("No irrigation - dependent on rainfall patterns");
    }
    match conditions.soil_ph {
        Some(ph) if ph < 5.5 => risks.push("Acidic soil - may need lime treatment"),
        Some(ph) if ph > 7.5 => risks.push("Alkaline soil - may need sulfur treatment"),
        _ => {}
    }
    if conditions.experience_level == Some(ExperienceLevel::Beginner)
        && top
            .iter()
            .any(|c| c.difficulty_level == DifficultyTier::Intermediate)
    {
        risks.push("Some recommended crops require intermediate skills - consider training");
    }
    if conditions.budget_category == Some(BudgetTier::Low) {
        risks.push("Limited budget - prioritize low-input crops and phased planting");
    }
    if conditions.season == "dry_season" && !conditions.has_irrigation() {
        risks.push("Dry season without irrigation - limited crop options");
    }

    risks.into_iter().map(String::from).collect()
}

/// Strengths of the conditions, followed by the general growing tips.
pub fn success_factors(conditions: &CropConditions, top: &[CropSuitability]) -> Vec<String> {
    let mut factors = Vec::new();

    if conditions.has_irrigation() {
        factors.push("Irrigation available - enables year-round farming and higher yields");
    }
    if matches!(conditions.soil_type.as_str(), "loamy" | "sandy_loam") {
        factors.push("Excellent soil type - suitable for wide variety of crops");
    }
    if conditions.climate_zone == "tropical" {
        factors.push("Tropical climate - ideal for diverse crop production");
    }
    if high_demand_count(top) >= STRONG_MARKET_THRESHOLD {
        factors.push("Multiple high-demand crops suitable - strong market opportunities");
    }
    if matches!(
        conditions.budget_category,
        Some(BudgetTier::Medium | BudgetTier::High)
    ) {
        factors.push("Adequate budget - can invest in quality inputs and technology");
    }
    if conditions
        .experience_level
        .is_some_and(|l| l.is_experienced())
    {
        factors.push("Experienced farmer - can handle complex crops and techniques");
    }
    factors.extend(GENERAL_TIPS);

    factors.into_iter().map(String::from).collect()
}
