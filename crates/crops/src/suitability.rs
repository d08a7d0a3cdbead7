//! Per-crop suitability scoring.
//!
//! Each criterion contributes its weight to the attainable total only when
//! the farmer supplied the data it needs. Soil, climate and season are always
//! scored; pH, rainfall, temperature, experience, budget and irrigation only
//! when present.

use serde::{Deserialize, Serialize};

use farmwise_catalog::{CropProfile, DemandTier, DifficultyTier, YieldRange};
use farmwise_core::ValueObject;

use crate::conditions::{CropConditions, ExperienceLevel};

const SOIL_WEIGHT: u32 = 20;
const SOIL_PARTIAL: u32 = 10;
const PH_WEIGHT: u32 = 15;
const PH_PARTIAL: u32 = 10;
const PH_MARGIN: f64 = 0.5;
const CLIMATE_WEIGHT: u32 = 20;
const RAINFALL_WEIGHT: u32 = 15;
const RAINFALL_PARTIAL: u32 = 10;
const RAINFALL_IRRIGATED: u32 = 12;
const TEMPERATURE_WEIGHT: u32 = 15;
const TEMPERATURE_PARTIAL: u32 = 10;
const TEMPERATURE_MARGIN: f64 = 3.0;
const SEASON_WEIGHT: u32 = 10;
const EXPERIENCE_WEIGHT: u32 = 5;
const EXPERIENCE_STRETCH: u32 = 3;
const BUDGET_WEIGHT: u32 = 5;
const IRRIGATION_WEIGHT: u32 = 5;

/// Running (earned, possible) tally plus the explanations that fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    earned: u32,
    possible: u32,
    factors: Vec<String>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a criterion worth `weight` points.
    pub fn consider(&mut self, weight: u32) {
        self.possible += weight;
    }

    pub fn award(&mut self, points: u32) {
        self.earned += points;
    }

    pub fn explain(&mut self, factor: impl Into<String>) {
        self.factors.push(factor.into());
    }

    pub fn earned(&self) -> u32 {
        self.earned
    }

    pub fn possible(&self) -> u32 {
        self.possible
    }

    /// `earned / possible` as a whole percentage, half away from zero.
    pub fn score(&self) -> u8 {
        if self.possible == 0 {
            return 0;
        }
        let pct = (f64::from(self.earned) / f64::from(self.possible) * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    pub fn into_factors(self) -> Vec<String> {
        self.factors
    }
}

/// How well one crop fits the stated conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSuitability {
    pub crop_name: String,
    pub suitability_score: u8,
    pub confidence_factors: Vec<String>,
    pub market_demand: DemandTier,
    pub estimated_yield_kg_per_hectare: String,
    pub difficulty_level: DifficultyTier,
    pub yield_range: YieldRange,
}

impl ValueObject for CropSuitability {}

/// Score `crop` against already-normalised `conditions`.
pub fn score_crop(crop: &CropProfile, conditions: &CropConditions) -> CropSuitability {
    let mut acc = ScoreAccumulator::new();

    score_soil(&mut acc, crop, &conditions.soil_type);
    if let Some(ph) = conditions.soil_ph {
        score_ph(&mut acc, crop, ph);
    }

    acc.consider(CLIMATE_WEIGHT);
    if crop.accepts_climate(&conditions.climate_zone) {
        acc.award(CLIMATE_WEIGHT);
        acc.explain(format!("Perfect climate match ({})", conditions.climate_zone));
    }

    if let Some(mm) = conditions.average_rainfall_mm {
        score_rainfall(&mut acc, crop, mm, conditions.has_irrigation());
    }
    if let Some(t) = conditions.average_temperature_celsius {
        score_temperature(&mut acc, crop, t);
    }

    acc.consider(SEASON_WEIGHT);
    if crop.accepts_season(&conditions.season) {
        acc.award(SEASON_WEIGHT);
        acc.explain(format!("Right season ({})", conditions.season));
    }

    if let Some(level) = conditions.experience_level {
        score_experience(&mut acc, crop, level);
    }

    if let Some(budget) = conditions.budget_category {
        acc.consider(BUDGET_WEIGHT);
        if budget >= crop.budget {
            acc.award(BUDGET_WEIGHT);
        }
    }

    if let Some(available) = conditions.irrigation_available {
        acc.consider(IRRIGATION_WEIGHT);
        if available || !crop.irrigation_tolerance {
            acc.award(IRRIGATION_WEIGHT);
        } else {
            acc.explain("May need irrigation for best results");
        }
    }

    let suitability_score = acc.score();
    CropSuitability {
        crop_name: crop.name.clone(),
        suitability_score,
        confidence_factors: acc.into_factors(),
        market_demand: crop.market_demand,
        estimated_yield_kg_per_hectare: crop.yield_kg_per_hectare.label(),
        difficulty_level: crop.difficulty,
        yield_range: crop.yield_kg_per_hectare,
    }
}

fn score_soil(acc: &mut ScoreAccumulator, crop: &CropProfile, soil: &str) {
    acc.consider(SOIL_WEIGHT);
    if crop.accepts_soil(soil) {
        acc.award(SOIL_WEIGHT);
        acc.explain(format!("Excellent soil match ({soil})"));
    } else if crop.resembles_soil(soil) {
        acc.award(SOIL_PARTIAL);
        acc.explain(format!("Acceptable soil type ({soil})"));
    }
}

fn score_ph(acc: &mut ScoreAccumulator, crop: &CropProfile, ph: f64) {
    acc.consider(PH_WEIGHT);
    let range = crop.soil_ph_range;
    if range.contains(ph) {
        acc.award(PH_WEIGHT);
        acc.explain(format!("Optimal pH level ({ph:?})"));
    } else if range.widened_by(PH_MARGIN).contains(ph) {
        acc.award(PH_PARTIAL);
        acc.explain(format!("Acceptable pH level ({ph:?})"));
    } else {
        acc.explain(format!(
            "pH {ph:?} outside optimal range ({:?}-{:?})",
            range.min, range.max
        ));
    }
}

fn score_rainfall(acc: &mut ScoreAccumulator, crop: &CropProfile, mm: f64, irrigated: bool) {
    acc.consider(RAINFALL_WEIGHT);
    let range = crop.rainfall_mm;
    if range.contains(mm) {
        acc.award(RAINFALL_WEIGHT);
        acc.explain(format!("Ideal rainfall ({mm:?}mm)"));
    } else if range.scaled(0.8, 1.2).contains(mm) {
        acc.award(RAINFALL_PARTIAL);
        acc.explain(format!("Acceptable rainfall ({mm:?}mm)"));
    } else if irrigated && mm < range.min {
        acc.award(RAINFALL_IRRIGATED);
        acc.explain(format!("Low rainfall ({mm:?}mm) but irrigation available"));
    }
}

fn score_temperature(acc: &mut ScoreAccumulator, crop: &CropProfile, t: f64) {
    acc.consider(TEMPERATURE_WEIGHT);
    let range = crop.temperature_range;
    if range.contains(t) {
        acc.award(TEMPERATURE_WEIGHT);
        acc.explain(format!("Optimal temperature ({t:?}°C)"));
    } else if range.widened_by(TEMPERATURE_MARGIN).contains(t) {
        acc.award(TEMPERATURE_PARTIAL);
        acc.explain(format!("Acceptable temperature ({t:?}°C)"));
    }
}

fn score_experience(acc: &mut ScoreAccumulator, crop: &CropProfile, level: ExperienceLevel) {
    acc.consider(EXPERIENCE_WEIGHT);
    match (crop.difficulty, level) {
        (DifficultyTier::Beginner, _) => acc.award(EXPERIENCE_WEIGHT),
        (_, l) if l.is_experienced() => acc.award(EXPERIENCE_WEIGHT),
        (DifficultyTier::Intermediate, _) => {
            acc.award(EXPERIENCE_STRETCH);
            acc.explain("Moderate difficulty for beginner");
        }
    }
}
