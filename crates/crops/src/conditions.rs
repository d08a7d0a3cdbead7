use serde::{Deserialize, Serialize};

use farmwise_catalog::{BudgetTier, normalize_name};
use farmwise_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive, ensure_within};
use farmwise_core::{AdvisoryResult, ValueObject};

/// Self-reported farming experience.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub fn is_experienced(&self) -> bool {
        matches!(self, ExperienceLevel::Intermediate | ExperienceLevel::Expert)
    }
}

/// Land, climate and preference data for a crop recommendation.
///
/// `location` is a free-text label carried for the caller; it does not
/// influence scoring. The optional refinements only count toward a crop's
/// score when they are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropConditions {
    pub location: String,
    pub soil_type: String,
    pub land_size_hectares: f64,
    pub climate_zone: String,
    pub season: String,
    #[serde(default)]
    pub soil_ph: Option<f64>,
    #[serde(default)]
    pub average_rainfall_mm: Option<f64>,
    #[serde(default)]
    pub average_temperature_celsius: Option<f64>,
    #[serde(default)]
    pub irrigation_available: Option<bool>,
    #[serde(default)]
    pub budget_category: Option<BudgetTier>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

impl ValueObject for CropConditions {}

impl CropConditions {
    pub fn new(
        location: impl Into<String>,
        soil_type: impl Into<String>,
        land_size_hectares: f64,
        climate_zone: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            soil_type: soil_type.into(),
            land_size_hectares,
            climate_zone: climate_zone.into(),
            season: season.into(),
            soil_ph: None,
            average_rainfall_mm: None,
            average_temperature_celsius: None,
            irrigation_available: None,
            budget_category: None,
            experience_level: None,
        }
    }

    pub fn with_soil_ph(mut self, ph: f64) -> Self {
        self.soil_ph = Some(ph);
        self
    }

    pub fn with_rainfall(mut self, mm: f64) -> Self {
        self.average_rainfall_mm = Some(mm);
        self
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.average_temperature_celsius = Some(celsius);
        self
    }

    pub fn with_irrigation(mut self, available: bool) -> Self {
        self.irrigation_available = Some(available);
        self
    }

    pub fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget_category = Some(budget);
        self
    }

    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    /// True only when irrigation was reported as available.
    pub fn has_irrigation(&self) -> bool {
        self.irrigation_available == Some(true)
    }

    pub fn validate(&self) -> AdvisoryResult<()> {
        ensure_positive("land_size_hectares", self.land_size_hectares)?;
        if let Some(ph) = self.soil_ph {
            ensure_within("soil_ph", ph, 0.0, 14.0)?;
        }
        if let Some(mm) = self.average_rainfall_mm {
            ensure_non_negative("average_rainfall_mm", mm)?;
        }
        if let Some(t) = self.average_temperature_celsius {
            ensure_finite("average_temperature_celsius", t)?;
        }
        Ok(())
    }

    /// Copy with soil, climate and season trimmed and lowercased.
    pub fn normalized(&self) -> Self {
        Self {
            soil_type: normalize_name(&self.soil_type),
            climate_zone: normalize_name(&self.climate_zone),
            season: normalize_name(&self.season),
            ..self.clone()
        }
    }
}
