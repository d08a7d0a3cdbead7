use serde::{Deserialize, Serialize};

use farmwise_core::ValueObject;

/// Closed numeric range `[min, max]`, serialized as a two-element array.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Widen both ends by a fixed amount (e.g. ±0.5 pH, ±3 °C).
    pub fn widened_by(&self, margin: f64) -> Self {
        Self::new(self.min - margin, self.max + margin)
    }

    /// Scale each end by its own factor, e.g. `(0.8, 1.2)` for a ±20% band.
    pub fn scaled(&self, lower: f64, upper: f64) -> Self {
        Self::new(self.min * lower, self.max * upper)
    }

    pub fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl From<[f64; 2]> for Bounds {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Bounds> for [f64; 2] {
    fn from(value: Bounds) -> Self {
        [value.min, value.max]
    }
}

/// Storage category of a commodity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommodityCategory {
    Vegetable,
    Fruit,
    Grain,
    Tuber,
    Legume,
}

impl CommodityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommodityCategory::Vegetable => "vegetable",
            CommodityCategory::Fruit => "fruit",
            CommodityCategory::Grain => "grain",
            CommodityCategory::Tuber => "tuber",
            CommodityCategory::Legume => "legume",
        }
    }

    /// Fresh produce that benefits from cold, sealed storage.
    pub fn is_fresh_produce(&self) -> bool {
        matches!(self, CommodityCategory::Vegetable | CommodityCategory::Fruit)
    }
}

/// Shelf-life reference data for one commodity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityProfile {
    pub name: String,
    /// Viable days under optimal storage, before any modifier.
    pub base_days: u32,
    pub optimal_temp: f64,
    pub optimal_humidity: f64,
    pub category: CommodityCategory,
}

impl ValueObject for CommodityProfile {}

/// Growing difficulty of a crop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
}

/// Input budget tier, ordered `Low < Medium < High`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

/// Market demand tier of a crop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTier {
    Low,
    Medium,
    High,
}

/// Yield range in kg/hectare, serialized as `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct YieldRange {
    pub min: u32,
    pub max: u32,
}

impl YieldRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Display label used in recommendations, e.g. `"2000-4000"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

impl From<[u32; 2]> for YieldRange {
    fn from(value: [u32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<YieldRange> for [u32; 2] {
    fn from(value: YieldRange) -> Self {
        [value.min, value.max]
    }
}

/// Suitability reference data for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub soil_types: Vec<String>,
    pub soil_ph_range: Bounds,
    pub climate_zones: Vec<String>,
    pub rainfall_mm: Bounds,
    pub temperature_range: Bounds,
    pub seasons: Vec<String>,
    pub difficulty: DifficultyTier,
    pub budget: BudgetTier,
    pub yield_kg_per_hectare: YieldRange,
    pub market_demand: DemandTier,
    /// Crop responds to irrigation and loses points when none is available.
    pub irrigation_tolerance: bool,
}

impl ValueObject for CropProfile {}

impl CropProfile {
    pub fn accepts_soil(&self, soil: &str) -> bool {
        self.soil_types.iter().any(|s| s == soil)
    }

    /// Substring match in either direction, e.g. `sandy` vs `sandy_loam`.
    pub fn resembles_soil(&self, soil: &str) -> bool {
        !soil.is_empty()
            && self
                .soil_types
                .iter()
                .any(|s| s.contains(soil) || soil.contains(s.as_str()))
    }

    pub fn accepts_climate(&self, zone: &str) -> bool {
        self.climate_zones.iter().any(|z| z == zone)
    }

    pub fn accepts_season(&self, season: &str) -> bool {
        self.seasons.iter().any(|s| s == season)
    }
}
