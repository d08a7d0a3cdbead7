//! Built-in platform tables.

use std::collections::BTreeMap;

use crate::catalog::ReferenceCatalog;
use crate::profile::{
    Bounds, BudgetTier, CommodityCategory, CommodityProfile, CropProfile, DemandTier,
    DifficultyTier, YieldRange,
};

use BudgetTier as B;
use CommodityCategory as C;
use DemandTier as D;
use DifficultyTier as T;

/// (name, base days, optimal °C, optimal humidity %, category)
const COMMODITIES: &[(&str, u32, f64, f64, CommodityCategory)] = &[
    // vegetables
    ("tomato", 14, 13.0, 90.0, C::Vegetable),
    ("pepper", 21, 7.0, 90.0, C::Vegetable),
    ("onion", 90, 0.0, 65.0, C::Vegetable),
    ("cabbage", 90, 0.0, 95.0, C::Vegetable),
    ("carrot", 120, 0.0, 95.0, C::Vegetable),
    ("lettuce", 14, 0.0, 95.0, C::Vegetable),
    // grains
    ("maize", 180, 15.0, 14.0, C::Grain),
    ("rice", 365, 15.0, 14.0, C::Grain),
    ("millet", 180, 15.0, 14.0, C::Grain),
    ("sorghum", 180, 15.0, 14.0, C::Grain),
    // tubers
    ("yam", 180, 16.0, 75.0, C::Tuber),
    ("cassava", 7, 0.0, 85.0, C::Tuber),
    ("potato", 120, 4.0, 90.0, C::Tuber),
    ("sweet_potato", 90, 13.0, 85.0, C::Tuber),
    // fruits
    ("banana", 14, 13.0, 90.0, C::Fruit),
    ("plantain", 21, 12.0, 90.0, C::Fruit),
    ("orange", 60, 3.0, 90.0, C::Fruit),
    ("mango", 21, 13.0, 85.0, C::Fruit),
    ("pineapple", 28, 7.0, 90.0, C::Fruit),
    ("watermelon", 21, 10.0, 90.0, C::Fruit),
    // legumes
    ("beans", 365, 15.0, 14.0, C::Legume),
    ("groundnut", 180, 10.0, 65.0, C::Legume),
    ("soybean", 365, 15.0, 14.0, C::Legume),
];

const STORAGE_METHODS: &[(&str, f64)] = &[
    ("cold_storage", 1.5),
    ("refrigerated", 1.3),
    ("warehouse", 0.9),
    ("room_temp", 0.6),
    ("outdoor", 0.4),
];

const PACKAGING: &[(&str, f64)] = &[
    ("vacuum", 1.4),
    ("sealed", 1.2),
    ("crates", 1.0),
    ("open", 0.7),
    ("bags", 0.9),
];

struct CropRow {
    name: &'static str,
    soils: &'static [&'static str],
    ph: (f64, f64),
    climates: &'static [&'static str],
    rainfall: (f64, f64),
    temperature: (f64, f64),
    seasons: &'static [&'static str],
    difficulty: DifficultyTier,
    budget: BudgetTier,
    yield_kg: (u32, u32),
    demand: DemandTier,
    irrigation_tolerance: bool,
}

const CROPS: &[CropRow] = &[
    CropRow {
        name: "maize",
        soils: &["loamy", "sandy_loam", "silt"],
        ph: (5.5, 7.5),
        climates: &["tropical", "subtropical", "temperate"],
        rainfall: (500.0, 1200.0),
        temperature: (20.0, 30.0),
        seasons: &["rainy_season", "early_dry"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (2000, 4000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "rice",
        soils: &["clay", "loamy", "clay_loam"],
        ph: (5.0, 7.0),
        climates: &["tropical", "subtropical"],
        rainfall: (1000.0, 2000.0),
        temperature: (20.0, 35.0),
        seasons: &["rainy_season"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (3000, 6000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "cassava",
        soils: &["sandy", "loamy", "sandy_loam"],
        ph: (4.5, 7.0),
        climates: &["tropical", "subtropical"],
        rainfall: (600.0, 1500.0),
        temperature: (25.0, 35.0),
        seasons: &["rainy_season", "dry_season"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (10000, 25000),
        demand: D::High,
        irrigation_tolerance: false,
    },
    CropRow {
        name: "yam",
        soils: &["loamy", "sandy_loam", "silt"],
        ph: (5.5, 6.5),
        climates: &["tropical"],
        rainfall: (1000.0, 1500.0),
        temperature: (25.0, 30.0),
        seasons: &["rainy_season"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (8000, 15000),
        demand: D::High,
        irrigation_tolerance: false,
    },
    CropRow {
        name: "tomato",
        soils: &["loamy", "sandy_loam"],
        ph: (6.0, 7.0),
        climates: &["tropical", "subtropical", "temperate"],
        rainfall: (400.0, 800.0),
        temperature: (18.0, 27.0),
        seasons: &["dry_season", "harmattan"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (15000, 35000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "pepper",
        soils: &["loamy", "sandy_loam"],
        ph: (6.0, 7.0),
        climates: &["tropical", "subtropical"],
        rainfall: (600.0, 1200.0),
        temperature: (20.0, 30.0),
        seasons: &["rainy_season", "dry_season"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (2000, 5000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "beans",
        soils: &["loamy", "sandy_loam", "silt"],
        ph: (6.0, 7.5),
        climates: &["tropical", "subtropical", "temperate"],
        rainfall: (400.0, 800.0),
        temperature: (15.0, 25.0),
        seasons: &["rainy_season", "early_dry"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (800, 1500),
        demand: D::High,
        irrigation_tolerance: false,
    },
    CropRow {
        name: "groundnut",
        soils: &["sandy", "sandy_loam", "loamy"],
        ph: (5.9, 6.3),
        climates: &["tropical", "subtropical"],
        rainfall: (500.0, 1000.0),
        temperature: (20.0, 30.0),
        seasons: &["rainy_season"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (1000, 2500),
        demand: D::High,
        irrigation_tolerance: false,
    },
    CropRow {
        name: "sorghum",
        soils: &["sandy", "loamy", "clay"],
        ph: (5.5, 8.5),
        climates: &["tropical", "subtropical", "arid"],
        rainfall: (400.0, 800.0),
        temperature: (25.0, 35.0),
        seasons: &["rainy_season", "dry_season"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (1500, 3500),
        demand: D::Medium,
        irrigation_tolerance: false,
    },
    CropRow {
        name: "millet",
        soils: &["sandy", "sandy_loam"],
        ph: (5.0, 7.0),
        climates: &["tropical", "arid", "semi_arid"],
        rainfall: (300.0, 600.0),
        temperature: (25.0, 35.0),
        seasons: &["rainy_season", "harmattan"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (800, 2000),
        demand: D::Medium,
        irrigation_tolerance: false,
    },
    CropRow {
        name: "okra",
        soils: &["loamy", "sandy_loam"],
        ph: (6.0, 6.8),
        climates: &["tropical", "subtropical"],
        rainfall: (600.0, 1000.0),
        temperature: (24.0, 32.0),
        seasons: &["rainy_season", "dry_season"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (5000, 10000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "watermelon",
        soils: &["sandy", "sandy_loam", "loamy"],
        ph: (6.0, 7.0),
        climates: &["tropical", "subtropical", "arid"],
        rainfall: (400.0, 600.0),
        temperature: (21.0, 30.0),
        seasons: &["dry_season"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (20000, 40000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "cucumber",
        soils: &["loamy", "sandy_loam"],
        ph: (6.0, 7.0),
        climates: &["tropical", "subtropical", "temperate"],
        rainfall: (400.0, 800.0),
        temperature: (18.0, 28.0),
        seasons: &["dry_season", "rainy_season"],
        difficulty: T::Beginner,
        budget: B::Low,
        yield_kg: (10000, 25000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "cabbage",
        soils: &["loamy", "clay_loam"],
        ph: (6.0, 7.5),
        climates: &["temperate", "subtropical"],
        rainfall: (400.0, 800.0),
        temperature: (15.0, 25.0),
        seasons: &["dry_season", "harmattan"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (25000, 50000),
        demand: D::High,
        irrigation_tolerance: true,
    },
    CropRow {
        name: "onion",
        soils: &["loamy", "sandy_loam", "silt"],
        ph: (6.0, 7.5),
        climates: &["tropical", "subtropical", "temperate"],
        rainfall: (350.0, 550.0),
        temperature: (13.0, 24.0),
        seasons: &["dry_season"],
        difficulty: T::Intermediate,
        budget: B::Medium,
        yield_kg: (15000, 30000),
        demand: D::High,
        irrigation_tolerance: true,
    },
];

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn table(rows: &[(&str, f64)]) -> BTreeMap<String, f64> {
    rows.iter().map(|&(name, m)| (name.to_string(), m)).collect()
}

impl CropRow {
    fn to_profile(&self) -> CropProfile {
        CropProfile {
            name: self.name.to_string(),
            soil_types: owned(self.soils),
            soil_ph_range: Bounds::new(self.ph.0, self.ph.1),
            climate_zones: owned(self.climates),
            rainfall_mm: Bounds::new(self.rainfall.0, self.rainfall.1),
            temperature_range: Bounds::new(self.temperature.0, self.temperature.1),
            seasons: owned(self.seasons),
            difficulty: self.difficulty,
            budget: self.budget,
            yield_kg_per_hectare: YieldRange::new(self.yield_kg.0, self.yield_kg.1),
            market_demand: self.demand,
            irrigation_tolerance: self.irrigation_tolerance,
        }
    }
}

/// Assemble the standard catalog. The rows are already normalised, so this
/// skips the builder and its validation (covered by a unit test instead).
pub(crate) fn catalog() -> ReferenceCatalog {
    let commodities = COMMODITIES
        .iter()
        .map(|&(name, base_days, optimal_temp, optimal_humidity, category)| {
            (
                name.to_string(),
                CommodityProfile {
                    name: name.to_string(),
                    base_days,
                    optimal_temp,
                    optimal_humidity,
                    category,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    ReferenceCatalog {
        commodities,
        storage_methods: table(STORAGE_METHODS),
        packaging: table(PACKAGING),
        crops: CROPS.iter().map(CropRow::to_profile).collect(),
    }
}
