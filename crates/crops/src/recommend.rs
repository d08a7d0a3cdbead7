use serde::{Deserialize, Serialize};

use farmwise_catalog::ReferenceCatalog;
use farmwise_core::numeric::round_to;
use farmwise_core::{AdvisoryResult, ValueObject};

use crate::analysis::{STRONG_MARKET_THRESHOLD, high_demand_count, risk_factors, success_factors};
use crate::conditions::CropConditions;
use crate::suitability::{CropSuitability, score_crop};

pub const RECOMMENDED_COUNT: usize = 5;
pub const ALTERNATIVE_COUNT: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPotential {
    High,
    Medium,
    Low,
}

impl MarketPotential {
    fn from_high_demand(count: usize) -> Self {
        if count >= STRONG_MARKET_THRESHOLD {
            MarketPotential::High
        } else if count >= 1 {
            MarketPotential::Medium
        } else {
            MarketPotential::Low
        }
    }
}

/// Ranked crop choices with market and risk narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendationResult {
    pub recommended_crops: Vec<CropSuitability>,
    pub alternative_crops: Vec<CropSuitability>,
    /// Mean score of the recommended crops.
    pub confidence_score: f64,
    pub market_potential: MarketPotential,
    /// Yield label of the best crop, or `"N/A"`.
    pub estimated_yield_range: String,
    pub risk_factors: Vec<String>,
    pub success_factors: Vec<String>,
}

impl ValueObject for CropRecommendationResult {}

/// Score every catalog crop and sort by score, highest first.
///
/// The sort is stable: equal scores keep catalog order.
pub fn rank_crops(catalog: &ReferenceCatalog, conditions: &CropConditions) -> Vec<CropSuitability> {
    let mut ranked: Vec<CropSuitability> = catalog
        .crops()
        .iter()
        .map(|crop| score_crop(crop, conditions))
        .collect();
    ranked.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    ranked
}

pub fn recommend_crops(
    catalog: &ReferenceCatalog,
    conditions: &CropConditions,
) -> AdvisoryResult<CropRecommendationResult> {
    conditions.validate()?;
    let conditions = conditions.normalized();

    let mut ranked = rank_crops(catalog, &conditions).into_iter();
    let recommended_crops: Vec<CropSuitability> =
        ranked.by_ref().take(RECOMMENDED_COUNT).collect();
    let alternative_crops: Vec<CropSuitability> = ranked.take(ALTERNATIVE_COUNT).collect();

    let confidence_score = if recommended_crops.is_empty() {
        0.0
    } else {
        let total: f64 = recommended_crops
            .iter()
            .map(|c| f64::from(c.suitability_score))
            .sum();
        round_to(total / recommended_crops.len() as f64, 2)
    };

    let estimated_yield_range = recommended_crops
        .first()
        .map(|c| c.estimated_yield_kg_per_hectare.clone())
        .unwrap_or_else(|| "N/A".to_string());

    Ok(CropRecommendationResult {
        market_potential: MarketPotential::from_high_demand(high_demand_count(&recommended_crops)),
        risk_factors: risk_factors(&conditions, &recommended_crops),
        success_factors: success_factors(&conditions, &recommended_crops),
        confidence_score,
        estimated_yield_range,
        recommended_crops,
        alternative_crops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmwise_catalog::{
        Bounds, BudgetTier, CropProfile, DemandTier, DifficultyTier, YieldRange,
    };
    use farmwise_core::AdvisoryError;
    use proptest::prelude::*;

    use crate::conditions::ExperienceLevel;

    fn catalog() -> &'static ReferenceCatalog {
        ReferenceCatalog::standard()
    }

    fn names(crops: &[CropSuitability]) -> Vec<&str> {
        crops.iter().map(|c| c.crop_name.as_str()).collect()
    }

    #[test]
    fn loamy_tropical_rainy_season_favours_maize() {
        let conditions = CropConditions::new("Ibadan", "loamy", 2.0, "tropical", "rainy_season");
        let r = recommend_crops(catalog(), &conditions).unwrap();

        assert_eq!(r.recommended_crops[0].crop_name, "maize");
        assert_eq!(r.recommended_crops[0].suitability_score, 100);
        assert_eq!(
            names(&r.recommended_crops),
            vec!["maize", "rice", "cassava", "yam", "pepper"]
        );
        assert_eq!(
            names(&r.alternative_crops),
            vec!["beans", "groundnut", "sorghum"]
        );
        assert_eq!(r.confidence_score, 100.0);
        assert_eq!(r.market_potential, MarketPotential::High);
        assert_eq!(r.estimated_yield_range, "2000-4000");
        assert_eq!(
            r.risk_factors,
            vec!["No irrigation - dependent on rainfall patterns"]
        );
        assert_eq!(
            r.success_factors,
            vec![
                "Excellent soil type - suitable for wide variety of crops",
                "Tropical climate - ideal for diverse crop production",
                "Multiple high-demand crops suitable - strong market opportunities",
                "Use certified seeds and follow recommended planting schedules",
                "Implement crop rotation to maintain soil health",
            ]
        );
    }

    #[test]
    fn categorical_inputs_are_normalised() {
        let plain = CropConditions::new("x", "loamy", 2.0, "tropical", "rainy_season");
        let shouty = CropConditions::new("x", " LOAMY", 2.0, "Tropical ", "Rainy_Season");
        let a = recommend_crops(catalog(), &plain).unwrap();
        let b = recommend_crops(catalog(), &shouty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn confidence_is_mean_of_top_five() {
        let conditions = CropConditions::new("Kano", "sandy", 4.0, "arid", "dry_season")
            .with_irrigation(false)
            .with_experience(ExperienceLevel::Beginner)
            .with_budget(BudgetTier::Low);
        let r = recommend_crops(catalog(), &conditions).unwrap();

        let mean = r
            .recommended_crops
            .iter()
            .map(|c| f64::from(c.suitability_score))
            .sum::<f64>()
            / r.recommended_crops.len() as f64;
        assert!((r.confidence_score - mean).abs() <= 0.005);
        assert!(
            r.risk_factors
                .contains(&"Water scarcity - ensure adequate irrigation infrastructure".to_string())
        );
    }

    #[test]
    fn small_catalog_yields_short_lists() {
        let catalog = ReferenceCatalog::builder()
            .crop(CropProfile {
                name: "teff".to_string(),
                soil_types: vec!["clay".to_string()],
                soil_ph_range: Bounds::new(5.0, 7.0),
                climate_zones: vec!["highland".to_string()],
                rainfall_mm: Bounds::new(400.0, 900.0),
                temperature_range: Bounds::new(10.0, 25.0),
                seasons: vec!["rainy_season".to_string()],
                difficulty: DifficultyTier::Beginner,
                budget: BudgetTier::Low,
                yield_kg_per_hectare: YieldRange::new(1000, 2000),
                market_demand: DemandTier::High,
                irrigation_tolerance: false,
            })
            .build()
            .unwrap();
        let conditions = CropConditions::new("x", "clay", 1.0, "highland", "dry_season");
        let r = recommend_crops(&catalog, &conditions).unwrap();

        assert_eq!(r.recommended_crops.len(), 1);
        assert!(r.alternative_crops.is_empty());
        assert_eq!(r.market_potential, MarketPotential::Medium);
        assert_eq!(r.confidence_score, 80.0);

        let empty = ReferenceCatalog::builder().build().unwrap();
        let r = recommend_crops(&empty, &conditions).unwrap();
        assert!(r.recommended_crops.is_empty());
        assert_eq!(r.confidence_score, 0.0);
        assert_eq!(r.market_potential, MarketPotential::Low);
        assert_eq!(r.estimated_yield_range, "N/A");
    }

    #[test]
    fn rejects_invalid_land_and_ph() {
        let conditions = CropConditions::new("x", "loamy", -1.0, "tropical", "rainy_season");
        assert!(matches!(
            recommend_crops(catalog(), &conditions),
            Err(AdvisoryError::InvalidInput(_))
        ));

        let conditions =
            CropConditions::new("x", "loamy", 1.0, "tropical", "rainy_season").with_soil_ph(15.0);
        assert!(matches!(
            recommend_crops(catalog(), &conditions),
            Err(AdvisoryError::InvalidInput(_))
        ));
    }

    fn any_conditions() -> impl Strategy<Value = CropConditions> {
        (
            prop::sample::select(vec!["loamy", "sandy", "clay", "silt", "sandy_loam", "clay_loam"]),
            prop::sample::select(vec!["tropical", "arid", "semi_arid", "temperate", "subtropical"]),
            prop::sample::select(vec!["rainy_season", "dry_season", "harmattan", "early_dry"]),
            proptest::option::of(3.0f64..10.0f64),
            proptest::option::of(100.0f64..2_500.0f64),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(soil, zone, season, ph, rain, irrigation)| CropConditions {
                soil_ph: ph,
                average_rainfall_mm: rain,
                irrigation_available: irrigation,
                ..CropConditions::new("anywhere", soil, 1.0, zone, season)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: lists are bounded and sorted, and repeat calls agree.
        #[test]
        fn ranking_is_bounded_sorted_and_repeatable(conditions in any_conditions()) {
            let r = recommend_crops(catalog(), &conditions).unwrap();

            prop_assert!(r.recommended_crops.len() <= RECOMMENDED_COUNT);
            prop_assert!(r.alternative_crops.len() <= ALTERNATIVE_COUNT);

            let all: Vec<&CropSuitability> = r
                .recommended_crops
                .iter()
                .chain(r.alternative_crops.iter())
                .collect();
            for pair in all.windows(2) {
                prop_assert!(pair[0].suitability_score >= pair[1].suitability_score);
            }

            prop_assert_eq!(r, recommend_crops(catalog(), &conditions).unwrap());
        }

        /// Property: equal scores keep catalog order.
        #[test]
        fn ties_keep_catalog_order(conditions in any_conditions()) {
            let ranked = rank_crops(catalog(), &conditions.normalized());
            let position = |name: &str| {
                catalog().crops().iter().position(|c| c.name == name).unwrap()
            };
            for pair in ranked.windows(2) {
                if pair[0].suitability_score == pair[1].suitability_score {
                    prop_assert!(position(&pair[0].crop_name) < position(&pair[1].crop_name));
                }
            }
        }
    }
}
