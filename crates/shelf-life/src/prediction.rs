use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmwise_catalog::{CommodityCategory, CommodityProfile, ReferenceCatalog};
use farmwise_core::numeric::{ensure_non_negative, ensure_positive, round_to};
use farmwise_core::{AdvisoryResult, ValueObject};

use crate::advice::{StorageConditions, StorageRecommendation, storage_recommendations};
use crate::timeline::{
    EXCELLENT_FRACTION, FAIR_FRACTION, GOOD_FRACTION, QualityCheckpoint, SELL_BY_FRACTION,
    days_after, fraction_of, quality_timeline,
};

/// Multiplier for a storage method missing from the catalog.
pub const UNKNOWN_STORAGE_MULTIPLIER: f64 = 0.8;
/// Multiplier for a packaging type missing from the catalog.
pub const UNKNOWN_PACKAGING_MULTIPLIER: f64 = 1.0;

const TEMPERATURE_FLOOR: f64 = 0.3;
const HUMIDITY_FLOOR: f64 = 0.5;

/// A harvested lot to forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeInput {
    #[serde(flatten)]
    pub conditions: StorageConditions,
    pub quantity_kg: f64,
    /// Defaults to the time of the call.
    #[serde(default)]
    pub harvest_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub storage_cost_per_day: f64,
}

impl ShelfLifeInput {
    pub fn new(conditions: StorageConditions, quantity_kg: f64) -> Self {
        Self {
            conditions,
            quantity_kg,
            harvest_date: None,
            storage_cost_per_day: 0.0,
        }
    }

    pub fn harvested_at(mut self, harvest_date: DateTime<Utc>) -> Self {
        self.harvest_date = Some(harvest_date);
        self
    }

    pub fn with_storage_cost(mut self, per_day: f64) -> Self {
        self.storage_cost_per_day = per_day;
        self
    }

    pub fn validate(&self) -> AdvisoryResult<()> {
        ensure_positive("quantity_kg", self.quantity_kg)?;
        self.conditions.validate()?;
        ensure_non_negative("storage_cost_per_day", self.storage_cost_per_day)?;
        Ok(())
    }
}

/// Each factor multiplied into the baseline shelf life.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedModifiers {
    pub storage_method: f64,
    pub packaging: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl AppliedModifiers {
    /// Factors for `conditions` against `profile`; unknown method or packaging
    /// fall back to their default multipliers.
    pub fn resolve(
        catalog: &ReferenceCatalog,
        profile: &CommodityProfile,
        conditions: &StorageConditions,
    ) -> Self {
        let method = conditions.method();
        let storage_method = catalog.storage_multiplier(&method).unwrap_or_else(|| {
            tracing::warn!(
                storage_method = %method,
                known = ?catalog.storage_method_names().collect::<Vec<_>>(),
                multiplier = UNKNOWN_STORAGE_MULTIPLIER,
                "unknown storage method, using default multiplier"
            );
            UNKNOWN_STORAGE_MULTIPLIER
        });

        let packaging_name = conditions.packaging();
        let packaging = catalog
            .packaging_multiplier(&packaging_name)
            .unwrap_or_else(|| {
                tracing::warn!(
                    packaging = %packaging_name,
                    known = ?catalog.packaging_names().collect::<Vec<_>>(),
                    multiplier = UNKNOWN_PACKAGING_MULTIPLIER,
                    "unknown packaging, using default multiplier"
                );
                UNKNOWN_PACKAGING_MULTIPLIER
            });

        // 15% per 5 °C off optimum, 10% per 10 points of humidity off optimum.
        let temperature = conditions
            .storage_temperature_celsius
            .map(|t| {
                let diff = (t - profile.optimal_temp).abs();
                (1.0 - diff / 5.0 * 0.15).max(TEMPERATURE_FLOOR)
            })
            .unwrap_or(1.0);
        let humidity = conditions
            .storage_humidity_percent
            .map(|h| {
                let diff = (h - profile.optimal_humidity).abs();
                (1.0 - diff / 10.0 * 0.10).max(HUMIDITY_FLOOR)
            })
            .unwrap_or(1.0);

        Self {
            storage_method,
            packaging,
            temperature,
            humidity,
        }
    }

    /// Whole viable days from `base_days`, never below one.
    pub fn apply(&self, base_days: u32) -> u32 {
        let days = f64::from(base_days)
            * self.storage_method
            * self.packaging
            * self.temperature
            * self.humidity;
        (days.floor() as u32).max(1)
    }
}

/// Shelf-life forecast for one lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeResult {
    pub produce_type: String,
    pub category: CommodityCategory,
    pub quantity_kg: f64,
    pub predicted_shelf_life_days: u32,
    /// Quality lost per day, in percent.
    pub quality_degradation_rate: f64,
    pub harvest_date: DateTime<Utc>,
    pub optimal_sell_by_date: DateTime<Utc>,
    pub spoilage_date: DateTime<Utc>,
    pub excellent_quality_until: DateTime<Utc>,
    pub good_quality_until: DateTime<Utc>,
    pub fair_quality_until: DateTime<Utc>,
    pub modifiers_applied: AppliedModifiers,
    pub storage_recommendations: StorageRecommendation,
    pub quality_timeline: Vec<QualityCheckpoint>,
    pub storage_cost_per_day: f64,
    pub estimated_total_storage_cost: f64,
}

impl ValueObject for ShelfLifeResult {}

/// Predict viable days, quality milestones and storage advice for a lot.
///
/// `now` stands in for the harvest date when the input has none.
pub fn predict_shelf_life(
    catalog: &ReferenceCatalog,
    input: &ShelfLifeInput,
    now: DateTime<Utc>,
) -> AdvisoryResult<ShelfLifeResult> {
    input.validate()?;
    let profile = catalog.commodity(&input.conditions.produce_type)?;

    let modifiers = AppliedModifiers::resolve(catalog, profile, &input.conditions);
    let days = modifiers.apply(profile.base_days);

    let harvest_date = input.harvest_date.unwrap_or(now);
    let milestone = |fraction: f64| days_after(harvest_date, fraction_of(days, fraction));

    Ok(ShelfLifeResult {
        produce_type: profile.name.clone(),
        category: profile.category,
        quantity_kg: input.quantity_kg,
        predicted_shelf_life_days: days,
        quality_degradation_rate: round_to(100.0 / f64::from(days), 2),
        harvest_date,
        optimal_sell_by_date: milestone(SELL_BY_FRACTION)?,
        spoilage_date: days_after(harvest_date, days)?,
        excellent_quality_until: milestone(EXCELLENT_FRACTION)?,
        good_quality_until: milestone(GOOD_FRACTION)?,
        fair_quality_until: milestone(FAIR_FRACTION)?,
        modifiers_applied: modifiers,
        storage_recommendations: storage_recommendations(catalog, &input.conditions)?,
        quality_timeline: quality_timeline(harvest_date, days)?,
        storage_cost_per_day: input.storage_cost_per_day,
        estimated_total_storage_cost: input.storage_cost_per_day * f64::from(days),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use farmwise_core::AdvisoryError;
    use proptest::prelude::*;

    fn catalog() -> &'static ReferenceCatalog {
        ReferenceCatalog::standard()
    }

    fn harvest() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn later() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn tomato_cold_sealed() -> ShelfLifeInput {
        ShelfLifeInput::new(
            StorageConditions::new("tomato")
                .with_method("cold_storage")
                .with_packaging("sealed"),
            500.0,
        )
        .harvested_at(harvest())
    }

    #[test]
    fn tomato_in_cold_sealed_storage_lasts_25_days() {
        let r = predict_shelf_life(catalog(), &tomato_cold_sealed(), later()).unwrap();

        assert_eq!(r.predicted_shelf_life_days, 25);
        assert_eq!(r.quality_degradation_rate, 4.0);
        assert_eq!(r.category, CommodityCategory::Vegetable);
        assert_eq!(r.modifiers_applied.storage_method, 1.5);
        assert_eq!(r.modifiers_applied.packaging, 1.2);
        assert_eq!(r.modifiers_applied.temperature, 1.0);
        assert_eq!(r.modifiers_applied.humidity, 1.0);

        assert_eq!(r.harvest_date, harvest());
        assert_eq!(r.excellent_quality_until, harvest() + Duration::days(7));
        assert_eq!(r.good_quality_until, harvest() + Duration::days(15));
        assert_eq!(r.optimal_sell_by_date, harvest() + Duration::days(17));
        assert_eq!(r.fair_quality_until, harvest() + Duration::days(21));
        assert_eq!(r.spoilage_date, harvest() + Duration::days(25));
        assert_eq!(r.quality_timeline.len(), 5);
    }

    #[test]
    fn readings_off_optimum_shorten_shelf_life() {
        let input = ShelfLifeInput::new(
            StorageConditions::new("tomato")
                .with_temperature(23.0)
                .with_humidity(70.0),
            100.0,
        )
        .harvested_at(harvest());
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();

        // 14 × 0.6 (room_temp) × 0.7 (open) × 0.7 × 0.8 = 3.29
        assert_eq!(r.predicted_shelf_life_days, 3);
        assert_eq!(r.modifiers_applied.storage_method, 0.6);
        assert_eq!(r.modifiers_applied.packaging, 0.7);
        assert!((r.modifiers_applied.temperature - 0.7).abs() < 1e-9);
        assert!((r.modifiers_applied.humidity - 0.8).abs() < 1e-9);
        assert_eq!(r.quality_degradation_rate, 33.33);
    }

    #[test]
    fn modifiers_are_floored() {
        let input = ShelfLifeInput::new(
            StorageConditions::new("tomato")
                .with_temperature(60.0)
                .with_humidity(0.0),
            100.0,
        );
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();
        assert_eq!(r.modifiers_applied.temperature, 0.3);
        assert_eq!(r.modifiers_applied.humidity, 0.5);
    }

    #[test]
    fn unknown_method_and_packaging_fall_back_to_defaults() {
        let input = ShelfLifeInput::new(
            StorageConditions::new("tomato")
                .with_method("freezer")
                .with_packaging("cardboard"),
            100.0,
        );
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();
        assert_eq!(r.modifiers_applied.storage_method, UNKNOWN_STORAGE_MULTIPLIER);
        assert_eq!(r.modifiers_applied.packaging, UNKNOWN_PACKAGING_MULTIPLIER);
        assert_eq!(r.predicted_shelf_life_days, 11);
    }

    #[test]
    fn short_lived_produce_keeps_at_least_one_day() {
        let input = ShelfLifeInput::new(
            StorageConditions::new("cassava")
                .with_method("outdoor")
                .with_temperature(35.0),
            100.0,
        )
        .harvested_at(harvest());
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();
        assert_eq!(r.predicted_shelf_life_days, 1);
        assert_eq!(r.quality_degradation_rate, 100.0);
        assert_eq!(r.excellent_quality_until, harvest());
        assert_eq!(r.spoilage_date, harvest() + Duration::days(1));
    }

    #[test]
    fn missing_harvest_date_uses_now() {
        let mut input = tomato_cold_sealed();
        input.harvest_date = None;
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();
        assert_eq!(r.harvest_date, later());
        assert_eq!(r.spoilage_date, later() + Duration::days(25));
    }

    #[test]
    fn storage_cost_covers_every_predicted_day() {
        let input = tomato_cold_sealed().with_storage_cost(120.0);
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();
        assert_eq!(r.storage_cost_per_day, 120.0);
        assert_eq!(r.estimated_total_storage_cost, 3_000.0);
    }

    #[test]
    fn names_match_case_insensitively() {
        let input = ShelfLifeInput::new(
            StorageConditions::new("  TOMATO ")
                .with_method("Cold_Storage")
                .with_packaging("SEALED"),
            10.0,
        );
        let r = predict_shelf_life(catalog(), &input, later()).unwrap();
        assert_eq!(r.produce_type, "tomato");
        assert_eq!(r.predicted_shelf_life_days, 25);
    }

    #[test]
    fn rejects_invalid_lots() {
        let mut input = tomato_cold_sealed();
        input.quantity_kg = 0.0;
        let err = predict_shelf_life(catalog(), &input, later()).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput(msg) if msg.contains("quantity_kg")));

        let input = tomato_cold_sealed().with_storage_cost(-1.0);
        let err = predict_shelf_life(catalog(), &input, later()).unwrap_err();
        assert!(
            matches!(err, AdvisoryError::InvalidInput(msg) if msg.contains("storage_cost_per_day"))
        );

        let mut input = tomato_cold_sealed();
        input.conditions.produce_type = "kiwi".into();
        let err = predict_shelf_life(catalog(), &input, later()).unwrap_err();
        assert_eq!(err.code(), "unknown_commodity");
    }

    #[test]
    fn deserializes_flat_wire_shape() {
        let input: ShelfLifeInput = serde_json::from_str(
            r#"{
                "produce_type": "tomato",
                "quantity_kg": 250,
                "harvest_date": "2024-01-01T00:00:00Z",
                "storage_method": "cold_storage",
                "packaging_type": "sealed"
            }"#,
        )
        .unwrap();
        let mut expected = tomato_cold_sealed();
        expected.quantity_kg = 250.0;
        assert_eq!(input, expected);
    }

    fn commodity_name() -> impl Strategy<Value = String> {
        let names: Vec<String> = catalog().commodity_names().map(str::to_string).collect();
        prop::sample::select(names)
    }

    fn packaging_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["vacuum", "sealed", "crates", "open", "bags"])
    }

    fn method_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "cold_storage",
            "refrigerated",
            "warehouse",
            "room_temp",
            "outdoor",
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: colder storage never shortens shelf life.
        #[test]
        fn cold_storage_outlasts_room_temp(
            name in commodity_name(),
            packaging in packaging_name(),
            temp in proptest::option::of(-10.0f64..45.0f64),
            humidity in proptest::option::of(0.0f64..100.0f64),
        ) {
            let predict = |method: &str| {
                let mut conditions = StorageConditions::new(name.clone())
                    .with_method(method)
                    .with_packaging(packaging);
                conditions.storage_temperature_celsius = temp;
                conditions.storage_humidity_percent = humidity;
                predict_shelf_life(catalog(), &ShelfLifeInput::new(conditions, 1.0), later())
                    .unwrap()
                    .predicted_shelf_life_days
            };
            prop_assert!(predict("cold_storage") >= predict("room_temp"));
        }

        /// Property: vacuum packaging never shortens shelf life.
        #[test]
        fn vacuum_outlasts_open(
            name in commodity_name(),
            method in method_name(),
        ) {
            let predict = |packaging: &str| {
                let conditions = StorageConditions::new(name.clone())
                    .with_method(method)
                    .with_packaging(packaging);
                predict_shelf_life(catalog(), &ShelfLifeInput::new(conditions, 1.0), later())
                    .unwrap()
                    .predicted_shelf_life_days
            };
            prop_assert!(predict("vacuum") >= predict("open"));
        }

        /// Property: at least one day, and milestones ordered from harvest to spoilage.
        #[test]
        fn milestones_are_ordered(
            name in commodity_name(),
            method in method_name(),
            packaging in packaging_name(),
            temp in proptest::option::of(-20.0f64..60.0f64),
            humidity in proptest::option::of(0.0f64..100.0f64),
        ) {
            let mut conditions = StorageConditions::new(name)
                .with_method(method)
                .with_packaging(packaging);
            conditions.storage_temperature_celsius = temp;
            conditions.storage_humidity_percent = humidity;
            let input = ShelfLifeInput::new(conditions, 1.0).harvested_at(harvest());
            let r = predict_shelf_life(catalog(), &input, later()).unwrap();

            prop_assert!(r.predicted_shelf_life_days >= 1);
            prop_assert!(r.harvest_date <= r.excellent_quality_until);
            prop_assert!(r.excellent_quality_until <= r.good_quality_until);
            prop_assert!(r.good_quality_until <= r.fair_quality_until);
            prop_assert!(r.fair_quality_until <= r.spoilage_date);
            prop_assert!(r.optimal_sell_by_date <= r.spoilage_date);
        }
    }
}
