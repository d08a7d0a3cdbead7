use serde::{Deserialize, Serialize};

use farmwise_catalog::{CommodityCategory, ReferenceCatalog, normalize_name};
use farmwise_core::numeric::{ensure_finite, ensure_within};
use farmwise_core::{AdvisoryResult, ValueObject};

/// Storage method assumed when none is given.
pub const DEFAULT_STORAGE_METHOD: &str = "room_temp";
/// Packaging assumed when none is given.
pub const DEFAULT_PACKAGING: &str = "open";

/// Temperature deviation (°C) tolerated before advising an adjustment.
const TEMPERATURE_TOLERANCE: f64 = 5.0;
/// Humidity deviation (percentage points) tolerated before advising an adjustment.
const HUMIDITY_TOLERANCE: f64 = 10.0;

/// How a lot is (or will be) stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConditions {
    pub produce_type: String,
    #[serde(default)]
    pub storage_method: Option<String>,
    #[serde(default)]
    pub packaging_type: Option<String>,
    #[serde(default)]
    pub storage_temperature_celsius: Option<f64>,
    #[serde(default)]
    pub storage_humidity_percent: Option<f64>,
}

impl StorageConditions {
    pub fn new(produce_type: impl Into<String>) -> Self {
        Self {
            produce_type: produce_type.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.storage_method = Some(method.into());
        self
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging_type = Some(packaging.into());
        self
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.storage_temperature_celsius = Some(celsius);
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.storage_humidity_percent = Some(percent);
        self
    }

    /// Normalised storage method, `room_temp` when omitted.
    pub fn method(&self) -> String {
        self.storage_method
            .as_deref()
            .map(normalize_name)
            .unwrap_or_else(|| DEFAULT_STORAGE_METHOD.to_string())
    }

    /// Normalised packaging, `open` when omitted.
    pub fn packaging(&self) -> String {
        self.packaging_type
            .as_deref()
            .map(normalize_name)
            .unwrap_or_else(|| DEFAULT_PACKAGING.to_string())
    }

    pub fn validate(&self) -> AdvisoryResult<()> {
        if let Some(t) = self.storage_temperature_celsius {
            ensure_finite("storage_temperature_celsius", t)?;
        }
        if let Some(h) = self.storage_humidity_percent {
            ensure_within("storage_humidity_percent", h, 0.0, 100.0)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalConditions {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub storage_method: String,
    pub packaging: String,
}

/// Advice for improving the storage of one commodity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageRecommendation {
    pub optimal_conditions: OptimalConditions,
    pub recommendations: Vec<String>,
    pub category: CommodityCategory,
    pub baseline_shelf_life_days: u32,
}

impl ValueObject for StorageRecommendation {}

/// Compare the given conditions with the commodity's optimum.
pub fn storage_recommendations(
    catalog: &ReferenceCatalog,
    conditions: &StorageConditions,
) -> AdvisoryResult<StorageRecommendation> {
    conditions.validate()?;
    let profile = catalog.commodity(&conditions.produce_type)?;

    let optimal_temp = profile.optimal_temp;
    let optimal_humidity = profile.optimal_humidity;
    let mut recommendations = Vec::new();

    match conditions.storage_temperature_celsius {
        Some(current) if (current - optimal_temp).abs() > TEMPERATURE_TOLERANCE => {
            recommendations.push(format!(
                "Adjust temperature to {optimal_temp}°C (currently {current}°C) for optimal preservation."
            ));
        }
        Some(_) => {}
        None => recommendations.push(format!(
            "Maintain storage temperature at {optimal_temp}°C for best results."
        )),
    }

    match conditions.storage_humidity_percent {
        Some(current) if (current - optimal_humidity).abs() > HUMIDITY_TOLERANCE => {
            recommendations.push(format!(
                "Adjust humidity to {optimal_humidity}% (currently {current}%) to prevent spoilage."
            ));
        }
        Some(_) => {}
        None => recommendations.push(format!(
            "Maintain storage humidity at {optimal_humidity}% for optimal freshness."
        )),
    }

    let fresh = profile.category.is_fresh_produce();
    let method = conditions.method();
    if fresh && matches!(method.as_str(), "room_temp" | "outdoor") {
        recommendations.push(
            "Consider using cold storage or refrigeration to significantly extend shelf life."
                .to_string(),
        );
    }

    if conditions.packaging() == "open" {
        recommendations.push(
            "Use sealed or vacuum packaging to reduce moisture loss and contamination.".to_string(),
        );
    }

    let (storage_method, packaging) = if fresh {
        ("cold_storage", "sealed")
    } else {
        ("warehouse", "bags")
    };

    Ok(StorageRecommendation {
        optimal_conditions: OptimalConditions {
            temperature_celsius: optimal_temp,
            humidity_percent: optimal_humidity,
            storage_method: storage_method.to_string(),
            packaging: packaging.to_string(),
        },
        recommendations,
        category: profile.category,
        baseline_shelf_life_days: profile.base_days,
    })
}
