//! The reference catalog: read-only domain tables consulted by every calculator.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use farmwise_core::{AdvisoryError, AdvisoryResult};

use crate::error::CatalogError;
use crate::profile::{CommodityProfile, CropProfile};
use crate::standard;

static STANDARD: LazyLock<ReferenceCatalog> = LazyLock::new(standard::catalog);

/// Trim and lowercase a table key or a caller-supplied name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Immutable reference tables.
///
/// Built once and shared read-only. Calculators take `&ReferenceCatalog` so
/// tests and alternate deployments can substitute their own tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCatalog {
    pub(crate) commodities: BTreeMap<String, CommodityProfile>,
    pub(crate) storage_methods: BTreeMap<String, f64>,
    pub(crate) packaging: BTreeMap<String, f64>,
    /// Enumeration order matters: ranking ties keep this order.
    pub(crate) crops: Vec<CropProfile>,
}

impl ReferenceCatalog {
    /// The built-in platform tables, built on first use.
    pub fn standard() -> &'static ReferenceCatalog {
        &STANDARD
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Load and validate a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        doc.into_builder().build()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            commodities = catalog.commodities.len(),
            crops = catalog.crops.len(),
            "loaded reference catalog"
        );
        Ok(catalog)
    }

    /// Export the tables in the same shape `from_json_str` reads.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            commodities: self.commodities.values().cloned().collect(),
            storage_methods: self.storage_methods.clone(),
            packaging: self.packaging.clone(),
            crops: self.crops.clone(),
        }
    }

    /// Look up a commodity by (case-insensitive) name.
    pub fn commodity(&self, name: &str) -> AdvisoryResult<&CommodityProfile> {
        let key = normalize_name(name);
        self.commodities
            .get(&key)
            .ok_or_else(|| AdvisoryError::unknown_commodity(key, self.commodity_names()))
    }

    /// Commodity names in sorted order.
    pub fn commodity_names(&self) -> impl Iterator<Item = &str> {
        self.commodities.keys().map(String::as_str)
    }

    pub fn storage_multiplier(&self, method: &str) -> Option<f64> {
        self.storage_methods.get(&normalize_name(method)).copied()
    }

    pub fn packaging_multiplier(&self, packaging: &str) -> Option<f64> {
        self.packaging.get(&normalize_name(packaging)).copied()
    }

    pub fn storage_method_names(&self) -> impl Iterator<Item = &str> {
        self.storage_methods.keys().map(String::as_str)
    }

    pub fn packaging_names(&self) -> impl Iterator<Item = &str> {
        self.packaging.keys().map(String::as_str)
    }

    /// Crop profiles in enumeration order.
    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    /// Check every table invariant.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, c) in &self.commodities {
            if key.is_empty() {
                return Err(CatalogError::invalid("commodity name must not be empty"));
            }
            if c.base_days == 0 {
                return Err(CatalogError::invalid(format!(
                    "commodity {key}: base_days must be at least 1"
                )));
            }
            if !c.optimal_temp.is_finite() {
                return Err(CatalogError::invalid(format!(
                    "commodity {key}: optimal_temp must be finite"
                )));
            }
            if !(0.0..=100.0).contains(&c.optimal_humidity) {
                return Err(CatalogError::invalid(format!(
                    "commodity {key}: optimal_humidity must be between 0 and 100"
                )));
            }
        }

        for (table, entries) in [
            ("storage method", &self.storage_methods),
            ("packaging", &self.packaging),
        ] {
            for (key, m) in entries {
                if !(m.is_finite() && *m > 0.0) {
                    return Err(CatalogError::invalid(format!(
                        "{table} {key}: multiplier must be a finite positive number"
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for crop in &self.crops {
            let name = crop.name.as_str();
            if name.is_empty() {
                return Err(CatalogError::invalid("crop name must not be empty"));
            }
            if !seen.insert(name) {
                return Err(CatalogError::invalid(format!("duplicate crop {name}")));
            }
            for (field, bounds) in [
                ("soil_ph_range", crop.soil_ph_range),
                ("rainfall_mm", crop.rainfall_mm),
                ("temperature_range", crop.temperature_range),
            ] {
                if !bounds.is_ordered() {
                    return Err(CatalogError::invalid(format!(
                        "crop {name}: {field} must satisfy min <= max"
                    )));
                }
            }
            if crop.yield_kg_per_hectare.min > crop.yield_kg_per_hectare.max {
                return Err(CatalogError::invalid(format!(
                    "crop {name}: yield_kg_per_hectare must satisfy min <= max"
                )));
            }
        }

        Ok(())
    }
}

/// Incremental catalog construction; `build` normalises names and validates.
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    commodities: Vec<CommodityProfile>,
    storage_methods: Vec<(String, f64)>,
    packaging: Vec<(String, f64)>,
    crops: Vec<CropProfile>,
}

impl CatalogBuilder {
    pub fn commodity(mut self, profile: CommodityProfile) -> Self {
        self.commodities.push(profile);
        self
    }

    pub fn storage_method(mut self, name: impl Into<String>, multiplier: f64) -> Self {
        self.storage_methods.push((name.into(), multiplier));
        self
    }

    pub fn packaging(mut self, name: impl Into<String>, multiplier: f64) -> Self {
        self.packaging.push((name.into(), multiplier));
        self
    }

    pub fn crop(mut self, profile: CropProfile) -> Self {
        self.crops.push(profile);
        self
    }

    pub fn build(self) -> Result<ReferenceCatalog, CatalogError> {
        let mut commodities = BTreeMap::new();
        for mut profile in self.commodities {
            profile.name = normalize_name(&profile.name);
            let key = profile.name.clone();
            if commodities.insert(key.clone(), profile).is_some() {
                return Err(CatalogError::invalid(format!("duplicate commodity {key}")));
            }
        }

        let storage_methods = self
            .storage_methods
            .into_iter()
            .map(|(k, v)| (normalize_name(&k), v))
            .collect();
        let packaging = self
            .packaging
            .into_iter()
            .map(|(k, v)| (normalize_name(&k), v))
            .collect();

        let crops = self
            .crops
            .into_iter()
            .map(|mut crop| {
                crop.name = normalize_name(&crop.name);
                crop.soil_types = crop.soil_types.iter().map(|s| normalize_name(s)).collect();
                crop.climate_zones = crop.climate_zones.iter().map(|s| normalize_name(s)).collect();
                crop.seasons = crop.seasons.iter().map(|s| normalize_name(s)).collect();
                crop
            })
            .collect();

        let catalog = ReferenceCatalog {
            commodities,
            storage_methods,
            packaging,
            crops,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Serialized form of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub commodities: Vec<CommodityProfile>,
    pub storage_methods: BTreeMap<String, f64>,
    pub packaging: BTreeMap<String, f64>,
    pub crops: Vec<CropProfile>,
}

impl CatalogDocument {
    pub fn into_builder(self) -> CatalogBuilder {
        let mut builder = ReferenceCatalog::builder();
        for c in self.commodities {
            builder = builder.commodity(c);
        }
        for (name, m) in self.storage_methods {
            builder = builder.storage_method(name, m);
        }
        for (name, m) in self.packaging {
            builder = builder.packaging(name, m);
        }
        for crop in self.crops {
            builder = builder.crop(crop);
        }
        builder
    }
}
