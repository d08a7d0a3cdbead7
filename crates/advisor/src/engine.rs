use std::sync::Arc;

use chrono::{DateTime, Utc};

use farmwise_catalog::ReferenceCatalog;
use farmwise_core::AdvisoryResult;
use farmwise_costing::{CostBreakdown, CostInput, CostItems, CostResult};
use farmwise_crops::{CropConditions, CropRecommendationResult};
use farmwise_shelf_life::{
    QualityCheckpoint, ShelfLifeInput, ShelfLifeResult, StorageConditions, StorageRecommendation,
};

use crate::clock::{Clock, SystemClock};

/// Shareable entry point for all advisory calculations.
///
/// Cheap to clone; clones share one catalog and one clock. Every call is
/// synchronous and free of side effects apart from tracing.
#[derive(Debug, Clone)]
pub struct AdvisoryEngine {
    catalog: Arc<ReferenceCatalog>,
    clock: Arc<dyn Clock>,
}

impl AdvisoryEngine {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self {
            catalog,
            clock: Arc::new(SystemClock),
        }
    }

    /// Engine over the built-in catalog.
    pub fn standard() -> Self {
        Self::new(Arc::new(ReferenceCatalog::standard().clone()))
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn compute_cost(&self, input: &CostInput) -> AdvisoryResult<CostResult> {
        let result = farmwise_costing::compute_cost(input).inspect_err(|err| {
            tracing::debug!(error = %err, "cost calculation rejected");
        })?;
        tracing::debug!(
            total_cost = result.total_cost,
            cost_per_kg = result.cost_per_kg,
            roi_percent = result.profitability.roi_percent,
            rating = result.profitability.rating.as_str(),
            "cost calculated"
        );
        Ok(result)
    }

    pub fn cost_breakdown(&self, items: &CostItems) -> CostBreakdown {
        farmwise_costing::cost_breakdown(items)
    }

    /// Forecast a stored lot; a missing harvest date means "now" on the engine's clock.
    pub fn predict_shelf_life(&self, input: &ShelfLifeInput) -> AdvisoryResult<ShelfLifeResult> {
        let result = farmwise_shelf_life::predict_shelf_life(&self.catalog, input, self.now())
            .inspect_err(|err| {
                tracing::debug!(
                    error = %err,
                    produce_type = %input.conditions.produce_type,
                    "shelf-life prediction rejected"
                );
            })?;
        tracing::debug!(
            produce_type = %result.produce_type,
            category = result.category.as_str(),
            predicted_days = result.predicted_shelf_life_days,
            degradation_rate = result.quality_degradation_rate,
            "shelf life predicted"
        );
        Ok(result)
    }

    pub fn storage_recommendations(
        &self,
        conditions: &StorageConditions,
    ) -> AdvisoryResult<StorageRecommendation> {
        farmwise_shelf_life::storage_recommendations(&self.catalog, conditions)
    }

    pub fn quality_timeline(
        &self,
        harvest_date: DateTime<Utc>,
        predicted_days: u32,
    ) -> AdvisoryResult<Vec<QualityCheckpoint>> {
        farmwise_shelf_life::quality_timeline(harvest_date, predicted_days)
    }

    pub fn recommend_crops(
        &self,
        conditions: &CropConditions,
    ) -> AdvisoryResult<CropRecommendationResult> {
        let result = farmwise_crops::recommend_crops(&self.catalog, conditions).inspect_err(|err| {
            tracing::debug!(error = %err, "crop recommendation rejected");
        })?;
        tracing::debug!(
            location = %conditions.location,
            top_crop = result.recommended_crops.first().map(|c| c.crop_name.as_str()),
            confidence = result.confidence_score,
            "crops recommended"
        );
        Ok(result)
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::standard()
    }
}
