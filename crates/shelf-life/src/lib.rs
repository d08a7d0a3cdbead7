//! `farmwise-shelf-life`: shelf-life predictor for stored produce.
//!
//! Applies storage, packaging, temperature and humidity factors to a
//! commodity's baseline shelf life, then projects quality milestones, a
//! checkpoint timeline and storage advice.

pub mod advice;
pub mod prediction;
pub mod timeline;

pub use advice::{
    DEFAULT_PACKAGING, DEFAULT_STORAGE_METHOD, OptimalConditions, StorageConditions,
    StorageRecommendation, storage_recommendations,
};
pub use prediction::{AppliedModifiers, ShelfLifeInput, ShelfLifeResult, predict_shelf_life};
pub use timeline::{QualityCheckpoint, QualityStatus, quality_timeline};
