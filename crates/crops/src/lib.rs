//! `farmwise-crops`: crop recommender.
//!
//! Scores every crop in the catalog against a farmer's land, climate and
//! preferences, ranks them, and summarises market potential, risks and
//! success factors.

pub mod analysis;
pub mod conditions;
pub mod recommend;
pub mod suitability;

pub use analysis::{risk_factors, success_factors};
pub use conditions::{CropConditions, ExperienceLevel};
pub use recommend::{CropRecommendationResult, MarketPotential, rank_crops, recommend_crops};
pub use suitability::{CropSuitability, ScoreAccumulator, score_crop};
