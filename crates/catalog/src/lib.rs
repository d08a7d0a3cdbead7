//! `farmwise-catalog`: the reference catalog.
//!
//! Commodity shelf-life profiles, storage and packaging multipliers, and crop
//! suitability profiles. Tables are immutable once built; the standard tables
//! are built once per process and shared by reference.

pub mod catalog;
pub mod error;
pub mod profile;
mod standard;

pub use catalog::{CatalogBuilder, CatalogDocument, ReferenceCatalog, normalize_name};
pub use error::CatalogError;
pub use profile::{
    Bounds, BudgetTier, CommodityCategory, CommodityProfile, CropProfile, DemandTier,
    DifficultyTier, YieldRange,
};
