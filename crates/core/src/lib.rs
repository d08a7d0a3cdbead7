//! `farmwise-core`: shared building blocks for the advisory calculators.
//!
//! This crate contains **pure** primitives (no I/O, no catalogs): the error
//! model, the value object marker and the numeric policy every calculator
//! applies to its inputs and outputs.

pub mod error;
pub mod numeric;
pub mod value_object;

pub use error::{AdvisoryError, AdvisoryResult};
pub use value_object::ValueObject;
