//! `farmwise-advisor`: the advisory engine facade.
//!
//! Bundles a reference catalog and a clock behind one cloneable handle so
//! hosts can serve cost, shelf-life and crop requests concurrently without
//! threading tables through every call.

pub mod clock;
pub mod engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::AdvisoryEngine;
