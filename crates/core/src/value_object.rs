//! Value object trait: equality by value, not identity.
//!
//! Every record the advisory engine produces is a value object. A cost
//! projection or a crop ranking has no identity of its own; the host assigns
//! one when (and if) it persists the record.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two shelf-life
/// forecasts computed from the same input and the same harvest date are equal,
/// which is what makes repeated calls observably idempotent.
///
/// The trait requires:
/// - **Clone**: results are handed to hosts that serialize or cache them
/// - **PartialEq**: results are compared by their attribute values
/// - **Debug**: results show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct CostShare {
///     amount: f64,
///     percentage: f64,
/// }
///
/// impl ValueObject for CostShare {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
