use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use farmwise_core::{AdvisoryError, AdvisoryResult, ValueObject};

/// Share of the predicted shelf life spent in excellent condition.
pub const EXCELLENT_FRACTION: f64 = 0.3;
pub const GOOD_FRACTION: f64 = 0.6;
pub const FAIR_FRACTION: f64 = 0.85;
/// Recommended latest sale, as a share of the predicted shelf life.
pub const SELL_BY_FRACTION: f64 = 0.7;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// One point on the quality curve of a stored lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCheckpoint {
    /// Days since harvest.
    pub day: u32,
    pub date: DateTime<Utc>,
    pub quality_percent: u8,
    pub status: QualityStatus,
    pub description: String,
}

impl ValueObject for QualityCheckpoint {}

const CHECKPOINTS: [(f64, u8, QualityStatus, &str); 5] = [
    (0.0, 100, QualityStatus::Excellent, "Freshly harvested - peak quality"),
    (
        EXCELLENT_FRACTION,
        90,
        QualityStatus::Excellent,
        "Still in excellent condition",
    ),
    (
        GOOD_FRACTION,
        70,
        QualityStatus::Good,
        "Good quality - recommended sell-by period",
    ),
    (
        FAIR_FRACTION,
        50,
        QualityStatus::Fair,
        "Fair quality - sell soon or process",
    ),
    (
        1.0,
        30,
        QualityStatus::Poor,
        "Approaching spoilage - not recommended for sale",
    ),
];

/// Whole days covered by `fraction` of `days`, truncated toward zero.
pub fn fraction_of(days: u32, fraction: f64) -> u32 {
    (f64::from(days) * fraction) as u32
}

/// `days` whole days after `start`.
pub fn days_after(start: DateTime<Utc>, days: u32) -> AdvisoryResult<DateTime<Utc>> {
    start
        .checked_add_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| AdvisoryError::invalid_input("date out of range"))
}

/// Five fixed checkpoints from harvest to predicted spoilage.
pub fn quality_timeline(
    harvest_date: DateTime<Utc>,
    predicted_days: u32,
) -> AdvisoryResult<Vec<QualityCheckpoint>> {
    CHECKPOINTS
        .iter()
        .map(|&(fraction, quality_percent, status, description)| {
            let day = fraction_of(predicted_days, fraction);
            Ok(QualityCheckpoint {
                day,
                date: days_after(harvest_date, day)?,
                quality_percent,
                status,
                description: description.to_string(),
            })
        })
        .collect()
}
