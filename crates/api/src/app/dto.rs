use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    pub harvest_date: DateTime<Utc>,
    pub predicted_days: u32,
}

#[derive(Debug, Serialize)]
pub struct CommodityListResponse {
    pub commodities: Vec<String>,
}
