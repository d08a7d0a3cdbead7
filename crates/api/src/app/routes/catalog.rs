use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};

use farmwise_advisor::AdvisoryEngine;

use crate::app::dto;

pub fn router() -> Router {
    Router::new().route("/commodities", get(list_commodities))
}

pub async fn list_commodities(Extension(engine): Extension<AdvisoryEngine>) -> impl IntoResponse {
    Json(dto::CommodityListResponse {
        commodities: engine
            .catalog()
            .commodity_names()
            .map(str::to_string)
            .collect(),
    })
}
