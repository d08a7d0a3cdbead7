use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;

use farmwise_advisor::AdvisoryEngine;
use farmwise_core::AdvisoryResult;
use farmwise_costing::{CostInput, CostItems};
use farmwise_crops::CropConditions;
use farmwise_shelf_life::{ShelfLifeInput, StorageConditions};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/cost", post(compute_cost))
        .route("/cost/breakdown", post(cost_breakdown))
        .route("/shelf-life", post(predict_shelf_life))
        .route("/shelf-life/recommendations", post(storage_recommendations))
        .route("/shelf-life/timeline", post(quality_timeline))
        .route("/crops", post(recommend_crops))
}

fn respond<T: Serialize>(result: AdvisoryResult<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::advisory_error_to_response(e),
    }
}

pub async fn compute_cost(
    Extension(engine): Extension<AdvisoryEngine>,
    Json(body): Json<CostInput>,
) -> Response {
    respond(engine.compute_cost(&body))
}

pub async fn cost_breakdown(
    Extension(engine): Extension<AdvisoryEngine>,
    Json(body): Json<CostItems>,
) -> Response {
    respond(body.validate().map(|()| engine.cost_breakdown(&body)))
}

pub async fn predict_shelf_life(
    Extension(engine): Extension<AdvisoryEngine>,
    Json(body): Json<ShelfLifeInput>,
) -> Response {
    respond(engine.predict_shelf_life(&body))
}

pub async fn storage_recommendations(
    Extension(engine): Extension<AdvisoryEngine>,
    Json(body): Json<StorageConditions>,
) -> Response {
    respond(engine.storage_recommendations(&body))
}

pub async fn quality_timeline(
    Extension(engine): Extension<AdvisoryEngine>,
    Json(body): Json<dto::TimelineRequest>,
) -> Response {
    respond(engine.quality_timeline(body.harvest_date, body.predicted_days))
}

pub async fn recommend_crops(
    Extension(engine): Extension<AdvisoryEngine>,
    Json(body): Json<CropConditions>,
) -> Response {
    respond(engine.recommend_crops(&body))
}
