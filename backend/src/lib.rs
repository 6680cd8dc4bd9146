pub mod config;
pub mod error;
pub mod predict;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use shared::{ApiError, PredictRequest, PredictResponse};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::PredictError;
use crate::predict::{TrajectoryConfig, predict_trajectory};

pub const PREDICT_PATH: &str = "/api/predict/";

#[derive(Clone)]
pub struct AppState {
    pub trajectory: TrajectoryConfig,
}

pub fn create_router(state: AppState) -> Router {
    // The map page is served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(PREDICT_PATH, post(predict_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn predict_handler(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ApiError>)> {
    tracing::info!(
        "prediction request lat={:.5} lng={:.5} direction={} time={:?}",
        req.latitude,
        req.longitude,
        req.direction.as_str(),
        req.time
    );

    let points = predict_trajectory(&req, &state.trajectory).map_err(api_error)?;
    tracing::debug!("returning {} points", points.len());

    Ok(Json(PredictResponse::from(points)))
}

fn api_error(err: PredictError) -> (StatusCode, Json<ApiError>) {
    let status = match err {
        PredictError::InvalidTime { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PredictError::NoPoints | PredictError::InvalidStep(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    tracing::warn!("prediction rejected: {err}");

    (
        status,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}
