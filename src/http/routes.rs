//! HTTP routes
//!
//! `GET /` welcome and `POST /api/predict` scoring.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::models::{NutrientRecord, NutritionReport};
use crate::nutrition;

use super::cors::setup_cors;
use super::envelope::ApiResponse;
use super::error::{handle_panic, ApiError, ApiResult};

pub const WELCOME_MESSAGE: &str = "Welcome to the Food Nutrition Prediction API";
pub const PREDICT_SUCCESS_MESSAGE: &str = "Perhitungan nutrisi berhasil";

/// Build the application router with all middleware applied
pub fn router(config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/", get(index))
        .route("/api/predict", post(predict))
        .fallback(not_found);

    with_middleware(routes, config)
}

/// Panic catching innermost, then request tracing, then CORS so that every
/// response (errors included) carries CORS headers.
fn with_middleware(routes: Router, config: &ServerConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&config.cors_allowed_origins))
}

async fn index() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(WELCOME_MESSAGE))
}

/// Validate the body and score it. The body is read raw so that JSON
/// problems and field problems map onto our own error tiers instead of
/// axum's extractor rejections.
async fn predict(
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<ApiResponse<NutritionReport>>> {
    require_json_content_type(&headers)?;
    let value: serde_json::Value = serde_json::from_slice(&body)?;
    let record = NutrientRecord::from_json(&value)?;
    let report = nutrition::score(&record);

    tracing::info!(
        food = %record.food_name,
        score = report.health_assessment.health_score,
        status = report.health_assessment.detailed_status.as_str(),
        "Scored food item"
    );

    Ok(Json(ApiResponse::success(PREDICT_SUCCESS_MESSAGE, report)))
}

/// Accept `application/json` and `application/*+json`, parameters ignored
fn require_json_content_type(headers: &HeaderMap) -> ApiResult<()> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMediaType(content_type.to_string()))
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
