//! Car record handlers.
//!
//! `GET` reads (one car by `id`, or every car), `POST` writes, and every
//! other method is rejected. The path is not inspected. Handlers reach storage only through the
//! repository held in [`AppState`].

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use carstore_core::car::Car;

use crate::{handlers::AppError, state::AppState};

/// Resolve the car to look up from the query pairs.
///
/// Repeated `id` values are joined with commas, the way API Gateway presents
/// them. Absent or empty means "all cars".
fn requested_id(params: &[(String, String)]) -> Option<String> {
    let id = params
        .iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(",");

    (!id.is_empty()).then_some(id)
}

// ============================================================================
// Read
// ============================================================================

/// Get one car or list every car (GET).
#[axum::debug_handler]
pub async fn get_cars(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let repo = state.car_repo()?;

    match requested_id(&params) {
        None => {
            let cars = repo.list_cars().await?;
            tracing::info!(count = cars.len(), "Listed cars");
            Ok(Json(cars).into_response())
        }
        Some(id) => {
            let car = repo
                .get_car(&id)
                .await?
                .ok_or_else(|| AppError::NotFound(id))?;
            tracing::info!(car_id = %car.id, "Fetched car");
            Ok(Json(car).into_response())
        }
    }
}

// ============================================================================
// Write
// ============================================================================

/// Create or replace a car (POST).
///
/// The body is parsed before storage is consulted, so a malformed body is a
/// 400 even when storage is not configured.
#[axum::debug_handler]
pub async fn put_car(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "Received put car request");

    let car = Car::from_json(&body)?;
    let repo = state.car_repo()?;

    repo.put_car(&car).await?;

    tracing::info!(car_id = %car.id, make = %car.make, model = %car.model, "Stored car");

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("item {} created", car.id),
    ))
}

// ============================================================================
// Everything else
// ============================================================================

/// Reject unsupported methods without looking at the request.
pub async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, &'static str) {
    tracing::warn!(method = %method, path = %uri.path(), "Method not allowed");
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}
