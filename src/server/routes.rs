//! HTTP routes of the reference dish service.
//!
//! - `GET /health`
//! - `GET /dish`, `POST /dish`
//! - `GET /dish/{id}`, `PUT /dish/{id}`, `DELETE /dish/{id}`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::repository::MenuRepository;
use crate::models::{Dish, DishId, NewDish};

/// Error body returned by every failing route
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

fn error_response(status: StatusCode, error: &'static str, message: String) -> Response {
    (status, Json(ErrorResponse { error, message })).into_response()
}

fn not_found(id: DishId) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("Dish {} not found", id),
    )
}

/// Request body for create and update.
///
/// Every field is optional here so a missing one can be reported as
/// `missing_data` instead of a generic decode error. Any `id` is ignored.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DishPayload {
    name: Option<String>,
    calories: Option<f64>,
    price: Option<f64>,
}

impl DishPayload {
    fn validate(self) -> Result<NewDish, Response> {
        match (self.name, self.calories, self.price) {
            (Some(name), Some(calories), Some(price)) if !name.is_empty() => {
                Ok(NewDish::new(name, calories, price))
            }
            _ => Err(error_response(
                StatusCode::BAD_REQUEST,
                "missing_data",
                "name, calories and price are required".to_string(),
            )),
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn list_dishes(State(repo): State<Arc<MenuRepository>>) -> Json<Vec<Dish>> {
    Json(repo.list().await)
}

async fn get_dish(
    State(repo): State<Arc<MenuRepository>>,
    Path(id): Path<DishId>,
) -> Result<Json<Dish>, Response> {
    repo.get(id).await.map(Json).ok_or_else(|| not_found(id))
}

async fn create_dish(
    State(repo): State<Arc<MenuRepository>>,
    Json(payload): Json<DishPayload>,
) -> Result<(StatusCode, Json<Dish>), Response> {
    let dish = payload.validate()?;
    let created = repo.create(dish).await;
    tracing::info!("Created dish {} ({})", created.id, created.name);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_dish(
    State(repo): State<Arc<MenuRepository>>,
    Path(id): Path<DishId>,
    Json(payload): Json<DishPayload>,
) -> Result<Json<Dish>, Response> {
    let dish = payload.validate()?;
    let updated = repo.update(id, dish).await.ok_or_else(|| not_found(id))?;
    tracing::info!("Updated dish {}", id);
    Ok(Json(updated))
}

async fn delete_dish(
    State(repo): State<Arc<MenuRepository>>,
    Path(id): Path<DishId>,
) -> Result<StatusCode, Response> {
    repo.delete(id).await.ok_or_else(|| not_found(id))?;
    tracing::info!("Deleted dish {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Builds the service router over `repo`.
pub fn router(repo: Arc<MenuRepository>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dish", get(list_dishes).post(create_dish))
        .route(
            "/dish/{id}",
            get(get_dish).put(update_dish).delete(delete_dish),
        )
        .with_state(repo)
}
