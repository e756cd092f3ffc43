use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::Bus;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/buses/{id}", get(get_bus))
        .route("/buses/save", post(save_bus))
}

// GET /api/buses/{id}
async fn get_bus(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Bus>, AppError> {
    state
        .buses
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Bus {id}")))
}

// POST /api/buses/save - подписчики получают смену статуса
async fn save_bus(
    State(state): State<Arc<AppState>>,
    Json(bus): Json<Bus>,
) -> Json<Bus> {
    Json(state.buses.save(bus).await)
}
