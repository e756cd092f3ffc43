use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::page::form::BookingRejection;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Rejected(#[from] BookingRejection),
    #[error("Seat {0} is not available")]
    SeatUnavailable(String),
    #[error("Trip {trip_id} runs from {from} to {to}")]
    RouteMismatch { trip_id: i64, from: String, to: String },
    #[error(transparent)]
    InvalidForm(#[from] FormRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::SeatUnavailable(_) => StatusCode::CONFLICT,
            AppError::RouteMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidForm(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
