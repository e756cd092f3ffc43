use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::dom::render::to_html;
use crate::error::AppError;
use crate::page::form::BookingSubmission;
use crate::page::markup::{booking_page, Notice};
use crate::page::BookingPage;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/bookings", post(create_booking))
}

pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new().route("/booking/{trip_id}", get(show_booking_page))
}

/* ---------- PAGE ---------- */

// GET /booking/{trip_id}
async fn show_booking_page(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let trip = state
        .trips
        .get(trip_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Trip {trip_id}")))?;

    let notices = [Notice::flash(&format!(
        "{} seats left on {} to {}",
        trip.available_count(),
        trip.from_city,
        trip.to_city
    ))];
    let doc = booking_page(&trip, &state.config.page.currency_symbol, &notices);
    // Страница уходит уже после загрузки: города заполнены, дата ограничена
    let page = BookingPage::load(doc, &state.config.page, Utc::now().date_naive());
    Ok(Html(format!("<!DOCTYPE html><html>{}</html>", to_html(page.document()))))
}

/* ---------- BOOKINGS ---------- */

// POST /api/bookings, тело - обычная HTML-форма
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(rename = "tripId")]
    pub trip_id: i64,
    #[serde(rename = "fromCity", default)]
    pub from_city: String,
    #[serde(rename = "toCity", default)]
    pub to_city: String,
    #[serde(rename = "journeyDate", default)]
    pub journey_date: Option<String>,
    #[serde(rename = "selectedSeats", default)]
    pub selected_seats: String,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form?;
    let submission = BookingSubmission::new(
        &form.selected_seats,
        &form.from_city,
        &form.to_city,
        form.journey_date.as_deref(),
    );
    let confirmation = state.trips.book(form.trip_id, &submission).await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}
