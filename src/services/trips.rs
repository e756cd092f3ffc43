use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Trip;
use crate::page::form::BookingSubmission;

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub trip_id: i64,
    pub seats: Vec<String>,
    pub seat_count: usize,
    pub total_fare: f64,
}

// In-memory хранилище рейсов, без персистентности
#[derive(Debug, Default)]
pub struct TripStore {
    trips: RwLock<HashMap<i64, Trip>>,
}

impl TripStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, trip: Trip) {
        self.trips.write().await.insert(trip.id, trip);
    }

    pub async fn get(&self, trip_id: i64) -> Option<Trip> {
        self.trips.read().await.get(&trip_id).cloned()
    }

    /// Validates the submission and books its seats in one step under the
    /// write lock, so two submits can not take the same seat.
    pub async fn book(&self, trip_id: i64, submission: &BookingSubmission) -> Result<BookingConfirmation, AppError> {
        submission.check()?;

        let mut trips = self.trips.write().await;
        let trip = trips
            .get_mut(&trip_id)
            .ok_or_else(|| AppError::NotFound(format!("Trip {trip_id}")))?;

        if submission.from_city != trip.from_city.to_lowercase()
            || submission.to_city != trip.to_city.to_lowercase()
        {
            warn!(trip_id, from = %submission.from_city, to = %submission.to_city, "route mismatch");
            return Err(AppError::RouteMismatch {
                trip_id,
                from: trip.from_city.clone(),
                to: trip.to_city.clone(),
            });
        }

        if let Err(seat) = trip.book(&submission.selected_seats) {
            warn!(trip_id, seat = %seat, "seat not available");
            return Err(AppError::SeatUnavailable(seat));
        }

        let confirmation = BookingConfirmation {
            booking_id: Uuid::new_v4(),
            trip_id,
            seats: submission.selected_seats.clone(),
            seat_count: submission.selected_seats.len(),
            total_fare: trip.base_fare * submission.selected_seats.len() as f64,
        };
        info!(
            trip_id,
            booking_id = %confirmation.booking_id,
            seats = confirmation.seat_count,
            "booking created"
        );
        Ok(confirmation)
    }
}
