pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod format;
pub mod models;
pub mod observer;
pub mod page;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use models::{Bus, BusStatus, Trip};
use services::{BusRegistry, TripStore};

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    pub trips: TripStore,
    pub buses: BusRegistry,
}

impl AppState {
    /// Empty stores with the status logger already subscribed.
    pub async fn new(config: config::Config) -> Arc<Self> {
        let state = Self {
            config,
            trips: TripStore::new(),
            buses: BusRegistry::new(),
        };
        state.buses.subscribe(observer::log_bus_status_change).await;
        Arc::new(state)
    }

    // Демо-данные: рейс 1 и автобус 1, как при прогреве кеша
    pub async fn seed_demo_data(&self) {
        let booking = &self.config.booking;
        self.buses
            .save(Bus {
                id: 1,
                registration_number: "MH-12-AB-1234".to_string(),
                capacity: booking.seat_rows * 4,
                status: BusStatus::Active,
            })
            .await;
        self.trips
            .insert(Trip::with_layout(
                1,
                1,
                &booking.demo_from_city,
                &booking.demo_to_city,
                booking.base_fare,
                booking.seat_rows,
            ))
            .await;
        tracing::info!("Demo trip and bus seeded");
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Bus Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::page_routes())
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
