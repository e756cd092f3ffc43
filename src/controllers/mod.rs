pub mod booking;
pub mod buses;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(booking::routes())
        .merge(buses::routes())
}

pub fn page_routes() -> Router<Arc<crate::AppState>> {
    booking::page_routes()
}
