pub mod buses;
pub mod trips;

pub use buses::BusRegistry;
pub use trips::{BookingConfirmation, TripStore};
