pub mod bus;
pub mod city;
pub mod seat;
pub mod trip;

pub use bus::{Bus, BusStatus};
pub use city::{CityOption, DEFAULT_CITIES};
pub use seat::{Seat, SeatStatus};
pub use trip::Trip;
