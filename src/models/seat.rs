use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
    /// The driver's position, rendered in the map but never selectable.
    Driver,
}

impl SeatStatus {
    pub fn is_interactive(self) -> bool {
        matches!(self, SeatStatus::Available)
    }

    /// CSS class the seat map uses for non-available seats.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SeatStatus::Available => None,
            SeatStatus::Booked => Some("booked"),
            SeatStatus::Driver => Some("driver"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub number: String,
    pub row: u32,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(number: impl Into<String>, row: u32, status: SeatStatus) -> Self {
        Self {
            number: number.into(),
            row,
            status,
        }
    }
}
