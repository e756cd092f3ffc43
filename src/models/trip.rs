use serde::Serialize;

use super::{Seat, SeatStatus};

/// Seats per row in the generated layout: two on each side of the aisle.
const ROW_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: i64,
    pub bus_id: i64,
    pub from_city: String,
    pub to_city: String,
    pub base_fare: f64,
    pub seats: Vec<Seat>,
}

impl Trip {
    /// Driver seat `D` followed by `rows` rows of `1A..1D`, `2A..2D`, ...
    pub fn with_layout(id: i64, bus_id: i64, from_city: &str, to_city: &str, base_fare: f64, rows: u32) -> Self {
        let mut seats = vec![Seat::new("D", 0, SeatStatus::Driver)];
        for row in 1..=rows {
            for letter in ROW_LETTERS {
                seats.push(Seat::new(format!("{row}{letter}"), row, SeatStatus::Available));
            }
        }
        Self {
            id,
            bus_id,
            from_city: from_city.to_string(),
            to_city: to_city.to_string(),
            base_fare,
            seats,
        }
    }

    pub fn seat(&self, number: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.number == number)
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| s.status.is_interactive()).count()
    }

    /// Marks every listed seat booked, all or nothing. On failure returns the
    /// first seat that is unknown or not available.
    pub fn book(&mut self, numbers: &[String]) -> Result<(), String> {
        if let Some(bad) = numbers
            .iter()
            .find(|n| !self.seat(n).is_some_and(|s| s.status.is_interactive()))
        {
            return Err(bad.clone());
        }
        for seat in self.seats.iter_mut() {
            if numbers.contains(&seat.number) {
                seat.status = SeatStatus::Booked;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_driver_and_rows() {
        let trip = Trip::with_layout(1, 1, "Mumbai", "Pune", 450.0, 2);
        let numbers: Vec<&str> = trip.seats.iter().map(|s| s.number.as_str()).collect();
        assert_eq!(numbers, vec!["D", "1A", "1B", "1C", "1D", "2A", "2B", "2C", "2D"]);
        assert_eq!(trip.available_count(), 8);
    }

    #[test]
    fn booking_is_all_or_nothing() {
        let mut trip = Trip::with_layout(1, 1, "Mumbai", "Pune", 450.0, 1);
        assert_eq!(trip.book(&["1A".into(), "D".into()]), Err("D".to_string()));
        assert_eq!(trip.seat("1A").map(|s| s.status), Some(SeatStatus::Available));

        assert_eq!(trip.book(&["1A".into(), "1B".into()]), Ok(()));
        assert_eq!(trip.book(&["1B".into()]), Err("1B".to_string()));
        assert_eq!(trip.available_count(), 2);
    }
}
