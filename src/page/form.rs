//! Booking form submit guard.
//!
//! The same [`BookingSubmission`] check runs in the page before the form is
//! sent and on the server when the form arrives.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use validator::{Validate, ValidationError};

use crate::dom::{Document, ElementId};

use super::cities::{FROM_CITY_ID, TO_CITY_ID};
use super::seats::SELECTED_SEATS_ID;
use super::widgets::JOURNEY_DATE_ID;

pub const BOOKING_FORM_CLASS: &str = "booking-form";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingRejection {
    #[error("Please select at least one seat.")]
    NoSeatsSelected,
    #[error("Departure and destination cities cannot be the same.")]
    SameCity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_distinct_cities"))]
pub struct BookingSubmission {
    #[validate(length(min = 1))]
    pub selected_seats: Vec<String>,
    pub from_city: String,
    pub to_city: String,
    pub journey_date: Option<String>,
}

fn validate_distinct_cities(submission: &BookingSubmission) -> Result<(), ValidationError> {
    if submission.from_city == submission.to_city {
        return Err(ValidationError::new("same_city"));
    }
    Ok(())
}

/// Splits the hidden field value, dropping empty entries and repeats.
pub fn parse_selected_seats(raw: &str) -> Vec<String> {
    let mut seats: Vec<String> = Vec::new();
    for seat in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !seats.iter().any(|s| s == seat) {
            seats.push(seat.to_string());
        }
    }
    seats
}

impl BookingSubmission {
    pub fn new(selected_seats: &str, from_city: &str, to_city: &str, journey_date: Option<&str>) -> Self {
        Self {
            selected_seats: parse_selected_seats(selected_seats),
            from_city: from_city.to_string(),
            to_city: to_city.to_string(),
            journey_date: journey_date.filter(|d| !d.is_empty()).map(str::to_string),
        }
    }

    /// Seats are checked before the city pair.
    pub fn check(&self) -> Result<(), BookingRejection> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(_) if self.selected_seats.is_empty() => Err(BookingRejection::NoSeatsSelected),
            Err(_) => Err(BookingRejection::SameCity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Allowed(BookingSubmission),
    Blocked(BookingRejection),
}

impl SubmitOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SubmitOutcome::Allowed(_))
    }
}

#[derive(Debug, Clone)]
pub struct SubmitGuard {
    form: ElementId,
    from_city: Option<ElementId>,
    to_city: Option<ElementId>,
    selected_seats: Option<ElementId>,
    journey_date: Option<ElementId>,
}

impl SubmitGuard {
    pub fn new(
        form: ElementId,
        from_city: Option<ElementId>,
        to_city: Option<ElementId>,
        selected_seats: Option<ElementId>,
        journey_date: Option<ElementId>,
    ) -> Self {
        Self {
            form,
            from_city,
            to_city,
            selected_seats,
            journey_date,
        }
    }

    pub fn discover(doc: &Document) -> Option<Self> {
        let form = doc.first_by_class(BOOKING_FORM_CLASS)?;
        Some(Self::new(
            form,
            doc.get_element_by_id(FROM_CITY_ID),
            doc.get_element_by_id(TO_CITY_ID),
            doc.get_element_by_id(SELECTED_SEATS_ID),
            doc.get_element_by_id(JOURNEY_DATE_ID),
        ))
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    /// Reads the current form state. Absent fields read as empty.
    pub fn read(&self, doc: &Document) -> BookingSubmission {
        let select = |id: Option<ElementId>| id.map(|id| doc.select_value(id)).unwrap_or("");
        let input = |id: Option<ElementId>| id.map(|id| doc.value(id)).unwrap_or("");
        BookingSubmission::new(
            input(self.selected_seats),
            select(self.from_city),
            select(self.to_city),
            Some(input(self.journey_date)),
        )
    }

    pub fn on_submit(&self, doc: &Document) -> SubmitOutcome {
        let submission = self.read(doc);
        match submission.check() {
            Ok(()) => {
                info!(
                    seats = submission.selected_seats.len(),
                    from = %submission.from_city,
                    to = %submission.to_city,
                    "booking form submitted"
                );
                SubmitOutcome::Allowed(submission)
            }
            Err(rejection) => SubmitOutcome::Blocked(rejection),
        }
    }
}
