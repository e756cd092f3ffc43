//! Server-side markup of the booking page for one trip.

use crate::dom::{Document, ElementId};
use crate::format::format_fare;
use crate::models::Trip;

use super::cities::{FROM_CITY_ID, TO_CITY_ID};
use super::form::BOOKING_FORM_CLASS;
use super::seats::{
    BASE_FARE_ID, CONTINUE_BUTTON_ID, SEAT_CLASS, SEAT_COUNT_ID, SEAT_MAP_CLASS, SELECTED_SEATS_ID,
    TOTAL_FARE_ID,
};
use super::widgets::{ALERT_CLASS, JOURNEY_DATE_ID, PERSISTENT_ALERT_CLASS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub persistent: bool,
}

impl Notice {
    pub fn flash(text: &str) -> Self {
        Self { text: text.to_string(), persistent: false }
    }

    pub fn persistent(text: &str) -> Self {
        Self { text: text.to_string(), persistent: true }
    }
}

fn child(doc: &mut Document, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
    let el = doc.create_element(tag);
    for class in classes {
        doc.add_class(el, class);
    }
    doc.append_child(parent, el);
    el
}

fn labelled_select(doc: &mut Document, parent: ElementId, id: &str, label: &str) -> ElementId {
    let group = child(doc, parent, "div", &["mb-3"]);
    let lbl = child(doc, group, "label", &["form-label"]);
    doc.set_attr(lbl, "for", id);
    doc.set_text(lbl, label);
    let select = child(doc, group, "select", &["form-select"]);
    doc.set_id(select, id);
    doc.set_attr(select, "name", id);
    select
}

/// Builds the page the browser receives: notices, the booking form with empty
/// city dropdowns (filled on load), the date picker, the seat map and the fare
/// summary.
pub fn booking_page(trip: &Trip, currency: &str, notices: &[Notice]) -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    let container = child(&mut doc, body, "div", &["container"]);

    for notice in notices {
        let classes: &[&str] = if notice.persistent {
            &[ALERT_CLASS, "alert-info", PERSISTENT_ALERT_CLASS]
        } else {
            &[ALERT_CLASS, "alert-info"]
        };
        let alert = child(&mut doc, container, "div", classes);
        doc.set_attr(alert, "role", "alert");
        doc.set_text(alert, &notice.text);
    }

    let form = child(&mut doc, container, "form", &[BOOKING_FORM_CLASS]);
    doc.set_attr(form, "method", "post");
    doc.set_attr(form, "action", "/api/bookings");

    let trip_input = child(&mut doc, form, "input", &[]);
    doc.set_attr(trip_input, "type", "hidden");
    doc.set_attr(trip_input, "name", "tripId");
    doc.set_value(trip_input, &trip.id.to_string());

    labelled_select(&mut doc, form, FROM_CITY_ID, "From");
    labelled_select(&mut doc, form, TO_CITY_ID, "To");

    let date = child(&mut doc, form, "input", &["form-control"]);
    doc.set_id(date, JOURNEY_DATE_ID);
    doc.set_attr(date, "type", "date");
    doc.set_attr(date, "name", JOURNEY_DATE_ID);

    let seat_map = child(&mut doc, form, "div", &[SEAT_MAP_CLASS]);
    let mut current_row: Option<(u32, ElementId)> = None;
    for seat in &trip.seats {
        let row = match current_row {
            Some((n, row)) if n == seat.row => row,
            _ => {
                let row = child(&mut doc, seat_map, "div", &["seat-row"]);
                current_row = Some((seat.row, row));
                row
            }
        };
        let el = child(&mut doc, row, "div", &[SEAT_CLASS]);
        if let Some(class) = seat.status.css_class() {
            doc.add_class(el, class);
        }
        doc.set_attr(el, "data-seat", &seat.number);
        doc.set_text(el, &seat.number);
        if seat.status.is_interactive() {
            doc.set_attr(el, "data-bs-toggle", "tooltip");
            doc.set_attr(el, "title", &format!("Seat {}", seat.number));
        }
    }

    let base_fare = child(&mut doc, form, "input", &[]);
    doc.set_id(base_fare, BASE_FARE_ID);
    doc.set_attr(base_fare, "type", "hidden");
    doc.set_value(base_fare, &trip.base_fare.to_string());

    let selected = child(&mut doc, form, "input", &[]);
    doc.set_id(selected, SELECTED_SEATS_ID);
    doc.set_attr(selected, "type", "hidden");
    doc.set_attr(selected, "name", SELECTED_SEATS_ID);

    let summary = child(&mut doc, form, "div", &["fare-summary"]);
    let count = child(&mut doc, summary, "span", &[]);
    doc.set_id(count, SEAT_COUNT_ID);
    doc.set_text(count, "0");
    let total = child(&mut doc, summary, "span", &[]);
    doc.set_id(total, TOTAL_FARE_ID);
    doc.set_text(total, &format_fare(currency, 0.0));

    let button = child(&mut doc, form, "button", &["btn", "btn-primary"]);
    doc.set_id(button, CONTINUE_BUTTON_ID);
    doc.set_attr(button, "type", "submit");
    doc.set_disabled(button, true);
    doc.set_text(button, "Continue");

    doc
}
