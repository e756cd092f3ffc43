//! Seat selection on the seat map.
//!
//! The component owns the [`SelectedSeatSet`]; the `selected` class on seat
//! elements, the hidden `selectedSeats` field, the count/total displays and the
//! continue button are all re-projected from that set after every click.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dom::{Document, ElementId};
use crate::format::format_fare;

pub const SEAT_MAP_CLASS: &str = "seat-map";
pub const SEAT_CLASS: &str = "seat";
pub const SELECTED_CLASS: &str = "selected";
pub const SELECTED_SEATS_ID: &str = "selectedSeats";
pub const SEAT_COUNT_ID: &str = "seatCount";
pub const TOTAL_FARE_ID: &str = "totalFare";
pub const BASE_FARE_ID: &str = "baseFare";
pub const CONTINUE_BUTTON_ID: &str = "continueButton";

/// Selected seat identifiers in click order, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSeatSet {
    seats: Vec<String>,
}

impl SelectedSeatSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the seat when absent, removes it when present. Returns whether
    /// the seat is selected afterwards.
    pub fn toggle(&mut self, seat: &str) -> bool {
        if let Some(pos) = self.seats.iter().position(|s| s == seat) {
            self.seats.remove(pos);
            false
        } else {
            self.seats.push(seat.to_string());
            true
        }
    }

    pub fn contains(&self, seat: &str) -> bool {
        self.seats.iter().any(|s| s == seat)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.seats
    }

    /// The hidden field format: `1A,2B`.
    pub fn joined(&self) -> String {
        self.seats.join(",")
    }

    pub fn total_fare(&self, base_fare: f64) -> f64 {
        base_fare * self.seats.len() as f64
    }
}

/// Elements the selector reads and writes. Only `seats` is required.
#[derive(Debug, Clone, Default)]
pub struct SeatSelectorBindings {
    /// Interactive seats with their `data-seat` identifier.
    pub seats: Vec<(ElementId, String)>,
    pub selected_input: Option<ElementId>,
    pub count_display: Option<ElementId>,
    pub total_display: Option<ElementId>,
    pub continue_button: Option<ElementId>,
    pub base_fare: f64,
}

impl SeatSelectorBindings {
    /// Resolves the canonical booking page ids. `None` when the page has no
    /// seat map.
    pub fn discover(doc: &Document) -> Option<Self> {
        let seat_map = doc.first_by_class(SEAT_MAP_CLASS)?;
        let seats = doc
            .query_class(seat_map, SEAT_CLASS)
            .into_iter()
            .filter(|id| !doc.has_class(*id, "booked") && !doc.has_class(*id, "driver"))
            .filter_map(|id| {
                let number = doc.element(id).and_then(|e| e.data("seat"))?;
                Some((id, number.to_string()))
            })
            .collect();

        Some(Self {
            seats,
            selected_input: doc.get_element_by_id(SELECTED_SEATS_ID),
            count_display: doc.get_element_by_id(SEAT_COUNT_ID),
            total_display: doc.get_element_by_id(TOTAL_FARE_ID),
            continue_button: doc.get_element_by_id(CONTINUE_BUTTON_ID),
            base_fare: read_base_fare(doc),
        })
    }
}

fn read_base_fare(doc: &Document) -> f64 {
    let Some(el) = doc.get_element_by_id(BASE_FARE_ID) else {
        return 0.0;
    };
    let raw = doc.value(el).trim();
    if raw.is_empty() {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(fare) if fare.is_finite() => fare,
        _ => {
            warn!(value = raw, "base fare is not a number, using 0");
            0.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeatSelector {
    bindings: SeatSelectorBindings,
    by_element: HashMap<ElementId, usize>,
    selected: SelectedSeatSet,
    currency: String,
}

impl SeatSelector {
    pub fn new(bindings: SeatSelectorBindings, currency: &str) -> Self {
        let by_element = bindings
            .seats
            .iter()
            .enumerate()
            .map(|(i, (id, _))| (*id, i))
            .collect();
        Self {
            bindings,
            by_element,
            selected: SelectedSeatSet::new(),
            currency: currency.to_string(),
        }
    }

    pub fn discover(doc: &Document, currency: &str) -> Option<Self> {
        SeatSelectorBindings::discover(doc).map(|b| Self::new(b, currency))
    }

    /// Elements that get a click listener.
    pub fn seat_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.bindings.seats.iter().map(|(id, _)| *id)
    }

    pub fn is_seat(&self, element: ElementId) -> bool {
        self.by_element.contains_key(&element)
    }

    pub fn selection(&self) -> &SelectedSeatSet {
        &self.selected
    }

    pub fn base_fare(&self) -> f64 {
        self.bindings.base_fare
    }

    /// Click handler. Elements that are not bound seats are ignored.
    pub fn toggle(&mut self, doc: &mut Document, element: ElementId) {
        let Some(&index) = self.by_element.get(&element) else {
            return;
        };
        let number = &self.bindings.seats[index].1;
        let now_selected = self.selected.toggle(number);
        debug!(seat = %number, selected = now_selected, count = self.selected.len(), "seat toggled");
        self.render(doc);
    }

    /// Projects the current selection onto the document.
    pub fn render(&self, doc: &mut Document) {
        for (id, number) in &self.bindings.seats {
            doc.toggle_class(*id, SELECTED_CLASS, self.selected.contains(number));
        }

        if let Some(input) = self.bindings.selected_input {
            doc.set_value(input, &self.selected.joined());
        }
        if let Some(count) = self.bindings.count_display {
            doc.set_text(count, &self.selected.len().to_string());
        }
        if let Some(total) = self.bindings.total_display {
            let fare = self.selected.total_fare(self.bindings.base_fare);
            doc.set_text(total, &format_fare(&self.currency, fare));
        }
        if let Some(button) = self.bindings.continue_button {
            doc.set_disabled(button, self.selected.is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_keeps_click_order() {
        let mut set = SelectedSeatSet::new();
        assert!(set.toggle("2B"));
        assert!(set.toggle("1A"));
        assert!(set.toggle("3C"));
        assert!(!set.toggle("1A"));
        assert_eq!(set.joined(), "2B,3C");
        assert!(set.toggle("1A"));
        assert_eq!(set.joined(), "2B,3C,1A");
    }

    #[test]
    fn total_is_count_times_fare() {
        let mut set = SelectedSeatSet::new();
        assert_eq!(set.total_fare(450.0), 0.0);
        set.toggle("1A");
        set.toggle("1B");
        assert_eq!(set.total_fare(450.0), 900.0);
    }
}
