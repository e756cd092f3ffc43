//! The booking page as an event-driven component host.
//!
//! [`BookingPage::load`] plays the part of the page-load hook: it discovers the
//! elements each component needs, hands them over, and records which component
//! listens to which element. After that the page only reacts to events passed
//! to [`BookingPage::dispatch`] (or the `click`/`choose`/`submit` shortcuts) and
//! to timers fired by [`BookingPage::advance_time`]. Every handler runs to
//! completion before the next event is taken.

pub mod cities;
pub mod form;
pub mod markup;
pub mod seats;
pub mod timers;
pub mod widgets;

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::PageConfig;
use crate::dom::event::{DomEvent, EventKind};
use crate::dom::{Document, ElementId};
use crate::models::CityOption;

use cities::CityPairConstraint;
use form::{SubmitGuard, SubmitOutcome};
use seats::SeatSelector;
use timers::{TimerQueue, TimerTask};
use widgets::WidgetRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    SeatClick,
    CityChange,
    BookingSubmit,
}

pub struct BookingPage {
    document: Document,
    widgets: WidgetRegistry,
    seats: Option<SeatSelector>,
    cities: Option<CityPairConstraint>,
    guard: Option<SubmitGuard>,
    listeners: HashMap<(ElementId, EventKind), Listener>,
    timers: TimerQueue,
    messages: Vec<String>,
    last_submit: Option<SubmitOutcome>,
}

impl BookingPage {
    pub fn load(document: Document, config: &PageConfig, today: NaiveDate) -> Self {
        let mut page = Self {
            widgets: WidgetRegistry::init(&document),
            document,
            seats: None,
            cities: None,
            guard: None,
            listeners: HashMap::new(),
            timers: TimerQueue::new(),
            messages: Vec::new(),
            last_submit: None,
        };

        if let Some(cities) =
            CityPairConstraint::discover(&page.document, CityOption::from_names(&config.cities))
        {
            cities.populate(&mut page.document);
            page.listen(cities.from_select(), EventKind::Change, Listener::CityChange);
            page.listen(cities.to_select(), EventKind::Change, Listener::CityChange);
            page.cities = Some(cities);
        }

        let alerts = widgets::schedule_alert_dismissal(&page.document, &mut page.timers, config.alert_dismiss_ms);

        if let Some(selector) = SeatSelector::discover(&page.document, &config.currency_symbol) {
            let seats: Vec<ElementId> = selector.seat_elements().collect();
            for seat in seats {
                page.listen(seat, EventKind::Click, Listener::SeatClick);
            }
            page.seats = Some(selector);
        }

        widgets::init_date_picker(&mut page.document, today);

        if let Some(guard) = SubmitGuard::discover(&page.document) {
            page.listen(guard.form(), EventKind::Submit, Listener::BookingSubmit);
            page.guard = Some(guard);
        }

        info!(
            seats = page.seats.as_ref().map_or(0, |s| s.seat_elements().count()),
            city_selector = page.cities.is_some(),
            alerts,
            "booking page loaded"
        );
        page
    }

    fn listen(&mut self, element: ElementId, kind: EventKind, listener: Listener) {
        self.listeners.insert((element, kind), listener);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    pub fn seat_selector(&self) -> Option<&SeatSelector> {
        self.seats.as_ref()
    }

    pub fn city_selector(&self) -> Option<&CityPairConstraint> {
        self.cities.as_ref()
    }

    /// Messages shown to the user by blocked submits, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last_submit(&self) -> Option<&SubmitOutcome> {
        self.last_submit.as_ref()
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.document.get_element_by_id(id)
    }

    /// Runs the listener registered for the event target, if any.
    pub fn dispatch(&mut self, event: &mut DomEvent) {
        let Some(listener) = self.listeners.get(&(event.target, event.kind)).copied() else {
            debug!(kind = event.kind.as_str(), target = event.target.index(), "no listener");
            return;
        };
        match listener {
            Listener::SeatClick => {
                if let Some(seats) = self.seats.as_mut() {
                    seats.toggle(&mut self.document, event.target);
                }
            }
            Listener::CityChange => {
                if let Some(cities) = self.cities.as_ref() {
                    cities.on_change(&mut self.document, event.target);
                }
            }
            Listener::BookingSubmit => {
                let Some(guard) = self.guard.as_ref() else {
                    return;
                };
                let outcome = guard.on_submit(&self.document);
                if let SubmitOutcome::Blocked(rejection) = &outcome {
                    event.prevent_default();
                    self.messages.push(rejection.to_string());
                }
                self.last_submit = Some(outcome);
            }
        }
    }

    pub fn click(&mut self, target: ElementId) {
        self.dispatch(&mut DomEvent::click(target));
    }

    /// Selects `value` in a dropdown the way a user would, then fires `change`.
    pub fn choose(&mut self, select: ElementId, value: &str) {
        self.document.set_select_value(select, value);
        self.dispatch(&mut DomEvent::change(select));
    }

    /// Submits the form. Without a registered guard the submit goes through
    /// with whatever the form holds.
    pub fn submit(&mut self, form: ElementId) -> SubmitOutcome {
        self.last_submit = None;
        let mut event = DomEvent::submit(form);
        self.dispatch(&mut event);
        match self.last_submit.clone() {
            Some(outcome) => outcome,
            None => {
                let guard = SubmitGuard::new(form, None, None, None, None);
                SubmitOutcome::Allowed(guard.read(&self.document))
            }
        }
    }

    pub fn advance_time(&mut self, delta_ms: u64) {
        for task in self.timers.advance_time(delta_ms) {
            match task {
                TimerTask::DismissAlert(alert) => {
                    debug!(alert = alert.index(), "alert dismissed");
                    self.document.remove(alert);
                }
            }
        }
    }

    pub fn toggle_password_visibility(&mut self, input_id: &str, icon_id: &str) {
        widgets::toggle_password_visibility(&mut self.document, input_id, icon_id);
    }
}
