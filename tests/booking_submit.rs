//! Submitting the booking form: blocked without seats or with equal cities,
//! allowed otherwise.

use bus_booking::config::PageConfig;
use bus_booking::dom::ElementId;
use bus_booking::models::Trip;
use bus_booking::page::cities::{FROM_CITY_ID, TO_CITY_ID};
use bus_booking::page::form::{
    BookingRejection, BookingSubmission, SubmitGuard, SubmitOutcome, BOOKING_FORM_CLASS,
};
use bus_booking::page::markup::booking_page;
use bus_booking::page::BookingPage;
use chrono::NaiveDate;
use proptest::prelude::*;

fn load() -> BookingPage {
    let trip = Trip::with_layout(1, 1, "Mumbai", "Pune", 500.0, 2);
    let config = PageConfig::default();
    BookingPage::load(
        booking_page(&trip, &config.currency_symbol, &[]),
        &config,
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
    )
}

fn form(page: &BookingPage) -> ElementId {
    page.document().first_by_class(BOOKING_FORM_CLASS).unwrap()
}

fn seat(page: &BookingPage, number: &str) -> ElementId {
    let doc = page.document();
    doc.query_class(doc.body(), "seat")
        .into_iter()
        .find(|id| doc.element(*id).and_then(|e| e.data("seat")) == Some(number))
        .unwrap()
}

#[test]
fn blocked_without_seats() {
    let mut page = load();
    let from = page.element_by_id(FROM_CITY_ID).unwrap();
    let to = page.element_by_id(TO_CITY_ID).unwrap();
    page.choose(from, "mumbai");
    page.choose(to, "pune");

    let outcome = page.submit(form(&page));

    assert_eq!(outcome, SubmitOutcome::Blocked(BookingRejection::NoSeatsSelected));
    assert_eq!(page.messages(), ["Please select at least one seat.".to_string()]);
}

#[test]
fn blocked_with_no_cities_chosen() {
    let mut page = load();
    page.click(seat(&page, "1A"));

    // both dropdowns still on the placeholder: equal empty values
    let outcome = page.submit(form(&page));

    assert_eq!(outcome, SubmitOutcome::Blocked(BookingRejection::SameCity));
    assert_eq!(
        page.messages(),
        ["Departure and destination cities cannot be the same.".to_string()]
    );
}

#[test]
fn guard_blocks_equal_cities_set_without_change_events() {
    let mut page = load();
    page.click(seat(&page, "1A"));
    let mut doc = page.document().clone();
    let from = doc.get_element_by_id(FROM_CITY_ID).unwrap();
    let to = doc.get_element_by_id(TO_CITY_ID).unwrap();
    doc.set_select_value(from, "delhi");
    doc.set_select_value(to, "delhi");

    let guard = SubmitGuard::discover(&doc).unwrap();
    assert_eq!(guard.on_submit(&doc), SubmitOutcome::Blocked(BookingRejection::SameCity));
}

#[test]
fn allowed_with_seats_and_distinct_cities() {
    let mut page = load();
    page.click(seat(&page, "2C"));
    page.click(seat(&page, "1A"));
    let from = page.element_by_id(FROM_CITY_ID).unwrap();
    let to = page.element_by_id(TO_CITY_ID).unwrap();
    page.choose(from, "mumbai");
    page.choose(to, "pune");

    let outcome = page.submit(form(&page));

    let SubmitOutcome::Allowed(submission) = outcome else {
        panic!("submit should pass");
    };
    assert_eq!(submission.selected_seats, vec!["2C".to_string(), "1A".to_string()]);
    assert_eq!(submission.from_city, "mumbai");
    assert_eq!(submission.to_city, "pune");
    assert_eq!(submission.journey_date.as_deref(), Some("2026-10-16"));
    assert!(page.messages().is_empty());
}

#[test]
fn blocked_submit_prevents_default() {
    use bus_booking::dom::event::DomEvent;

    let mut page = load();
    let mut event = DomEvent::submit(form(&page));
    page.dispatch(&mut event);
    assert!(event.default_prevented());
}

proptest! {
    #[test]
    fn guard_blocks_exactly_the_invalid_submissions(
        seats in prop::collection::vec("[1-9][A-D]", 0..4),
        from in prop::sample::select(vec!["", "mumbai", "delhi", "pune"]),
        to in prop::sample::select(vec!["", "mumbai", "delhi", "pune"]),
    ) {
        let submission = BookingSubmission::new(&seats.join(","), from, to, None);
        let result = submission.check();
        if seats.is_empty() {
            prop_assert_eq!(result, Err(BookingRejection::NoSeatsSelected));
        } else if from == to {
            prop_assert_eq!(result, Err(BookingRejection::SameCity));
        } else {
            prop_assert_eq!(result, Ok(()));
        }
    }
}
