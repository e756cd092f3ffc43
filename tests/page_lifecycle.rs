use bus_booking::config::PageConfig;
use bus_booking::dom::render::to_html;
use bus_booking::models::Trip;
use bus_booking::page::markup::{booking_page, Notice};
use bus_booking::page::widgets::{Trigger, WidgetKind, JOURNEY_DATE_ID};
use bus_booking::page::BookingPage;
use chrono::NaiveDate;

fn trip() -> Trip {
    let mut trip = Trip::with_layout(1, 1, "Mumbai", "Pune", 500.0, 2);
    trip.book(&["1B".to_string()]).unwrap();
    trip
}

fn load(notices: &[Notice]) -> BookingPage {
    let config = PageConfig::default();
    BookingPage::load(
        booking_page(&trip(), &config.currency_symbol, notices),
        &config,
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
    )
}

#[test]
fn flash_alerts_dismiss_after_delay() {
    let mut page = load(&[Notice::flash("Saved"), Notice::persistent("Read the rules")]);
    let alerts = page.document().query_class(page.document().body(), "alert");
    assert_eq!(alerts.len(), 2);

    page.advance_time(4999);
    assert!(page.document().is_attached(alerts[0]));

    page.advance_time(1);
    assert!(!page.document().is_attached(alerts[0]));
    assert!(page.document().is_attached(alerts[1]));

    page.advance_time(60_000);
    assert!(page.document().is_attached(alerts[1]));
}

#[test]
fn tooltips_bound_to_available_seats() {
    let page = load(&[]);
    let tooltips: Vec<_> = page.widgets().of_kind(WidgetKind::Tooltip).collect();
    // 8 seats, one booked, driver excluded
    assert_eq!(tooltips.len(), 7);
    assert!(tooltips.iter().all(|b| b.trigger == Trigger::Hover));
    assert_eq!(page.widgets().of_kind(WidgetKind::Popover).count(), 0);
}

#[test]
fn journey_date_starts_today() {
    let page = load(&[]);
    let date = page.element_by_id(JOURNEY_DATE_ID).unwrap();
    assert_eq!(page.document().attr(date, "min"), Some("2026-10-16"));
    assert_eq!(page.document().value(date), "2026-10-16");
}

#[test]
fn rendered_page_carries_seat_markup() {
    let page = load(&[]);
    let html = to_html(page.document());

    assert!(html.contains("class=\"seat driver\" data-seat=\"D\""));
    assert!(html.contains("class=\"seat booked\" data-seat=\"1B\""));
    assert!(html.contains("<option value=\"mumbai\">Mumbai</option>"));
    assert!(html.contains("id=\"continueButton\""));
    assert!(html.contains("₹0.00"));
}

#[test]
fn password_toggle_is_a_noop_without_fields() {
    let mut page = load(&[]);
    let before = to_html(page.document());
    page.toggle_password_visibility("password", "passwordIcon");
    assert_eq!(to_html(page.document()), before);
}
