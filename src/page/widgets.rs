//! Page widgets around the booking flow: tooltip/popover bindings for the
//! external widget library, auto-dismissed alerts, the journey date picker and
//! the password visibility toggle.

use chrono::NaiveDate;
use tracing::debug;

use crate::dom::{Document, ElementId};
use crate::format::iso_date;

use super::timers::{TimerQueue, TimerTask};

pub const JOURNEY_DATE_ID: &str = "journeyDate";
pub const ALERT_CLASS: &str = "alert";
pub const PERSISTENT_ALERT_CLASS: &str = "alert-persistent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Tooltip,
    Popover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Hover,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetBinding {
    pub element: ElementId,
    pub kind: WidgetKind,
    pub trigger: Trigger,
}

/// Elements handed to the widget library on page load.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    bindings: Vec<WidgetBinding>,
}

impl WidgetRegistry {
    pub fn init(doc: &Document) -> Self {
        let tooltips = doc
            .query_attr("data-bs-toggle", "tooltip")
            .into_iter()
            .map(|element| WidgetBinding { element, kind: WidgetKind::Tooltip, trigger: Trigger::Hover });
        let popovers = doc
            .query_attr("data-bs-toggle", "popover")
            .into_iter()
            .map(|element| WidgetBinding { element, kind: WidgetKind::Popover, trigger: Trigger::Click });
        let bindings: Vec<WidgetBinding> = tooltips.chain(popovers).collect();
        debug!(count = bindings.len(), "widgets initialized");
        Self { bindings }
    }

    pub fn bindings(&self) -> &[WidgetBinding] {
        &self.bindings
    }

    pub fn of_kind(&self, kind: WidgetKind) -> impl Iterator<Item = &WidgetBinding> {
        self.bindings.iter().filter(move |b| b.kind == kind)
    }
}

/// Schedules removal of every non-persistent alert. Returns how many were
/// scheduled.
pub fn schedule_alert_dismissal(doc: &Document, timers: &mut TimerQueue, delay_ms: u64) -> usize {
    let alerts: Vec<ElementId> = doc
        .query_class(doc.body(), ALERT_CLASS)
        .into_iter()
        .filter(|id| !doc.has_class(*id, PERSISTENT_ALERT_CLASS))
        .collect();
    for alert in &alerts {
        timers.set_timeout(delay_ms, TimerTask::DismissAlert(*alert));
    }
    alerts.len()
}

/// Past dates are not selectable; an empty picker starts at today.
pub fn init_date_picker(doc: &mut Document, today: NaiveDate) {
    let Some(input) = doc.get_element_by_id(JOURNEY_DATE_ID) else {
        return;
    };
    let formatted = iso_date(today);
    doc.set_attr(input, "min", &formatted);
    if doc.value(input).is_empty() {
        doc.set_value(input, &formatted);
    }
}

/// Flips a password field between hidden and visible text, swapping the eye
/// icon to match. Missing elements leave the page untouched.
pub fn toggle_password_visibility(doc: &mut Document, input_id: &str, icon_id: &str) {
    let (Some(input), Some(icon)) = (doc.get_element_by_id(input_id), doc.get_element_by_id(icon_id)) else {
        return;
    };
    if doc.attr(input, "type") == Some("password") {
        doc.set_attr(input, "type", "text");
        doc.remove_class(icon, "fa-eye");
        doc.add_class(icon, "fa-eye-slash");
    } else {
        doc.set_attr(input, "type", "password");
        doc.remove_class(icon, "fa-eye-slash");
        doc.add_class(icon, "fa-eye");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_doc() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_id(input, "password");
        doc.set_attr(input, "type", "password");
        doc.append_child(doc.body(), input);
        let icon = doc.create_element("i");
        doc.set_id(icon, "eye");
        doc.add_class(icon, "fa-eye");
        doc.append_child(doc.body(), icon);
        (doc, input, icon)
    }

    #[test]
    fn password_toggle_round_trips() {
        let (mut doc, input, icon) = password_doc();

        toggle_password_visibility(&mut doc, "password", "eye");
        assert_eq!(doc.attr(input, "type"), Some("text"));
        assert!(doc.has_class(icon, "fa-eye-slash"));
        assert!(!doc.has_class(icon, "fa-eye"));

        toggle_password_visibility(&mut doc, "password", "eye");
        assert_eq!(doc.attr(input, "type"), Some("password"));
        assert!(doc.has_class(icon, "fa-eye"));
    }

    #[test]
    fn password_toggle_without_icon_is_noop() {
        let (mut doc, input, _) = password_doc();
        toggle_password_visibility(&mut doc, "password", "missing");
        assert_eq!(doc.attr(input, "type"), Some("password"));
    }

    #[test]
    fn date_picker_keeps_existing_value() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_id(input, JOURNEY_DATE_ID);
        doc.set_value(input, "2026-12-01");
        doc.append_child(doc.body(), input);

        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        init_date_picker(&mut doc, today);
        assert_eq!(doc.attr(input, "min"), Some("2026-10-16"));
        assert_eq!(doc.value(input), "2026-12-01");
    }
}
