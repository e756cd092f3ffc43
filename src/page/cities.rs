//! Linked origin/destination dropdowns that can never hold the same city.

use tracing::debug;

use crate::dom::{Document, ElementId};
use crate::models::CityOption;

pub const FROM_CITY_ID: &str = "fromCity";
pub const TO_CITY_ID: &str = "toCity";
pub const FROM_PLACEHOLDER: &str = "Select departure city";
pub const TO_PLACEHOLDER: &str = "Select destination city";

#[derive(Debug, Clone)]
pub struct CityPairConstraint {
    from: ElementId,
    to: ElementId,
    cities: Vec<CityOption>,
}

impl CityPairConstraint {
    pub fn new(from: ElementId, to: ElementId, cities: Vec<CityOption>) -> Self {
        Self { from, to, cities }
    }

    /// Binds to `#fromCity` / `#toCity`. Both must exist, otherwise the page
    /// simply has no city selector.
    pub fn discover(doc: &Document, cities: Vec<CityOption>) -> Option<Self> {
        let from = doc.get_element_by_id(FROM_CITY_ID)?;
        let to = doc.get_element_by_id(TO_CITY_ID)?;
        Some(Self::new(from, to, cities))
    }

    pub fn from_select(&self) -> ElementId {
        self.from
    }

    pub fn to_select(&self) -> ElementId {
        self.to
    }

    pub fn cities(&self) -> &[CityOption] {
        &self.cities
    }

    /// Replaces both option lists with the placeholder plus every city.
    pub fn populate(&self, doc: &mut Document) {
        for (select, placeholder) in [(self.from, FROM_PLACEHOLDER), (self.to, TO_PLACEHOLDER)] {
            doc.clear_children(select);
            doc.append_option(select, "", placeholder, true, true);
            for city in &self.cities {
                doc.append_option(select, &city.value, &city.label, false, false);
            }
        }
    }

    /// Change handler for either dropdown; other targets are ignored.
    pub fn on_change(&self, doc: &mut Document, changed: ElementId) {
        let other = if changed == self.from {
            self.to
        } else if changed == self.to {
            self.from
        } else {
            return;
        };
        let value = doc.select_value(changed).to_string();
        if enforce(doc, &value, other) {
            // the other side is unset now, nothing left to mirror
            for option in doc.options(changed) {
                doc.set_disabled(option, false);
            }
        }
    }
}

/// Mirrors `value` into `other`: everything re-enabled, the matching option
/// disabled, and `other` cleared if it was holding that same value. Returns
/// whether `other` was cleared.
fn enforce(doc: &mut Document, value: &str, other: ElementId) -> bool {
    let options = doc.options(other);
    for option in &options {
        doc.set_disabled(*option, false);
    }

    let Some(matching) = options.into_iter().find(|o| doc.value(*o) == value) else {
        return false;
    };
    doc.set_disabled(matching, true);

    if doc.select_value(other) == value {
        debug!(city = value, "clearing opposite city selection");
        doc.set_select_value(other, "");
        return true;
    }
    false
}
