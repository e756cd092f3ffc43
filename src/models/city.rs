use serde::Serialize;

pub const DEFAULT_CITIES: &[&str] = &[
    "Bangalore", "Mumbai", "Delhi", "Chennai", "Hyderabad",
    "Kolkata", "Pune", "Ahmedabad", "Jaipur", "Lucknow",
    "Surat", "Kochi", "Chandigarh", "Indore", "Bhopal",
];

/// One dropdown entry: display label as given, value lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityOption {
    pub label: String,
    pub value: String,
}

impl CityOption {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: label.to_lowercase(),
        }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<CityOption> {
        names.iter().map(|n| CityOption::new(n.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_lowercased_label() {
        let opt = CityOption::new("Chandigarh");
        assert_eq!(opt.label, "Chandigarh");
        assert_eq!(opt.value, "chandigarh");
        assert_eq!(CityOption::from_names(DEFAULT_CITIES).len(), 15);
    }
}
