use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusStatus {
    Active,
    Maintenance,
    Retired,
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BusStatus::Active => "Active",
            BusStatus::Maintenance => "Maintenance",
            BusStatus::Retired => "Retired",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub id: i64,
    pub registration_number: String,
    pub capacity: u32,
    pub status: BusStatus,
}
