use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fixed parking space. Numbers are 1-based and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub number: usize,
    pub registration: Option<String>,
}

impl Slot {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            registration: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.registration.is_some()
    }

    pub fn occupy(&mut self, registration: &str) {
        self.registration = Some(registration.to_string());
    }

    pub fn vacate(&mut self) {
        self.registration = None;
    }
}

/// An active parking session, keyed by registration number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub slot_number: usize,
    pub registration: String,
    pub entry_time: DateTime<Utc>,
}

impl Ticket {
    pub fn new(slot_number: usize, registration: &str) -> Self {
        Self {
            slot_number,
            registration: registration.to_string(),
            entry_time: Utc::now(),
        }
    }
}

/// One row of the occupancy report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub slot_number: usize,
    pub registration: String,
}
