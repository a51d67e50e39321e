//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status, independent of [`super::BookingStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TableStatus::Available => "Available",
            TableStatus::Occupied => "Occupied",
            TableStatus::Reserved => "Reserved",
        }
    }

    /// Status icon name
    pub fn icon(&self) -> &'static str {
        match self {
            TableStatus::Available => "check-circle",
            TableStatus::Occupied => "person-fill",
            TableStatus::Reserved => "clock-fill",
        }
    }
}

/// Physical dining table (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub number: u32,
    pub seats: u32,
    pub status: TableStatus,
    /// Annotation such as "Reserved at 2:00 PM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl DiningTable {
    pub fn available(number: u32, seats: u32) -> Self {
        Self {
            number,
            seats,
            status: TableStatus::Available,
            timestamp: None,
        }
    }

    /// Display label, matches `Booking::table_number`
    pub fn label(&self) -> String {
        format!("Table {}", self.number)
    }
}
