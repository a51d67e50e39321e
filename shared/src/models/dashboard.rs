//! Dashboard view models
//!
//! Plain data handed to the rendering layer. No markup is produced here.

use serde::{Deserialize, Serialize};

use super::BookingStatus;

/// Badge shown next to an upcoming reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationBadge {
    Ongoing,
    Upcoming,
}

impl ReservationBadge {
    pub fn for_status(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Ongoing => ReservationBadge::Ongoing,
            _ => ReservationBadge::Upcoming,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationBadge::Ongoing => "Ongoing",
            ReservationBadge::Upcoming => "Upcoming",
        }
    }
}

/// One line of the "today's reservations" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingReservation {
    pub booking_id: String,
    pub customer_name: String,
    pub table_number: String,
    pub guests: String,
    pub time: String,
    pub badge: ReservationBadge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Table is occupied by an ongoing booking
    Overdue,
    /// Reservation due within the alert window
    Soon,
}

/// Time-sensitive notice about a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub table: String,
    pub message: String,
    pub kind: AlertKind,
    pub badge_text: String,
}

/// Aggregated figures for today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub total_tables: i64,
    /// May go negative when more bookings hold tables than exist
    pub available_tables: i64,
    pub today_booking_count: usize,
    pub total_guests_today: i64,
    pub upcoming: Vec<UpcomingReservation>,
    pub alerts: Vec<Alert>,
}

/// One row of the bookings management table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub table_number: String,
    /// `"{date} • {time}"`
    pub schedule: String,
    pub guests: String,
    pub status: BookingStatus,
    pub status_label: String,
    pub badge_class: String,
    /// "Mark complete" is only offered for ongoing bookings
    pub can_complete: bool,
}
