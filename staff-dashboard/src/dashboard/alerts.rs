//! Time-sensitive table alerts

use chrono::NaiveDateTime;
use shared::models::{Alert, AlertKind, Booking, BookingStatus};

use crate::utils::time::minutes_until;

/// Reservations due within this many minutes raise a "soon" alert
pub const SOON_WINDOW_MINUTES: i64 = 120;

/// Alerts shown on the dashboard
pub const MAX_ALERTS: usize = 3;

/// Alert for a single booking, if any
///
/// Ongoing bookings always report occupancy, regardless of their time.
pub fn alert_for(booking: &Booking, now: NaiveDateTime) -> Option<Alert> {
    if booking.status == BookingStatus::Ongoing {
        return Some(Alert {
            table: booking.table_number.clone(),
            message: format!("Occupied since {}", booking.time),
            kind: AlertKind::Overdue,
            badge_text: BookingStatus::Ongoing.label().to_string(),
        });
    }

    let diff = minutes_until(booking.scheduled_at()?, now);
    if diff <= 0 || diff > SOON_WINDOW_MINUTES {
        return None;
    }

    let badge_text = if diff < 60 {
        format!("In {} min", diff)
    } else {
        format!("In {} hours", diff / 60)
    };

    Some(Alert {
        table: booking.table_number.clone(),
        message: format!("Reserved at {}", booking.time),
        kind: AlertKind::Soon,
        badge_text,
    })
}

/// Alerts for `bookings` in their given order, first [`MAX_ALERTS`] only
pub fn collect_alerts<'a>(
    bookings: impl IntoIterator<Item = &'a Booking>,
    now: NaiveDateTime,
) -> Vec<Alert> {
    bookings
        .into_iter()
        .filter_map(|b| alert_for(b, now))
        .take(MAX_ALERTS)
        .collect()
}
