//! Dashboard aggregation
//!
//! Turns the booking collection into today's figures. "Today" is civil-date
//! equality with `now`; time of day does not matter.

pub mod alerts;

pub use alerts::{MAX_ALERTS, SOON_WINDOW_MINUTES, alert_for, collect_alerts};

use chrono::NaiveDateTime;
use shared::models::{Booking, DashboardSnapshot, ReservationBadge, UpcomingReservation};

/// Table count shown on the dashboard. Not reconciled with the table floor plan.
pub const TOTAL_TABLES: i64 = 24;

/// Entries in the "today's reservations" panel
pub const MAX_UPCOMING: usize = 4;

pub fn aggregate(bookings: &[Booking], now: NaiveDateTime) -> DashboardSnapshot {
    let today = now.date();
    let todays: Vec<&Booking> = bookings.iter().filter(|b| b.is_on(today)).collect();

    let holding = todays.iter().filter(|b| b.status.holds_table()).count() as i64;
    let total_guests_today = todays
        .iter()
        .map(|b| b.guest_count())
        .fold(0i64, i64::saturating_add);

    let upcoming = todays
        .iter()
        .filter(|b| b.status.holds_table())
        .take(MAX_UPCOMING)
        .map(|b| UpcomingReservation {
            booking_id: b.id.clone(),
            customer_name: b.customer_name.clone(),
            table_number: b.table_number.clone(),
            guests: b.guests_display(),
            time: b.time.clone(),
            badge: ReservationBadge::for_status(b.status),
        })
        .collect();

    let alerts = collect_alerts(todays.iter().copied(), now);

    let snapshot = DashboardSnapshot {
        total_tables: TOTAL_TABLES,
        available_tables: TOTAL_TABLES - holding,
        today_booking_count: todays.len(),
        total_guests_today,
        upcoming,
        alerts,
    };

    tracing::debug!(
        today = %today,
        bookings = snapshot.today_booking_count,
        available = snapshot.available_tables,
        alerts = snapshot.alerts.len(),
        "Dashboard aggregated"
    );

    snapshot
}
