//! Table status projection
//!
//! Two views over the same 24-table floor plan:
//! - [`project`]: preset floor states, independent of bookings
//! - [`project_from_bookings`]: states derived from today's bookings

use chrono::NaiveDateTime;
use shared::models::{Booking, BookingStatus, DiningTable, TableStatus};

/// Seat count per table, table 1 first
const FLOOR_PLAN: [u32; 24] = [
    2, 4, 2, 2, 4, 6, 4, 6, 2, 4, 2, 4, 6, 2, 4, 2, 4, 6, 2, 4, 2, 4, 6, 4,
];

/// (table number, status, annotation)
const PRESET_STATES: [(u32, TableStatus, &str); 5] = [
    (4, TableStatus::Reserved, "Reserved at 2:00 PM"),
    (5, TableStatus::Occupied, "Occupied since 1:30 PM"),
    (7, TableStatus::Reserved, "Reserved at 6:30 PM"),
    (12, TableStatus::Occupied, "Occupied since 12:30 PM"),
    (15, TableStatus::Reserved, "Reserved at 7:00 PM"),
];

fn floor_plan() -> Vec<DiningTable> {
    FLOOR_PLAN
        .iter()
        .zip(1u32..)
        .map(|(&seats, number)| DiningTable::available(number, seats))
        .collect()
}

/// The fixed floor with its preset states
pub fn project() -> Vec<DiningTable> {
    let mut tables = floor_plan();
    for (number, status, note) in PRESET_STATES {
        if let Some(table) = tables.iter_mut().find(|t| t.number == number) {
            table.status = status;
            table.timestamp = Some(note.to_string());
        }
    }
    tables
}

/// Table number from a label such as `"Table 5"`
pub fn parse_table_label(label: &str) -> Option<u32> {
    let rest = label.trim();
    let rest = rest
        .strip_prefix("Table")
        .or_else(|| rest.strip_prefix("table"))
        .unwrap_or(rest);
    rest.trim().parse().ok()
}

/// The floor plan with state taken from today's bookings
///
/// Ongoing bookings mark their table occupied, confirmed and upcoming ones
/// reserved. Occupied wins over reserved; otherwise the first booking for a
/// table wins. Labels that name no table on the floor are skipped.
pub fn project_from_bookings(bookings: &[Booking], now: NaiveDateTime) -> Vec<DiningTable> {
    let today = now.date();
    let mut tables = floor_plan();

    for booking in bookings.iter().filter(|b| b.is_on(today)) {
        let (status, note) = match booking.status {
            BookingStatus::Ongoing => (
                TableStatus::Occupied,
                format!("Occupied since {}", booking.time),
            ),
            BookingStatus::Confirmed | BookingStatus::Upcoming => (
                TableStatus::Reserved,
                format!("Reserved at {}", booking.time),
            ),
            BookingStatus::Completed | BookingStatus::Cancelled => continue,
        };

        let Some(number) = parse_table_label(&booking.table_number) else {
            tracing::debug!(label = %booking.table_number, "Booking table label not on floor plan");
            continue;
        };
        let Some(table) = tables.iter_mut().find(|t| t.number == number) else {
            tracing::debug!(number, "Booking table number not on floor plan");
            continue;
        };

        let replace = matches!(
            (table.status, status),
            (TableStatus::Available, _) | (TableStatus::Reserved, TableStatus::Occupied)
        );
        if replace {
            table.status = status;
            table.timestamp = Some(note);
        }
    }

    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::default_bookings;
    use chrono::NaiveDate;

    #[test]
    fn test_fixture_layout() {
        let tables = project();
        assert_eq!(tables.len(), 24);
        assert_eq!(tables.first().map(|t| t.number), Some(1));
        assert_eq!(tables.last().map(|t| t.number), Some(24));
        assert_eq!(tables.iter().map(|t| t.seats).sum::<u32>(), 88);

        let table5 = &tables[4];
        assert_eq!(table5.status, TableStatus::Occupied);
        assert_eq!(table5.status.icon(), "person-fill");
        assert_eq!(table5.timestamp.as_deref(), Some("Occupied since 1:30 PM"));

        let busy = tables
            .iter()
            .filter(|t| t.status != TableStatus::Available)
            .count();
        assert_eq!(busy, 5);
        assert!(tables[0].timestamp.is_none());
        assert_eq!(tables[0].status.icon(), "check-circle");
        assert_eq!(tables[3].status.icon(), "clock-fill");
    }

    #[test]
    fn test_fixture_is_deterministic() {
        assert_eq!(project(), project());
    }

    #[test]
    fn test_parse_table_label() {
        assert_eq!(parse_table_label("Table 15"), Some(15));
        assert_eq!(parse_table_label(" 7 "), Some(7));
        assert_eq!(parse_table_label("Patio"), None);
    }

    #[test]
    fn test_derived_from_seed() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let now = today.and_hms_opt(13, 31, 0).unwrap();
        let tables = project_from_bookings(&default_bookings(today), now);

        assert_eq!(tables.len(), 24);
        assert_eq!(tables[4].status, TableStatus::Occupied);
        assert_eq!(tables[4].timestamp.as_deref(), Some("Occupied since 13:30"));
        assert_eq!(tables[3].status, TableStatus::Reserved);
        assert_eq!(tables[7].status, TableStatus::Reserved);
        assert_eq!(tables[14].status, TableStatus::Reserved);
        // yesterday's completed booking on table 2 is ignored
        assert_eq!(tables[1].status, TableStatus::Available);
    }

    #[test]
    fn test_occupied_wins_over_reserved() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let mut bookings = default_bookings(today);
        bookings[1].table_number = "Table 9".into();
        bookings[0].table_number = "Table 9".into();
        bookings.swap(0, 1);

        let tables = project_from_bookings(&bookings, today.and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(tables[8].status, TableStatus::Occupied);
    }

    #[test]
    fn test_first_reservation_wins_on_shared_table() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let bookings = [
            Booking::new("a", "Early", "Table 10", today, "18:00", BookingStatus::Confirmed),
            Booking::new("b", "Late", "Table 10", today, "17:00", BookingStatus::Upcoming),
        ];

        let tables = project_from_bookings(&bookings, today.and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(tables[9].status, TableStatus::Reserved);
        assert_eq!(tables[9].timestamp.as_deref(), Some("Reserved at 18:00"));
    }
}
