//! Rows for the bookings management table

use shared::models::{Booking, BookingRow, BookingStatus};

use super::BookingFilter;

pub fn booking_row(booking: &Booking) -> BookingRow {
    BookingRow {
        id: booking.id.clone(),
        customer_name: booking.customer_name.clone(),
        customer_email: booking.customer_email.clone().unwrap_or_default(),
        table_number: booking.table_number.clone(),
        schedule: format!("{} • {}", booking.date, booking.time),
        guests: booking.guests_display(),
        status: booking.status,
        status_label: booking.status.label().to_string(),
        badge_class: booking.status.as_str().to_string(),
        can_complete: booking.status == BookingStatus::Ongoing,
    }
}

/// Rows for every booking passing `filter`, in collection order
pub fn booking_rows(bookings: &[Booking], filter: &BookingFilter) -> Vec<BookingRow> {
    filter.apply(bookings).into_iter().map(booking_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::StatusFilter;
    use crate::bookings::seed::default_bookings;
    use chrono::NaiveDate;

    #[test]
    fn test_rows_only_offer_completion_for_ongoing() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let rows = booking_rows(&default_bookings(today), &BookingFilter::default());

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].schedule, "2025-01-05 • 13:30");
        assert_eq!(rows[0].status_label, "Ongoing");
        assert_eq!(rows[0].badge_class, "ongoing");
        assert!(rows[0].can_complete);
        assert!(rows[1..].iter().all(|r| !r.can_complete));
    }

    #[test]
    fn test_rows_respect_filter() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let filter = BookingFilter::new(None, StatusFilter::Only(BookingStatus::Confirmed));
        let rows = booking_rows(&default_bookings(today), &filter);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "4"]);
    }
}
