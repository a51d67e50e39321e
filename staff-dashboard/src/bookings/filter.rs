//! Booking list filter
//!
//! Typed criteria applied to booking records. Both criteria must pass for a
//! booking to be shown.

use chrono::NaiveDate;
use shared::models::{Booking, BookingStatus, ParseStatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    /// Parse a select-box value: `"all"` or a status name (any case)
    pub fn parse(value: &str) -> Result<Self, ParseStatusError> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        value.parse().map(StatusFilter::Only)
    }

    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingFilter {
    pub date: Option<NaiveDate>,
    pub status: StatusFilter,
}

impl BookingFilter {
    pub fn new(date: Option<NaiveDate>, status: StatusFilter) -> Self {
        Self { date, status }
    }

    /// Build from raw form values; an empty or invalid date disables the date criterion
    pub fn from_form(date: &str, status: &str) -> Result<Self, ParseStatusError> {
        let date = match date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(e) => {
                    tracing::warn!("Ignoring unparsable date filter '{}': {}", raw, e);
                    None
                }
            },
        };
        Ok(Self {
            date,
            status: StatusFilter::parse(status)?,
        })
    }

    pub fn is_active(&self) -> bool {
        self.date.is_some() || self.status != StatusFilter::All
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        let date_ok = self.date.is_none_or(|d| booking.is_on(d));
        date_ok && self.status.matches(booking.status)
    }

    /// Visibility decision per booking, in input order
    pub fn visibility(&self, bookings: &[Booking]) -> Vec<bool> {
        bookings.iter().map(|b| self.matches(b)).collect()
    }

    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Filter chip label, e.g. `Jan 5, 2025`
pub fn format_filter_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::seed::default_bookings;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let bookings = default_bookings(day(5));
        let filter = BookingFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.visibility(&bookings), vec![true; 5]);
    }

    #[test]
    fn test_date_and_status_are_anded() {
        let bookings = default_bookings(day(5));

        let by_date = BookingFilter::new(Some(day(5)), StatusFilter::All);
        assert_eq!(by_date.apply(&bookings).len(), 4);

        let by_status = BookingFilter::new(None, StatusFilter::Only(BookingStatus::Completed));
        let ids: Vec<_> = by_status.apply(&bookings).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["5"]);

        let both = BookingFilter::new(Some(day(5)), StatusFilter::Only(BookingStatus::Completed));
        assert!(both.apply(&bookings).is_empty());
    }

    #[test]
    fn test_from_form_values() {
        let filter = BookingFilter::from_form("2025-01-04", "Completed").unwrap();
        assert_eq!(filter.date, Some(day(4)));
        assert_eq!(filter.status, StatusFilter::Only(BookingStatus::Completed));

        let cleared = BookingFilter::from_form("", "all").unwrap();
        assert_eq!(cleared, BookingFilter::default());

        assert!(BookingFilter::from_form("", "seated").is_err());
    }

    #[test]
    fn test_format_filter_date() {
        assert_eq!(format_filter_date(day(5)), "Jan 5, 2025");
        assert_eq!(
            format_filter_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
            "Dec 31, 2024"
        );
    }
}
