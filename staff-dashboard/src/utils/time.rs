//! 时间工具
//!
//! Clock source and header formatting.
//!
//! All "today" decisions use the civil date of the injected clock. Time zones
//! are not modelled: bookings and the clock share one wall clock.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now"
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Frozen clock for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Whole minutes from `now` until `at`, rounded toward negative infinity
pub fn minutes_until(at: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (at - now).num_milliseconds().div_euclid(60_000)
}

/// Header clock, `HH:MM:SS`
pub fn format_clock_time(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Header date, e.g. `Monday, January 5, 2025`
pub fn format_header_date(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}
