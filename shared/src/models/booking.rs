//! Booking Model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Guest count used whenever a booking carries no usable value
pub const DEFAULT_GUESTS: i64 = 4;

/// Booking lifecycle status
///
/// `confirmed -> ongoing -> completed`. `upcoming` and `cancelled` are only
/// ever set externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Ongoing,
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Confirmed,
        BookingStatus::Ongoing,
        BookingStatus::Upcoming,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// Wire name (`"ongoing"`), also used as the badge CSS class
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Ongoing => "ongoing",
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Human label (`"Ongoing"`)
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Ongoing => "Ongoing",
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Whether the booking currently holds a table (confirmed or ongoing)
    pub fn holds_table(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Ongoing)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown booking status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for BookingStatus {
    type Err = ParseStatusError;

    /// Case-insensitive, accepts both `"ongoing"` and `"Ongoing"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Raw guest count as stored (string or number)
///
/// Kept verbatim so a load/save round trip never rewrites the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestCount(serde_json::Value);

impl GuestCount {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }

    /// Interpreted count: leading integer, `DEFAULT_GUESTS` when missing,
    /// non-numeric or zero
    pub fn count(&self) -> i64 {
        let parsed = match &self.0 {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            serde_json::Value::String(s) => parse_leading_int(s),
            _ => None,
        };
        match parsed {
            Some(n) if n != 0 => n,
            _ => DEFAULT_GUESTS,
        }
    }

    /// Text shown in listings: the stored value, or the default when blank
    pub fn display_text(&self) -> String {
        match &self.0 {
            serde_json::Value::String(s) if !s.is_empty() => s.clone(),
            serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
            _ => DEFAULT_GUESTS.to_string(),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Stored `date` value, kept verbatim
///
/// Writers are not consistent: most store `YYYY-MM-DD`, some store a full
/// ISO-8601 timestamp. Only the civil date prefix is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDate(String);

impl BookingDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Civil date from the leading `YYYY-MM-DD`, ignoring any time or zone
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        let head = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(day: NaiveDate) -> Self {
        Self(day.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reservation record (预订)
///
/// Optional fields stay `None` when absent so saving never invents them.
/// Keys this struct does not know are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Free-form tag ("date", "party", ...), informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_category: Option<String>,
    /// Display label such as "Table 5"
    pub table_number: String,
    pub date: BookingDate,
    /// Wall-clock time, `HH:MM`
    pub time: String,
    /// `Some` whenever the key is present, `null` included
    #[serde(
        default,
        deserialize_with = "present_guests",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<GuestCount>,
    pub status: BookingStatus,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn present_guests<'de, D>(deserializer: D) -> Result<Option<GuestCount>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    GuestCount::deserialize(deserializer).map(Some)
}

impl Booking {
    /// Booking with only the required fields set
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        table_number: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        status: BookingStatus,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            customer_email: None,
            table_category: None,
            table_number: table_number.into(),
            date: date.into(),
            time: time.into(),
            guests: None,
            status,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_guests(mut self, guests: impl Into<serde_json::Value>) -> Self {
        self.guests = Some(GuestCount::new(guests));
        self
    }

    /// Guest count with the default applied
    pub fn guest_count(&self) -> i64 {
        self.guests
            .as_ref()
            .map(GuestCount::count)
            .unwrap_or(DEFAULT_GUESTS)
    }

    pub fn guests_display(&self) -> String {
        self.guests
            .as_ref()
            .map(GuestCount::display_text)
            .unwrap_or_else(|| DEFAULT_GUESTS.to_string())
    }

    pub fn day(&self) -> Option<NaiveDate> {
        self.date.day()
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == Some(day)
    }

    /// `date` + `time`, `None` if either cannot be parsed
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let day = self.day()?;
        parse_wall_time(&self.time).map(|t| day.and_time(t))
    }
}

/// Parse `HH:MM` (or `HH:MM:SS`)
pub fn parse_wall_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}
