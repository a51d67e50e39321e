//! Demo bookings shown when the store holds nothing usable

use chrono::{Days, NaiveDate};
use shared::models::{Booking, BookingStatus};

/// Five bookings: ids "1".."5", four on `today`, one on the day before
pub fn default_bookings(today: NaiveDate) -> Vec<Booking> {
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);

    vec![
        seed_booking(
            "1",
            "John Anderson",
            "john@example.com",
            "date",
            "Table 5",
            today,
            "13:30",
            "4",
            BookingStatus::Ongoing,
        ),
        seed_booking(
            "2",
            "Sarah Mitchell",
            "sarah@example.com",
            "date",
            "Table 4",
            today,
            "14:00",
            "2",
            BookingStatus::Confirmed,
        ),
        seed_booking(
            "3",
            "Michael Roberts",
            "michael@example.com",
            "party",
            "Table 8",
            today,
            "18:30",
            "6",
            BookingStatus::Confirmed,
        ),
        seed_booking(
            "4",
            "Emma Thompson",
            "emma@example.com",
            "celebration",
            "Table 15",
            today,
            "19:00",
            "4",
            BookingStatus::Confirmed,
        ),
        seed_booking(
            "5",
            "David Wilson",
            "david@example.com",
            "date",
            "Table 2",
            yesterday,
            "19:30",
            "2",
            BookingStatus::Completed,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_booking(
    id: &str,
    customer_name: &str,
    customer_email: &str,
    table_category: &str,
    table_number: &str,
    date: NaiveDate,
    time: &str,
    guests: &str,
    status: BookingStatus,
) -> Booking {
    Booking {
        customer_email: Some(customer_email.to_string()),
        table_category: Some(table_category.to_string()),
        ..Booking::new(id, customer_name, table_number, date, time, status)
    }
    .with_guests(guests)
}
