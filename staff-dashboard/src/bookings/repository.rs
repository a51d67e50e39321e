//! Booking Repository
//!
//! Reads and writes the whole booking collection under [`BOOKINGS_KEY`].
//! Reads never fail: anything unusable degrades to the seed set.

use std::sync::Arc;

use serde_json::Value;
use shared::models::Booking;

use super::seed::default_bookings;
use crate::store::{BOOKINGS_KEY, KeyValueStore, StoreResult};
use crate::utils::Clock;

/// Stored collection as raw JSON records
pub(super) enum StoredBookings {
    /// Key absent or `[]`
    Missing,
    Records(Vec<Value>),
    /// Read failed or the value is not a JSON array
    Unreadable,
}

#[derive(Clone)]
pub struct BookingRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl BookingRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Load the collection in stored order
    ///
    /// Records are parsed one by one; a record that cannot be read is skipped.
    /// Missing, empty, or unparsable data (and backend read errors) yield the
    /// seed set, as does an array with no readable record. The seed is not
    /// written back.
    pub fn load(&self) -> Vec<Booking> {
        let records = match self.read_stored() {
            StoredBookings::Records(records) => records,
            StoredBookings::Missing | StoredBookings::Unreadable => return self.defaults(),
        };

        let total = records.len();
        let bookings: Vec<Booking> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(booking) => Some(booking),
                Err(e) => {
                    tracing::warn!(index, "Skipping unreadable booking record: {}", e);
                    None
                }
            })
            .collect();

        if bookings.is_empty() {
            tracing::warn!(total, "No readable booking records, using defaults");
            return self.defaults();
        }
        bookings
    }

    /// Overwrite the stored collection in one write
    pub fn save(&self, bookings: &[Booking]) -> StoreResult<()> {
        let json = serde_json::to_string(bookings)?;
        self.store.put(BOOKINGS_KEY, &json)?;
        tracing::info!(count = bookings.len(), "Bookings saved");
        Ok(())
    }

    /// Overwrite the stored collection with raw records
    pub(super) fn save_records(&self, records: &[Value]) -> StoreResult<()> {
        let json = serde_json::to_string(records)?;
        self.store.put(BOOKINGS_KEY, &json)?;
        tracing::info!(count = records.len(), "Bookings saved");
        Ok(())
    }

    pub(super) fn read_stored(&self) -> StoredBookings {
        let raw = match self.store.get(BOOKINGS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read bookings, using defaults: {}", e);
                return StoredBookings::Unreadable;
            }
        };

        let Some(raw) = raw else {
            tracing::debug!("No stored bookings, using defaults");
            return StoredBookings::Missing;
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) if records.is_empty() => {
                tracing::debug!("Stored bookings empty, using defaults");
                StoredBookings::Missing
            }
            Ok(records) => StoredBookings::Records(records),
            Err(e) => {
                tracing::warn!("Stored bookings unparsable, using defaults: {}", e);
                StoredBookings::Unreadable
            }
        }
    }

    pub(super) fn defaults(&self) -> Vec<Booking> {
        default_bookings(self.clock.today())
    }
}
