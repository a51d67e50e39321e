//! Booking status transitions
//!
//! ```text
//! confirmed ──► ongoing ──► completed
//! upcoming, cancelled: no transitions
//! ```
//!
//! The precondition is checked here, not by the caller: a rejected
//! transition leaves the stored collection untouched.
//!
//! Transitions edit the stored JSON records directly and only rewrite the
//! target's `status`; every other record and field is written back as read.

use serde_json::Value;
use shared::models::{Booking, BookingStatus};
use thiserror::Error;

use super::BookingRepository;
use super::repository::StoredBookings;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Cannot move booking {id} from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Booking {id} cannot be read")]
    UnreadableRecord { id: String },

    /// Stored data exists but cannot be read; it is never overwritten
    #[error("Stored bookings cannot be read")]
    UnreadableStore,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type TransitionResult<T> = Result<T, TransitionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    /// No booking with that id; nothing was written
    NotFound,
}

/// Whether `from -> to` is an allowed lifecycle step
pub fn is_allowed(from: BookingStatus, to: BookingStatus) -> bool {
    matches!(
        (from, to),
        (BookingStatus::Confirmed, BookingStatus::Ongoing)
            | (BookingStatus::Ongoing, BookingStatus::Completed)
    )
}

impl BookingRepository {
    /// Mark an ongoing booking as completed and persist the collection
    pub fn complete_booking(&self, booking_id: &str) -> TransitionResult<TransitionOutcome> {
        self.apply_transition(booking_id, BookingStatus::Completed)
    }

    /// Seat a confirmed booking (`confirmed -> ongoing`)
    pub fn seat_booking(&self, booking_id: &str) -> TransitionResult<TransitionOutcome> {
        self.apply_transition(booking_id, BookingStatus::Ongoing)
    }

    fn apply_transition(
        &self,
        booking_id: &str,
        to: BookingStatus,
    ) -> TransitionResult<TransitionOutcome> {
        let mut records = match self.read_stored() {
            StoredBookings::Records(records) => records,
            StoredBookings::Missing => self
                .defaults()
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()
                .map_err(StoreError::from)?,
            StoredBookings::Unreadable => {
                tracing::warn!(booking_id, "Stored bookings unreadable, refusing to write");
                return Err(TransitionError::UnreadableStore);
            }
        };

        let Some(record) = records
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(booking_id))
        else {
            tracing::debug!(booking_id, "Transition target not found, ignoring");
            return Ok(TransitionOutcome::NotFound);
        };

        let from = match serde_json::from_value::<Booking>(record.clone()) {
            Ok(booking) => booking.status,
            Err(e) => {
                tracing::warn!(booking_id, "Transition target unreadable: {}", e);
                return Err(TransitionError::UnreadableRecord {
                    id: booking_id.to_string(),
                });
            }
        };
        if !is_allowed(from, to) {
            tracing::warn!(booking_id, %from, %to, "Rejected booking transition");
            return Err(TransitionError::InvalidTransition {
                id: booking_id.to_string(),
                from,
                to,
            });
        }

        if let Some(fields) = record.as_object_mut() {
            fields.insert("status".to_string(), Value::from(to.as_str()));
        }
        self.save_records(&records)?;
        tracing::info!(booking_id, %from, %to, "Booking status changed");
        Ok(TransitionOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BOOKINGS_KEY, KeyValueStore, MemoryStore};
    use crate::utils::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryStore>, BookingRepository) {
        let store = Arc::new(MemoryStore::new());
        let now = NaiveDate::from_ymd_opt(2025, 1, 5)
            .and_then(|d| d.and_hms_opt(13, 31, 0))
            .unwrap();
        let repo = BookingRepository::new(store.clone(), Arc::new(FixedClock(now)));
        (store, repo)
    }

    #[test]
    fn test_transition_table() {
        use BookingStatus::*;
        assert!(is_allowed(Confirmed, Ongoing));
        assert!(is_allowed(Ongoing, Completed));
        assert!(!is_allowed(Confirmed, Completed));
        assert!(!is_allowed(Completed, Ongoing));
        for to in BookingStatus::ALL {
            assert!(!is_allowed(Cancelled, to));
            assert!(!is_allowed(Upcoming, to));
        }
    }

    #[test]
    fn test_complete_changes_only_target_status() {
        let (_store, repo) = setup();
        let before = repo.load();

        assert_eq!(repo.complete_booking("1").unwrap(), TransitionOutcome::Applied);

        let after = repo.load();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].status, BookingStatus::Completed);
        let mut expected = before[0].clone();
        expected.status = BookingStatus::Completed;
        assert_eq!(after[0], expected);
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (store, repo) = setup();
        assert_eq!(repo.complete_booking("999").unwrap(), TransitionOutcome::NotFound);
        assert_eq!(store.get(BOOKINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_non_ongoing_is_rejected_without_write() {
        let (store, repo) = setup();
        let err = repo.complete_booking("2").unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InvalidTransition {
                from: BookingStatus::Confirmed,
                to: BookingStatus::Completed,
                ..
            }
        ));
        assert_eq!(store.get(BOOKINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_seat_then_complete() {
        let (_store, repo) = setup();
        assert_eq!(repo.seat_booking("2").unwrap(), TransitionOutcome::Applied);
        assert_eq!(repo.complete_booking("2").unwrap(), TransitionOutcome::Applied);
        assert!(repo.seat_booking("2").is_err());
        assert_eq!(repo.load()[1].status, BookingStatus::Completed);
    }

    fn stored(store: &MemoryStore) -> serde_json::Value {
        serde_json::from_str(&store.get(BOOKINGS_KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_complete_keeps_unknown_fields_on_every_record() {
        let (store, repo) = setup();
        let raw = serde_json::json!([
            {
                "id": "1", "customerName": "A", "customerEmail": "a@example.com",
                "tableCategory": "date", "tableNumber": "Table 5", "date": "2025-01-05",
                "time": "13:30", "guests": "4", "status": "ongoing",
                "phone": "555-1234", "specialRequests": "window"
            },
            {
                "id": "2", "customerName": "B", "tableNumber": "Table 6",
                "date": "2025-01-05", "time": "14:00", "guests": null,
                "status": "confirmed", "createdAt": "2025-01-01T10:00:00Z"
            },
            { "id": "3", "note": "written by another tool" }
        ]);
        store.put(BOOKINGS_KEY, &raw.to_string()).unwrap();

        assert_eq!(repo.complete_booking("1").unwrap(), TransitionOutcome::Applied);

        let mut expected = raw.clone();
        expected[0]["status"] = "completed".into();
        assert_eq!(stored(&store), expected);
    }

    #[test]
    fn test_iso_dated_record_is_not_replaced_by_seed() {
        let (store, repo) = setup();
        let raw = serde_json::json!([{
            "id": "77", "customerName": "Lin", "tableNumber": "Table 2",
            "date": "2025-01-05T00:00:00.000Z", "time": "12:00", "status": "ongoing"
        }]);
        store.put(BOOKINGS_KEY, &raw.to_string()).unwrap();

        let ids: Vec<String> = repo.load().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, ["77"]);

        assert_eq!(repo.complete_booking("1").unwrap(), TransitionOutcome::NotFound);
        assert_eq!(stored(&store), raw);

        assert_eq!(repo.complete_booking("77").unwrap(), TransitionOutcome::Applied);
        assert_eq!(stored(&store)[0]["date"], "2025-01-05T00:00:00.000Z");
        assert_eq!(stored(&store)[0]["status"], "completed");
    }

    #[test]
    fn test_unreadable_store_is_never_overwritten() {
        let (store, repo) = setup();
        store.put(BOOKINGS_KEY, "[{\"id\": 1").unwrap();

        assert_eq!(repo.load().len(), 5);
        assert!(matches!(
            repo.complete_booking("1"),
            Err(TransitionError::UnreadableStore)
        ));
        assert_eq!(store.get(BOOKINGS_KEY).unwrap().as_deref(), Some("[{\"id\": 1"));
    }

    #[test]
    fn test_unreadable_target_is_rejected() {
        let (store, repo) = setup();
        let raw = r#"[{"id":"9","status":"ongoing"}]"#;
        store.put(BOOKINGS_KEY, raw).unwrap();

        assert!(matches!(
            repo.complete_booking("9"),
            Err(TransitionError::UnreadableRecord { .. })
        ));
        assert_eq!(store.get(BOOKINGS_KEY).unwrap().as_deref(), Some(raw));
    }
}
