//! Staff identity access
//!
//! The identity is written by the login flow; the dashboard only reads it
//! for the greeting and clears it on sign-out.

use std::sync::Arc;

use shared::models::{StaffGreeting, StaffProfile};

use crate::store::{KeyValueStore, STAFF_KEY, StoreResult};

#[derive(Clone)]
pub struct StaffRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StaffRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Signed-in profile; `None` when absent or unreadable
    pub fn profile(&self) -> Option<StaffProfile> {
        let raw = match self.store.get(STAFF_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read staff identity: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("Error loading staff info: {}", e);
                None
            }
        }
    }

    pub fn greeting(&self) -> StaffGreeting {
        StaffGreeting::from_profile(self.profile().as_ref())
    }

    /// Forget the signed-in identity; navigation is up to the caller
    pub fn sign_out(&self) -> StoreResult<()> {
        self.store.remove(STAFF_KEY)?;
        tracing::info!("Staff signed out");
        Ok(())
    }
}
