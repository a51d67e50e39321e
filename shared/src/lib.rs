//! Shared types for the staff dashboard
//!
//! Plain data exchanged between the dashboard core and the rendering layer:
//! booking records, dining tables, staff identity and the computed view
//! models. No I/O lives here.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
