//! Data models
//!
//! Stored records (`Booking`, `StaffProfile`) keep the camelCase JSON field
//! names of the persisted collection. View models are produced by the
//! dashboard core and never stored.

pub mod booking;
pub mod dashboard;
pub mod dining_table;
pub mod staff;

// Re-exports
pub use booking::*;
pub use dashboard::*;
pub use dining_table::*;
pub use staff::*;
