//! Bookings: storage access, listing, filtering and status changes

pub mod filter;
pub mod listing;
pub mod repository;
pub mod seed;
pub mod transition;

pub use filter::{BookingFilter, StatusFilter, format_filter_date};
pub use listing::{booking_row, booking_rows};
pub use repository::BookingRepository;
pub use seed::default_bookings;
pub use transition::{TransitionError, TransitionOutcome, TransitionResult, is_allowed};
