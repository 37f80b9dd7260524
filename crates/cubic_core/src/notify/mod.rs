//! Notification aggregation feature.
//!
//! # Responsibility
//! - Derive per-source notifications from the business collections.
//! - Merge them into one time-sorted feed with persisted read state.

pub mod center;
pub mod read_state;
pub mod sources;
pub mod window;
