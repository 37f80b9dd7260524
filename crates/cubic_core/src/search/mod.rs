//! Global search-and-navigate feature.
//!
//! # Responsibility
//! - Rank navigable destinations and business records against free text.
//! - Track the bounded recent-search history.
//! - Drive the open/selection state machine used by the search palette.

pub mod catalog;
pub mod ranker;
pub mod recent;
pub mod session;
