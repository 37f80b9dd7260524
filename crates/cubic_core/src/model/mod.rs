//! Domain models shared across search and notification features.
//!
//! # Responsibility
//! - Define the loosely-typed business records fetched from the document
//!   store, with wire-faithful field names.
//! - Define the derived notification record and its severity taxonomy.

pub mod notification;
pub mod record;
