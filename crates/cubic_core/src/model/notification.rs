//! Derived notification record and severity taxonomy.
//!
//! # Responsibility
//! - Define the unified record produced by the six notification derivations.
//! - Keep notification identifiers deterministic so the persisted read set
//!   can be matched against freshly recomputed records.
//!
//! # Invariants
//! - `NotificationRecord::id` is derived from source kind + record id, never
//!   random, and stable across reloads.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use time::OffsetDateTime;

/// Visual urgency of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{tag}")
    }
}

/// Business source a notification was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Credit note issued for a return.
    Devolucion,
    /// Warranty close to its expiry date.
    Garantia,
    /// Receivable past its due date.
    CuentaPorCobrar,
    /// Supplier invoice past its due date.
    CuentaPorPagar,
    /// Quotation close to its expiry date.
    Cotizacion,
    /// Product at or below its reorder threshold.
    Stock,
}

impl NotificationKind {
    /// Identifier prefix; combined with the source record id this yields the
    /// stable notification identifier.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Devolucion => "devolucion",
            Self::Garantia => "garantia",
            Self::CuentaPorCobrar => "cxc",
            Self::CuentaPorPagar => "cxp",
            Self::Cotizacion => "cotizacion",
            Self::Stock => "stock",
        }
    }

    /// Builds the deterministic notification identifier for a source record.
    pub fn record_id(self, source_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), source_id)
    }
}

/// One entry of the unified notification feed.
///
/// Records are recomputed from source data on every refresh; only the `read`
/// flag carries user state, overlaid from the persisted read set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub amount: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub link: Option<String>,
    pub severity: Severity,
    pub read: bool,
}
