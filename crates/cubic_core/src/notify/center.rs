//! Unified notification feed.
//!
//! # Responsibility
//! - Fan the six source derivations out, join them into one feed sorted by
//!   occurrence date, and overlay the persisted read state.
//! - Apply the periodic-refresh policy tied to the company context.
//!
//! # Invariants
//! - One failed derivation degrades to an empty batch; the refresh itself
//!   never fails.
//! - `mark_read`/`mark_all_read` touch in-memory state and storage only,
//!   never the data source.

use crate::model::notification::NotificationRecord;
use crate::notify::read_state::ReadState;
use crate::notify::sources::{
    expiring_quotations, expiring_warranties, low_stock_products, overdue_payables,
    overdue_receivables, recent_returns,
};
use crate::source::{CompanyDataSource, SourceResult};
use crate::storage::KeyValueStore;
use log::{info, warn};
use rayon::prelude::*;
use time::{Duration, OffsetDateTime};

/// Feed recomputation interval while a company context is active.
pub const REFRESH_INTERVAL: Duration = Duration::minutes(5);

type Derivation<'a> = Box<dyn Fn() -> SourceResult<Vec<NotificationRecord>> + Send + Sync + 'a>;

/// Aggregated notification feed for one data source.
pub struct NotificationCenter<D: CompanyDataSource, S: KeyValueStore> {
    source: D,
    read_state: ReadState<S>,
    notifications: Vec<NotificationRecord>,
    last_refresh: Option<OffsetDateTime>,
}

impl<D: CompanyDataSource, S: KeyValueStore> NotificationCenter<D, S> {
    pub fn new(source: D, store: S) -> Self {
        Self {
            source,
            read_state: ReadState::load(store),
            notifications: Vec::new(),
            last_refresh: None,
        }
    }

    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Recomputes the whole feed from source data.
    ///
    /// The six derivations are fetched and evaluated concurrently; a failing
    /// one is logged and substituted with an empty batch. The merged feed is
    /// sorted by occurrence date descending and the persisted read set is
    /// overlaid by identifier.
    pub fn refresh(&mut self, company: &str, now: OffsetDateTime) {
        let source = &self.source;
        let derivations: Vec<(&'static str, Derivation<'_>)> = vec![
            (
                "devoluciones",
                Box::new(move || Ok(recent_returns(&source.credit_notes(company)?, now))),
            ),
            (
                "garantias",
                Box::new(move || Ok(expiring_warranties(&source.warranties(company)?, now))),
            ),
            (
                "cuentas_por_cobrar",
                Box::new(move || Ok(overdue_receivables(&source.sales(company)?, now))),
            ),
            (
                "cuentas_por_pagar",
                Box::new(move || Ok(overdue_payables(&source.supplier_invoices(company)?, now))),
            ),
            (
                "cotizaciones",
                Box::new(move || Ok(expiring_quotations(&source.quotations(company)?, now))),
            ),
            (
                "stock",
                Box::new(move || Ok(low_stock_products(&source.products(company)?, now))),
            ),
        ];

        let batches: Vec<Vec<NotificationRecord>> = derivations
            .par_iter()
            .map(|(name, derive)| match derive() {
                Ok(batch) => batch,
                Err(err) => {
                    warn!(
                        "event=notify_source module=notify status=error source={name} error={err}"
                    );
                    Vec::new()
                }
            })
            .collect();

        let mut feed: Vec<NotificationRecord> = batches.into_iter().flatten().collect();
        feed.sort_by(|a, b| b.date.cmp(&a.date));
        for notification in &mut feed {
            notification.read = self.read_state.contains(&notification.id);
        }

        info!(
            "event=notify_refresh module=notify status=ok company={company} total={} unread={}",
            feed.len(),
            feed.iter().filter(|n| !n.read).count()
        );
        self.notifications = feed;
        self.last_refresh = Some(now);
    }

    /// Periodic-refresh driver. Refreshes when a company context is present
    /// and none happened within [`REFRESH_INTERVAL`]; an absent company
    /// clears the schedule so the next context starts fresh. Returns whether
    /// a refresh ran.
    pub fn tick(&mut self, company: Option<&str>, now: OffsetDateTime) -> bool {
        let Some(company) = company else {
            self.last_refresh = None;
            return false;
        };
        let due = self
            .last_refresh
            .map_or(true, |last| now - last >= REFRESH_INTERVAL);
        if due {
            self.refresh(company, now);
        }
        due
    }

    /// Marks one notification read and persists the read set. No refetch.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        {
            notification.read = true;
        }
        self.persist_read_ids();
    }

    /// Marks the whole feed read and persists every identifier. No refetch.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.persist_read_ids();
    }

    fn persist_read_ids(&mut self) {
        let ids: Vec<String> = self
            .notifications
            .iter()
            .filter(|notification| notification.read)
            .map(|notification| notification.id.clone())
            .collect();
        self.read_state.replace(ids);
    }
}
