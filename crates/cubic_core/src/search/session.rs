//! Search palette session: state machine, debounce and record cache.
//!
//! # Responsibility
//! - Drive the Closed / Open-Empty / Open-Results palette states from
//!   discrete input events.
//! - Run catalog scoring synchronously on every keystroke and record scoring
//!   behind a trailing debounce.
//! - Fetch the remote record pool at most once per session.
//!
//! # Invariants
//! - Callers supply `Instant`s; the session never reads the clock itself.
//! - A new keystroke reschedules the pending record search; dropping the
//!   session abandons it.
//! - Activation is the only event that records a recent-search entry.

use crate::search::catalog::{NAV_INDEX, POPULAR_SUGGESTIONS};
use crate::search::ranker::{
    merge_results, normalize_query, search_catalog, search_records, QueryResult, RecordPool,
    ResultKind, MIN_RECORD_QUERY_CHARS,
};
use crate::search::recent::{RecentSearchEntry, RecentSearches};
use crate::source::{CompanyDataSource, SourceResult};
use crate::storage::KeyValueStore;
use log::warn;
use once_cell::sync::OnceCell;
use std::time::{Duration, Instant};

/// Trailing delay between the last keystroke and the record search.
pub const RECORD_SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

/// Palette state as observed by the hosting shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Closed,
    OpenEmpty,
    OpenResults,
}

/// One row of the palette dropdown: a query result, a recent entry or a
/// popular suggestion, depending on the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub path: String,
    pub label: String,
    pub sublabel: Option<String>,
    pub kind: ResultKind,
}

/// Per-session cache of the remote record pool.
///
/// Filled on first use, invalidated only by [`SearchSession::reload`].
#[derive(Default)]
struct RecordCache {
    pool: OnceCell<RecordPool>,
}

impl RecordCache {
    fn get_or_fetch<D: CompanyDataSource>(&self, source: &D, company: &str) -> &RecordPool {
        self.pool.get_or_init(|| fetch_pool(source, company))
    }

    fn invalidate(&mut self) {
        self.pool.take();
    }
}

/// Interactive search session scoped to one signed-in company.
pub struct SearchSession<D: CompanyDataSource, S: KeyValueStore> {
    source: D,
    company: String,
    recent: RecentSearches<S>,
    cache: RecordCache,
    query: String,
    results: Vec<QueryResult>,
    selected: usize,
    open: bool,
    record_search_due: Option<Instant>,
}

impl<D: CompanyDataSource, S: KeyValueStore> SearchSession<D, S> {
    pub fn new(source: D, store: S, company: impl Into<String>) -> Self {
        Self {
            source,
            company: company.into(),
            recent: RecentSearches::load(store),
            cache: RecordCache::default(),
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            open: false,
            record_search_due: None,
        }
    }

    pub fn state(&self) -> SearchState {
        if !self.open {
            SearchState::Closed
        } else if self.display_items().is_empty() {
            SearchState::OpenEmpty
        } else {
            SearchState::OpenResults
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[QueryResult] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn recent_entries(&self) -> &[RecentSearchEntry] {
        self.recent.entries()
    }

    /// Opens the palette (input focus or the global activation shortcut).
    pub fn focus(&mut self) {
        self.open = true;
    }

    /// Closes the palette; the query is kept.
    pub fn escape(&mut self) {
        self.open = false;
    }

    /// Applies a keystroke: catalog results update immediately, the record
    /// search is (re)scheduled [`RECORD_SEARCH_DEBOUNCE`] from `now`.
    pub fn input(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.open = true;
        self.selected = 0;

        match normalize_query(&self.query) {
            Some(q) => {
                self.results = search_catalog(NAV_INDEX, &q);
                self.record_search_due = Some(now + RECORD_SEARCH_DEBOUNCE);
            }
            None => {
                self.results.clear();
                self.record_search_due = None;
            }
        }
    }

    /// Fires the debounced record search once its deadline has passed.
    /// Returns whether the result list was recomputed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.record_search_due {
            Some(due) if now >= due => {
                self.record_search_due = None;
                self.run_full_search();
                true
            }
            _ => false,
        }
    }

    /// Moves the selection down, wrapping past the end.
    pub fn arrow_down(&mut self) {
        let len = self.display_items().len();
        if self.open && len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Moves the selection up, wrapping past the start.
    pub fn arrow_up(&mut self) {
        let len = self.display_items().len();
        if self.open && len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Promotes the highlighted label into the query and re-runs the full
    /// search immediately. The palette stays open.
    pub fn tab(&mut self) {
        let items = self.display_items();
        if !self.open || items.is_empty() {
            return;
        }
        let index = self.selected.min(items.len() - 1);
        self.query = items[index].label.clone();
        self.record_search_due = None;
        self.run_full_search();
    }

    /// Activates the highlighted item: records it as a recent search, resets
    /// and closes the palette, and returns the destination path.
    ///
    /// With a closed palette (or an empty list) and a non-blank query, the
    /// best catalog hit is activated instead.
    pub fn activate(&mut self) -> Option<String> {
        let items = self.display_items();
        let chosen = if self.open && !items.is_empty() {
            items[self.selected.min(items.len() - 1)].clone()
        } else {
            let q = normalize_query(&self.query)?;
            let first = search_catalog(NAV_INDEX, &q).into_iter().next()?;
            DisplayItem {
                path: first.path,
                label: first.label,
                sublabel: first.sublabel,
                kind: first.kind,
            }
        };

        self.recent.record(RecentSearchEntry {
            path: chosen.path.clone(),
            label: chosen.label.clone(),
            kind: chosen.kind,
        });
        self.query.clear();
        self.results.clear();
        self.selected = 0;
        self.open = false;
        self.record_search_due = None;
        Some(chosen.path)
    }

    /// Rows currently shown: results for a non-blank query, otherwise recent
    /// searches, otherwise the popular suggestions.
    pub fn display_items(&self) -> Vec<DisplayItem> {
        if normalize_query(&self.query).is_some() {
            return self
                .results
                .iter()
                .map(|result| DisplayItem {
                    path: result.path.clone(),
                    label: result.label.clone(),
                    sublabel: result.sublabel.clone(),
                    kind: result.kind,
                })
                .collect();
        }
        if !self.recent.is_empty() {
            return self
                .recent
                .entries()
                .iter()
                .map(|entry| DisplayItem {
                    path: entry.path.clone(),
                    label: entry.label.clone(),
                    sublabel: None,
                    kind: entry.kind,
                })
                .collect();
        }
        POPULAR_SUGGESTIONS
            .iter()
            .map(|(path, label)| DisplayItem {
                path: (*path).to_string(),
                label: (*label).to_string(),
                sublabel: None,
                kind: ResultKind::Popular,
            })
            .collect()
    }

    /// Drops one recent-search entry by path.
    pub fn remove_recent(&mut self, path: &str) {
        self.recent.remove(path);
    }

    /// Clears the whole recent-search history.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Discards the cached record pool; the next record search refetches.
    pub fn reload(&mut self) {
        self.cache.invalidate();
    }

    fn run_full_search(&mut self) {
        let Some(q) = normalize_query(&self.query) else {
            self.results.clear();
            return;
        };
        let pages = search_catalog(NAV_INDEX, &q);
        let records = if q.chars().count() >= MIN_RECORD_QUERY_CHARS {
            let pool = self.cache.get_or_fetch(&self.source, &self.company);
            search_records(pool, &q)
        } else {
            Vec::new()
        };
        self.results = merge_results(pages, records);
    }
}

fn fetch_pool<D: CompanyDataSource>(source: &D, company: &str) -> RecordPool {
    let ((clientes, productos), (cotizaciones, ventas)) = rayon::join(
        || {
            rayon::join(
                || collection_or_empty("clientes", source.customers(company)),
                || collection_or_empty("productos", source.products(company)),
            )
        },
        || {
            rayon::join(
                || collection_or_empty("cotizaciones", source.quotations(company)),
                || collection_or_empty("ventas", source.sales(company)),
            )
        },
    );
    RecordPool {
        clientes,
        productos,
        cotizaciones,
        ventas,
    }
}

fn collection_or_empty<T>(name: &str, fetched: SourceResult<Vec<T>>) -> Vec<T> {
    match fetched {
        Ok(records) => records,
        Err(err) => {
            warn!("event=record_fetch module=search status=error collection={name} error={err}");
            Vec::new()
        }
    }
}
