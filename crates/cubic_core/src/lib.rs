//! Core domain logic for Cubic's navigation shell: global search ranking and
//! notification aggregation over a remote document store.
//! This crate is the single source of truth for both features' invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod source;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notification::{NotificationKind, NotificationRecord, Severity};
pub use model::record::{
    CreditNote, Customer, Product, Quotation, Sale, SupplierInvoice, Warranty,
};
pub use notify::center::{NotificationCenter, REFRESH_INTERVAL};
pub use notify::read_state::{ReadState, READ_STATE_KEY};
pub use search::catalog::{CatalogEntry, NAV_INDEX, POPULAR_SUGGESTIONS};
pub use search::ranker::{
    merge_results, normalize_query, search_catalog, search_records, QueryResult, RecordPool,
    ResultKind,
};
pub use search::recent::{RecentSearchEntry, RecentSearches, RECENT_LIMIT, RECENT_SEARCHES_KEY};
pub use search::session::{
    DisplayItem, SearchSession, SearchState, RECORD_SEARCH_DEBOUNCE,
};
pub use source::{CompanyDataSource, SourceError, SourceResult, StaticDataSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
