//! Search scoring and result merging.
//!
//! # Responsibility
//! - Score the static catalog and the fetched record pool against a query.
//! - Merge both result sets into one bounded, duplicate-free list.
//!
//! # Invariants
//! - A blank query never produces results.
//! - Catalog ties are broken by shorter label first.
//! - Merged output is capped at [`MERGED_LIMIT`] with `(path, label)` dedup.

use crate::model::record::{Customer, Product, Quotation, Sale};
use crate::search::catalog::CatalogEntry;
use serde::{Deserialize, Deserializer, Serialize};

/// Tuning constants. These caps mirror the product's current behavior and
/// are not contractual invariants.
pub const CATALOG_LIMIT: usize = 8;
pub const RECORD_LIMIT: usize = 5;
pub const MERGED_LIMIT: usize = 10;
pub const MIN_RECORD_QUERY_CHARS: usize = 2;

const SCORE_RECORD_PREFIX: u32 = 10;
const SCORE_RECORD_SUBSTRING: u32 = 5;
const SCORE_RECORD_DOCUMENT: u32 = 4;

/// Category of a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Page,
    Cliente,
    Producto,
    Cotizacion,
    Venta,
    Popular,
}

impl<'de> Deserialize<'de> for ResultKind {
    /// Unknown categories from older persisted entries fold into `Page`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "cliente" => Self::Cliente,
            "producto" => Self::Producto,
            "cotizacion" => Self::Cotizacion,
            "venta" => Self::Venta,
            "popular" => Self::Popular,
            _ => Self::Page,
        })
    }
}

/// One ranked search result. Ephemeral, recomputed per query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub path: String,
    pub label: String,
    pub sublabel: Option<String>,
    pub kind: ResultKind,
    pub score: u32,
}

/// The four remotely-fetched collections the record scorer searches.
#[derive(Debug, Clone, Default)]
pub struct RecordPool {
    pub clientes: Vec<Customer>,
    pub productos: Vec<Product>,
    pub cotizaciones: Vec<Quotation>,
    pub ventas: Vec<Sale>,
}

/// Trims and lowercases a raw query. Blank input yields `None`.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Scores the static catalog against a normalized query.
///
/// Tiered scoring: label prefix 100, label word prefix 80, keyword prefix 60,
/// label substring 40, concatenated-keyword substring 20. Zero-score entries
/// are dropped; ties sort shorter label first; top [`CATALOG_LIMIT`] kept.
pub fn search_catalog(catalog: &[CatalogEntry], query: &str) -> Vec<QueryResult> {
    let Some(q) = normalize_query(query) else {
        return Vec::new();
    };

    let mut scored: Vec<QueryResult> = catalog
        .iter()
        .filter_map(|entry| {
            let score = catalog_score(entry, &q);
            (score > 0).then(|| QueryResult {
                path: entry.path.to_string(),
                label: entry.label.to_string(),
                sublabel: None,
                kind: ResultKind::Page,
                score,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.label.chars().count().cmp(&b.label.chars().count()))
    });
    scored.truncate(CATALOG_LIMIT);
    scored
}

fn catalog_score(entry: &CatalogEntry, q: &str) -> u32 {
    let label = entry.label.to_lowercase();
    if label.starts_with(q) {
        100
    } else if label.split_whitespace().any(|word| word.starts_with(q)) {
        80
    } else if entry.keywords.iter().any(|keyword| keyword.starts_with(q)) {
        60
    } else if label.contains(q) {
        40
    } else if entry.keywords.join(" ").contains(q) {
        20
    } else {
        0
    }
}

/// Scores the fetched record pool against a normalized query.
///
/// Queries shorter than [`MIN_RECORD_QUERY_CHARS`] yield nothing; customer
/// and product matches score prefix over substring, quotation/sale matches
/// score flat. Top [`RECORD_LIMIT`] of the combined pool is kept.
pub fn search_records(pool: &RecordPool, query: &str) -> Vec<QueryResult> {
    let Some(q) = normalize_query(query) else {
        return Vec::new();
    };
    if q.chars().count() < MIN_RECORD_QUERY_CHARS {
        return Vec::new();
    }

    let mut results = Vec::new();

    for cliente in &pool.clientes {
        let nombre = cliente.display_name().to_lowercase();
        let documento = cliente.document_id().to_lowercase();
        if nombre.contains(&q) || documento.contains(&q) {
            results.push(QueryResult {
                path: "/clientes".to_string(),
                label: or_fallback(cliente.display_name(), "Cliente").to_string(),
                sublabel: non_empty(cliente.document_id()),
                kind: ResultKind::Cliente,
                score: prefix_or_substring(&nombre, &q),
            });
        }
    }

    for producto in &pool.productos {
        let nombre = producto.nombre.to_lowercase();
        let codigo = producto.code().to_lowercase();
        if nombre.contains(&q) || codigo.contains(&q) {
            results.push(QueryResult {
                path: "/productos".to_string(),
                label: or_fallback(&producto.nombre, "Producto").to_string(),
                sublabel: non_empty(producto.code()),
                kind: ResultKind::Producto,
                score: prefix_or_substring(&nombre, &q),
            });
        }
    }

    for cotizacion in &pool.cotizaciones {
        if cotizacion.cliente.to_lowercase().contains(&q) {
            results.push(QueryResult {
                path: "/ventas/cotizaciones".to_string(),
                label: format!(
                    "Cotización: {}",
                    or_fallback(&cotizacion.cliente, "Sin cliente")
                ),
                sublabel: non_empty(or_fallback(&cotizacion.numero, &cotizacion.id)),
                kind: ResultKind::Cotizacion,
                score: SCORE_RECORD_DOCUMENT,
            });
        }
    }

    for venta in &pool.ventas {
        if venta.cliente.to_lowercase().contains(&q) {
            results.push(QueryResult {
                path: "/ventas".to_string(),
                label: format!("Venta: {}", or_fallback(&venta.cliente, "Sin cliente")),
                sublabel: non_empty(or_fallback(&venta.numero, &venta.id)),
                kind: ResultKind::Venta,
                score: SCORE_RECORD_DOCUMENT,
            });
        }
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(RECORD_LIMIT);
    results
}

/// Appends record results to catalog results, skipping `(path, label)`
/// duplicates, capped at [`MERGED_LIMIT`].
pub fn merge_results(pages: Vec<QueryResult>, records: Vec<QueryResult>) -> Vec<QueryResult> {
    let mut merged = pages;
    for record in records {
        let duplicate = merged
            .iter()
            .any(|existing| existing.path == record.path && existing.label == record.label);
        if !duplicate {
            merged.push(record);
        }
    }
    merged.truncate(MERGED_LIMIT);
    merged
}

fn prefix_or_substring(field: &str, q: &str) -> u32 {
    if field.starts_with(q) {
        SCORE_RECORD_PREFIX
    } else {
        SCORE_RECORD_SUBSTRING
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
