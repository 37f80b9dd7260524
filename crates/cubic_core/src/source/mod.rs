//! Data-access contract for the remote document store.
//!
//! # Responsibility
//! - Define the read-only fetch surface the search and notification features
//!   depend on, keyed by company identifier.
//! - Isolate callers from how collections are stored or queried server side.
//!
//! # Invariants
//! - Implementations are read-only; nothing in this crate writes back.
//! - Fetch failures are reported as `SourceError`; callers decide whether to
//!   degrade to an empty collection.

use crate::model::record::{
    CreditNote, Customer, Product, Quotation, Sale, SupplierInvoice, Warranty,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure while fetching a collection from the backing store.
#[derive(Debug)]
pub enum SourceError {
    /// The backend could not be reached or rejected the request.
    Unavailable(String),
    /// The backend answered but the payload could not be decoded.
    Decode(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "data source unavailable: {detail}"),
            Self::Decode(detail) => write!(f, "undecodable collection payload: {detail}"),
        }
    }
}

impl Error for SourceError {}

/// Read-only fetch functions over the company-scoped business collections.
///
/// `Sync` is required so the aggregation layer can fan fetches out across
/// worker threads.
pub trait CompanyDataSource: Sync {
    fn customers(&self, company: &str) -> SourceResult<Vec<Customer>>;
    fn products(&self, company: &str) -> SourceResult<Vec<Product>>;
    fn quotations(&self, company: &str) -> SourceResult<Vec<Quotation>>;
    fn sales(&self, company: &str) -> SourceResult<Vec<Sale>>;
    fn credit_notes(&self, company: &str) -> SourceResult<Vec<CreditNote>>;
    fn warranties(&self, company: &str) -> SourceResult<Vec<Warranty>>;
    fn supplier_invoices(&self, company: &str) -> SourceResult<Vec<SupplierInvoice>>;
}

/// In-memory data source holding fixed collections.
///
/// Used by the CLI probe and by tests; production callers implement
/// [`CompanyDataSource`] over their own transport.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    pub clientes: Vec<Customer>,
    pub productos: Vec<Product>,
    pub cotizaciones: Vec<Quotation>,
    pub ventas: Vec<Sale>,
    pub notas: Vec<CreditNote>,
    pub garantias: Vec<Warranty>,
    pub facturas: Vec<SupplierInvoice>,
}

impl CompanyDataSource for StaticDataSource {
    fn customers(&self, _company: &str) -> SourceResult<Vec<Customer>> {
        Ok(self.clientes.clone())
    }

    fn products(&self, _company: &str) -> SourceResult<Vec<Product>> {
        Ok(self.productos.clone())
    }

    fn quotations(&self, _company: &str) -> SourceResult<Vec<Quotation>> {
        Ok(self.cotizaciones.clone())
    }

    fn sales(&self, _company: &str) -> SourceResult<Vec<Sale>> {
        Ok(self.ventas.clone())
    }

    fn credit_notes(&self, _company: &str) -> SourceResult<Vec<CreditNote>> {
        Ok(self.notas.clone())
    }

    fn warranties(&self, _company: &str) -> SourceResult<Vec<Warranty>> {
        Ok(self.garantias.clone())
    }

    fn supplier_invoices(&self, _company: &str) -> SourceResult<Vec<SupplierInvoice>> {
        Ok(self.facturas.clone())
    }
}
