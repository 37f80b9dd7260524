//! Business records fetched from the remote document store.
//!
//! # Responsibility
//! - Mirror the external schema shape (Spanish camelCase field names) so
//!   records decode without a mapping layer.
//! - Treat absent or malformed fields as empty/zero instead of failing the
//!   whole collection.
//!
//! # Invariants
//! - Every field is defaulted; a bare `{"id": "..."}` document decodes.
//! - Date fields degrade to `None` on unparseable input.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Customer master record (`clientes` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub nombre: String,
    pub razon_social: String,
    pub documento: String,
    pub ruc: String,
    pub dni: String,
}

impl Customer {
    /// Preferred display name, falling back to the legal name.
    pub fn display_name(&self) -> &str {
        first_non_empty(&[&self.nombre, &self.razon_social])
    }

    /// Tax/identity document, whichever variant the record carries.
    pub fn document_id(&self) -> &str {
        first_non_empty(&[&self.documento, &self.ruc, &self.dni])
    }
}

/// Product master record (`productos` collection).
///
/// `stock` and `stock_minimo` are whole units; the backend never stores
/// fractional stock for this catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub nombre: String,
    pub codigo: String,
    pub sku: String,
    pub stock: i64,
    pub stock_minimo: i64,
}

impl Product {
    /// Product code, falling back to the SKU.
    pub fn code(&self) -> &str {
        first_non_empty(&[&self.codigo, &self.sku])
    }
}

/// Quotation record (`cotizaciones` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quotation {
    pub id: String,
    pub numero: String,
    pub cliente: String,
    pub estado: String,
    pub total: f64,
    #[serde(with = "wire_date")]
    pub fecha_vencimiento: Option<OffsetDateTime>,
}

/// Completed or in-flight sale (`ventas` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub numero: String,
    pub cliente: String,
    pub estado: String,
    pub tipo_comprobante: String,
    pub total: f64,
    pub saldo_pendiente: f64,
    #[serde(with = "wire_date")]
    pub fecha_vencimiento: Option<OffsetDateTime>,
}

/// Credit/debit note (`notasCreditoDebito` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditNote {
    pub id: String,
    pub tipo: String,
    pub numero_comprobante: String,
    pub cliente: String,
    pub total: f64,
    #[serde(with = "wire_date")]
    pub fecha: Option<OffsetDateTime>,
}

/// Product warranty (`garantias` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Warranty {
    pub id: String,
    pub estado: String,
    pub producto_nombre: String,
    pub cliente: String,
    #[serde(with = "wire_date")]
    pub fecha_vencimiento: Option<OffsetDateTime>,
}

/// Supplier invoice (`facturasProveedores` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplierInvoice {
    pub id: String,
    pub numero: String,
    pub proveedor_nombre: String,
    pub estado: String,
    pub monto: f64,
    #[serde(with = "wire_date")]
    pub fecha_vencimiento: Option<OffsetDateTime>,
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Lenient (de)serialization for document-store date fields.
///
/// The backend stores RFC 3339 timestamps, but older records carry plain
/// `YYYY-MM-DD` strings. Anything else decodes as absent.
pub(crate) mod wire_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::Rfc3339;
    use time::macros::format_description;
    use time::{Date, OffsetDateTime};

    pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => {
                let text = ts.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    pub(crate) fn parse(raw: &str) -> Option<OffsetDateTime> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(ts) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Some(ts);
        }
        let date_only = format_description!("[year]-[month]-[day]");
        Date::parse(trimmed, &date_only)
            .ok()
            .map(|date| date.midnight().assume_utc())
    }
}
