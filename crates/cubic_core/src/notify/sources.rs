//! Per-source notification derivations.
//!
//! # Responsibility
//! - Turn each business collection into notification records according to
//!   its inclusion window and severity rule.
//!
//! # Invariants
//! - Derivations are pure over `(records, now)`; identical input yields an
//!   identical batch, so the feed recomputes idempotently.
//! - Records without the relevant date are skipped, never defaulted.
//! - Every batch leaves `read = false`; read state is overlaid later.

use crate::model::notification::{NotificationKind, NotificationRecord, Severity};
use crate::model::record::{CreditNote, Product, Quotation, Sale, SupplierInvoice, Warranty};
use crate::notify::window::{days_overdue, days_until};
use time::OffsetDateTime;

/// Tuning constants for the inclusion windows and caps. Mirrors the shipped
/// product behavior; not contractual invariants.
pub const RETURN_WINDOW_DAYS: i64 = 7;
pub const WARRANTY_WINDOW_DAYS: i64 = 30;
pub const WARRANTY_URGENT_DAYS: i64 = 7;
pub const QUOTATION_WINDOW_DAYS: i64 = 7;
pub const QUOTATION_URGENT_DAYS: i64 = 3;
pub const OVERDUE_ERROR_DAYS: i64 = 30;
pub const OVERDUE_CAP: usize = 10;
pub const LOW_STOCK_CAP: usize = 10;

/// Credit notes issued within the trailing week, reported as returns.
pub fn recent_returns(notas: &[CreditNote], now: OffsetDateTime) -> Vec<NotificationRecord> {
    let today = now.date();
    notas
        .iter()
        .filter_map(|nota| {
            if nota.tipo != "credito" {
                return None;
            }
            let fecha = nota.fecha?;
            let age = days_overdue(today, fecha.date());
            if !(0..=RETURN_WINDOW_DAYS).contains(&age) {
                return None;
            }
            Some(NotificationRecord {
                id: NotificationKind::Devolucion.record_id(&nota.id),
                kind: NotificationKind::Devolucion,
                title: "Devolución Procesada".to_string(),
                message: format!(
                    "Nota de Crédito {} por {}",
                    or_fallback(&nota.numero_comprobante, &nota.id),
                    or_fallback(&nota.cliente, "Cliente")
                ),
                amount: Some(nota.total),
                date: fecha,
                link: Some("/ventas/notas".to_string()),
                severity: Severity::Info,
                read: false,
            })
        })
        .collect()
}

/// Active warranties expiring within the next thirty days.
pub fn expiring_warranties(garantias: &[Warranty], now: OffsetDateTime) -> Vec<NotificationRecord> {
    let today = now.date();
    garantias
        .iter()
        .filter_map(|garantia| {
            if garantia.estado != "activa" {
                return None;
            }
            let vencimiento = garantia.fecha_vencimiento?;
            let restantes = days_until(today, vencimiento.date());
            if !(0..=WARRANTY_WINDOW_DAYS).contains(&restantes) {
                return None;
            }
            let title = if restantes == 0 {
                "Garantía Vence Hoy"
            } else if restantes <= WARRANTY_URGENT_DAYS {
                "Garantía Por Vencer Pronto"
            } else {
                "Garantía Por Vencer"
            };
            Some(NotificationRecord {
                id: NotificationKind::Garantia.record_id(&garantia.id),
                kind: NotificationKind::Garantia,
                title: title.to_string(),
                message: format!(
                    "Garantía de {} vence en {} día(s)",
                    or_fallback(&garantia.producto_nombre, "Producto"),
                    restantes
                ),
                amount: None,
                date: vencimiento,
                link: Some("/ventas/garantias".to_string()),
                severity: if restantes <= WARRANTY_URGENT_DAYS {
                    Severity::Warning
                } else {
                    Severity::Info
                },
                read: false,
            })
        })
        .collect()
}

/// Completed sales with an outstanding balance past their due date,
/// capped to the [`OVERDUE_CAP`] most overdue.
pub fn overdue_receivables(ventas: &[Sale], now: OffsetDateTime) -> Vec<NotificationRecord> {
    let today = now.date();
    let mut vencidas: Vec<(i64, &Sale)> = ventas
        .iter()
        .filter_map(|venta| {
            if venta.estado != "Completada" || venta.saldo_pendiente <= 0.0 {
                return None;
            }
            let vencimiento = venta.fecha_vencimiento?;
            let dias = days_overdue(today, vencimiento.date());
            // The due day itself is not overdue yet.
            (dias > 0).then_some((dias, venta))
        })
        .collect();
    vencidas.sort_by(|a, b| b.0.cmp(&a.0));
    vencidas.truncate(OVERDUE_CAP);

    vencidas
        .into_iter()
        .map(|(dias, venta)| NotificationRecord {
            id: NotificationKind::CuentaPorCobrar.record_id(&venta.id),
            kind: NotificationKind::CuentaPorCobrar,
            title: "Cuenta Por Cobrar Vencida".to_string(),
            message: format!(
                "{} - {} vencida hace {} día(s)",
                or_fallback(&venta.cliente, "Cliente"),
                or_fallback(&venta.tipo_comprobante, &venta.id),
                dias
            ),
            amount: Some(venta.saldo_pendiente),
            date: venta.fecha_vencimiento.unwrap_or(now),
            link: Some("/finanzas/cuentas-cobrar".to_string()),
            severity: if dias > OVERDUE_ERROR_DAYS {
                Severity::Error
            } else {
                Severity::Warning
            },
            read: false,
        })
        .collect()
}

/// Unpaid supplier invoices past their due date, capped to the
/// [`OVERDUE_CAP`] most overdue.
pub fn overdue_payables(
    facturas: &[SupplierInvoice],
    now: OffsetDateTime,
) -> Vec<NotificationRecord> {
    let today = now.date();
    let mut vencidas: Vec<(i64, &SupplierInvoice)> = facturas
        .iter()
        .filter_map(|factura| {
            if factura.estado == "pagado" {
                return None;
            }
            let vencimiento = factura.fecha_vencimiento?;
            let dias = days_overdue(today, vencimiento.date());
            (dias > 0).then_some((dias, factura))
        })
        .collect();
    vencidas.sort_by(|a, b| b.0.cmp(&a.0));
    vencidas.truncate(OVERDUE_CAP);

    vencidas
        .into_iter()
        .map(|(dias, factura)| NotificationRecord {
            id: NotificationKind::CuentaPorPagar.record_id(&factura.id),
            kind: NotificationKind::CuentaPorPagar,
            title: "Cuenta Por Pagar Vencida".to_string(),
            message: format!(
                "{} - Factura {} vencida hace {} día(s)",
                or_fallback(&factura.proveedor_nombre, "Proveedor"),
                or_fallback(&factura.numero, &factura.id),
                dias
            ),
            amount: Some(factura.monto),
            date: factura.fecha_vencimiento.unwrap_or(now),
            link: Some("/finanzas/cuentas-pagar".to_string()),
            severity: if dias > OVERDUE_ERROR_DAYS {
                Severity::Error
            } else {
                Severity::Warning
            },
            read: false,
        })
        .collect()
}

/// Pending or sent quotations expiring within the next week.
pub fn expiring_quotations(
    cotizaciones: &[Quotation],
    now: OffsetDateTime,
) -> Vec<NotificationRecord> {
    let today = now.date();
    cotizaciones
        .iter()
        .filter_map(|cotizacion| {
            if cotizacion.estado != "Pendiente" && cotizacion.estado != "Enviada" {
                return None;
            }
            let vencimiento = cotizacion.fecha_vencimiento?;
            let restantes = days_until(today, vencimiento.date());
            if !(0..=QUOTATION_WINDOW_DAYS).contains(&restantes) {
                return None;
            }
            let title = if restantes == 0 {
                "Cotización Vence Hoy"
            } else {
                "Cotización Por Vencer"
            };
            Some(NotificationRecord {
                id: NotificationKind::Cotizacion.record_id(&cotizacion.id),
                kind: NotificationKind::Cotizacion,
                title: title.to_string(),
                message: format!(
                    "Cotización {} de {} vence en {} día(s)",
                    or_fallback(&cotizacion.numero, &cotizacion.id),
                    or_fallback(&cotizacion.cliente, "Cliente"),
                    restantes
                ),
                amount: Some(cotizacion.total),
                date: vencimiento,
                link: Some("/ventas/cotizaciones".to_string()),
                severity: if restantes <= QUOTATION_URGENT_DAYS {
                    Severity::Warning
                } else {
                    Severity::Info
                },
                read: false,
            })
        })
        .collect()
}

/// Products at or below their reorder threshold, first [`LOW_STOCK_CAP`]
/// in catalog order. Exhausted stock is an error, anything else a warning.
pub fn low_stock_products(productos: &[Product], now: OffsetDateTime) -> Vec<NotificationRecord> {
    productos
        .iter()
        .filter(|producto| producto.stock_minimo > 0 && producto.stock <= producto.stock_minimo)
        .take(LOW_STOCK_CAP)
        .map(|producto| NotificationRecord {
            id: NotificationKind::Stock.record_id(&producto.id),
            kind: NotificationKind::Stock,
            title: "Stock Bajo".to_string(),
            message: format!(
                "{} tiene stock bajo ({} unidades)",
                or_fallback(&producto.nombre, "Producto"),
                producto.stock
            ),
            amount: None,
            date: now,
            link: Some("/inventarios".to_string()),
            severity: if producto.stock == 0 {
                Severity::Error
            } else {
                Severity::Warning
            },
            read: false,
        })
        .collect()
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
