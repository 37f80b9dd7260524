//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `cubic_core` search and notification flows against a fixed
//!   in-memory dataset, independently of any UI shell.
//! - Keep output deterministic for quick local sanity checks.

use cubic_core::{
    core_version, MemoryStore, NotificationCenter, Product, Sale, SearchSession, StaticDataSource,
    RECORD_SEARCH_DEBOUNCE,
};
use std::time::Instant;
use time::{Duration, OffsetDateTime};

const COMPANY: &str = "empresa-demo";

fn main() {
    let now = OffsetDateTime::now_utc();
    println!("cubic_core version={}", core_version());

    let mut session = SearchSession::new(demo_source(now), MemoryStore::new(), COMPANY);
    session.focus();
    let typed_at = Instant::now();
    session.input("vent", typed_at);
    session.poll(typed_at + RECORD_SEARCH_DEBOUNCE);
    for hit in session.results() {
        println!(
            "search hit score={} path={} label={}",
            hit.score, hit.path, hit.label
        );
    }

    let mut center = NotificationCenter::new(demo_source(now), MemoryStore::new());
    center.refresh(COMPANY, now);
    println!(
        "notifications total={} unread={}",
        center.notifications().len(),
        center.unread_count()
    );
    for notification in center.notifications() {
        println!(
            "notification severity={} id={} message={}",
            notification.severity, notification.id, notification.message
        );
    }
}

fn demo_source(now: OffsetDateTime) -> StaticDataSource {
    StaticDataSource {
        productos: vec![Product {
            id: "p1".to_string(),
            nombre: "Ventilador Industrial".to_string(),
            codigo: "VENT-01".to_string(),
            stock: 2,
            stock_minimo: 5,
            ..Product::default()
        }],
        ventas: vec![Sale {
            id: "v1".to_string(),
            numero: "V-001".to_string(),
            cliente: "Ferretería Sur SAC".to_string(),
            estado: "Completada".to_string(),
            tipo_comprobante: "Factura".to_string(),
            total: 1500.0,
            saldo_pendiente: 400.0,
            fecha_vencimiento: Some(now - Duration::days(40)),
        }],
        ..StaticDataSource::default()
    }
}
