use cubic_core::notify::sources::{
    expiring_quotations, expiring_warranties, low_stock_products, overdue_payables,
    overdue_receivables, recent_returns,
};
use cubic_core::{
    CompanyDataSource, CreditNote, MemoryStore, NotificationCenter, Product, Quotation, Sale,
    Severity, SourceError, SourceResult, StaticDataSource, SupplierInvoice, Warranty,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const NOW: OffsetDateTime = datetime!(2026-03-15 12:00:00 UTC);

fn sale_due(id: &str, days_ago: i64) -> Sale {
    Sale {
        id: id.to_string(),
        cliente: "Acme SAC".to_string(),
        estado: "Completada".to_string(),
        tipo_comprobante: "Factura".to_string(),
        total: 1000.0,
        saldo_pendiente: 250.0,
        fecha_vencimiento: Some(NOW - Duration::days(days_ago)),
        ..Sale::default()
    }
}

fn warranty_due(id: &str, days_ahead: i64) -> Warranty {
    Warranty {
        id: id.to_string(),
        estado: "activa".to_string(),
        producto_nombre: "Taladro".to_string(),
        fecha_vencimiento: Some(NOW + Duration::days(days_ahead)),
        ..Warranty::default()
    }
}

fn quotation_due(id: &str, days_ahead: i64) -> Quotation {
    Quotation {
        id: id.to_string(),
        numero: format!("COT-{id}"),
        cliente: "Acme SAC".to_string(),
        estado: "Pendiente".to_string(),
        total: 500.0,
        fecha_vencimiento: Some(NOW + Duration::days(days_ahead)),
    }
}

#[test]
fn receivable_due_today_is_excluded() {
    let ventas = vec![sale_due("v1", 0)];
    assert!(overdue_receivables(&ventas, NOW).is_empty());
}

#[test]
fn receivable_severity_follows_days_overdue() {
    let ventas = vec![sale_due("v31", 31), sale_due("v10", 10)];
    let feed = overdue_receivables(&ventas, NOW);

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].id, "cxc-v31");
    assert_eq!(feed[0].severity, Severity::Error);
    assert!(feed[0].message.contains("vencida hace 31 día(s)"));
    assert_eq!(feed[1].severity, Severity::Warning);
    assert_eq!(feed[1].amount, Some(250.0));
}

#[test]
fn receivables_keep_only_ten_most_overdue() {
    let ventas: Vec<Sale> = (1..=12).map(|d| sale_due(&format!("v{d}"), d)).collect();
    let feed = overdue_receivables(&ventas, NOW);

    assert_eq!(feed.len(), 10);
    assert_eq!(feed[0].id, "cxc-v12");
    assert!(feed.iter().all(|n| n.id != "cxc-v1" && n.id != "cxc-v2"));
}

#[test]
fn paid_or_undated_payables_are_excluded() {
    let facturas = vec![
        SupplierInvoice {
            id: "f1".to_string(),
            estado: "pagado".to_string(),
            fecha_vencimiento: Some(NOW - Duration::days(40)),
            ..SupplierInvoice::default()
        },
        SupplierInvoice {
            id: "f2".to_string(),
            estado: "pendiente".to_string(),
            fecha_vencimiento: None,
            ..SupplierInvoice::default()
        },
        SupplierInvoice {
            id: "f3".to_string(),
            numero: "FP-003".to_string(),
            proveedor_nombre: "Distribuidora Norte".to_string(),
            estado: "pendiente".to_string(),
            monto: 800.0,
            fecha_vencimiento: Some(NOW - Duration::days(5)),
        },
    ];

    let feed = overdue_payables(&facturas, NOW);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, "cxp-f3");
    assert_eq!(feed[0].severity, Severity::Warning);
    assert!(feed[0].message.contains("Distribuidora Norte - Factura FP-003"));
}

#[test]
fn warranty_windows_and_titles() {
    let garantias = vec![
        warranty_due("hoy", 0),
        warranty_due("pronto", 7),
        warranty_due("lejos", 30),
        warranty_due("fuera", 31),
        Warranty {
            estado: "vencida".to_string(),
            ..warranty_due("inactiva", 5)
        },
    ];

    let feed = expiring_warranties(&garantias, NOW);
    assert_eq!(feed.len(), 3);

    let hoy = feed.iter().find(|n| n.id == "garantia-hoy").unwrap();
    assert_eq!(hoy.title, "Garantía Vence Hoy");
    assert_eq!(hoy.severity, Severity::Warning);

    let pronto = feed.iter().find(|n| n.id == "garantia-pronto").unwrap();
    assert_eq!(pronto.title, "Garantía Por Vencer Pronto");
    assert_eq!(pronto.severity, Severity::Warning);
    assert!(pronto.message.contains("vence en 7 día(s)"));

    let lejos = feed.iter().find(|n| n.id == "garantia-lejos").unwrap();
    assert_eq!(lejos.title, "Garantía Por Vencer");
    assert_eq!(lejos.severity, Severity::Info);
}

#[test]
fn quotation_windows_and_severity() {
    let cotizaciones = vec![
        quotation_due("q3", 3),
        quotation_due("q5", 5),
        quotation_due("q8", 8),
        Quotation {
            estado: "Aceptada".to_string(),
            ..quotation_due("qa", 2)
        },
    ];

    let feed = expiring_quotations(&cotizaciones, NOW);
    assert_eq!(feed.len(), 2);

    let urgente = feed.iter().find(|n| n.id == "cotizacion-q3").unwrap();
    assert_eq!(urgente.severity, Severity::Warning);
    assert!(urgente.message.contains("Cotización COT-q3 de Acme SAC"));

    let tranquila = feed.iter().find(|n| n.id == "cotizacion-q5").unwrap();
    assert_eq!(tranquila.severity, Severity::Info);
}

#[test]
fn only_recent_credit_notes_become_return_notifications() {
    let notas = vec![
        CreditNote {
            id: "n1".to_string(),
            tipo: "credito".to_string(),
            numero_comprobante: "NC-001".to_string(),
            cliente: "Acme SAC".to_string(),
            total: 120.0,
            fecha: Some(NOW - Duration::days(3)),
        },
        CreditNote {
            id: "n2".to_string(),
            tipo: "credito".to_string(),
            fecha: Some(NOW - Duration::days(8)),
            ..CreditNote::default()
        },
        CreditNote {
            id: "n3".to_string(),
            tipo: "debito".to_string(),
            fecha: Some(NOW - Duration::days(1)),
            ..CreditNote::default()
        },
    ];

    let feed = recent_returns(&notas, NOW);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, "devolucion-n1");
    assert_eq!(feed[0].severity, Severity::Info);
    assert_eq!(feed[0].amount, Some(120.0));
    assert!(feed[0].message.contains("Nota de Crédito NC-001 por Acme SAC"));
}

#[test]
fn low_stock_thresholds_match_reorder_rules() {
    let productos = vec![
        Product {
            id: "p1".to_string(),
            nombre: "Martillo".to_string(),
            stock: 2,
            stock_minimo: 5,
            ..Product::default()
        },
        Product {
            id: "p2".to_string(),
            nombre: "Clavos".to_string(),
            stock: 0,
            stock_minimo: 5,
            ..Product::default()
        },
        Product {
            id: "p3".to_string(),
            nombre: "Sin umbral".to_string(),
            stock: 0,
            stock_minimo: 0,
            ..Product::default()
        },
        Product {
            id: "p4".to_string(),
            nombre: "Surtido".to_string(),
            stock: 9,
            stock_minimo: 5,
            ..Product::default()
        },
    ];

    let feed = low_stock_products(&productos, NOW);
    assert_eq!(feed.len(), 2);

    let martillo = feed.iter().find(|n| n.id == "stock-p1").unwrap();
    assert_eq!(martillo.severity, Severity::Warning);
    assert!(martillo.message.contains("2 unidades"));

    let clavos = feed.iter().find(|n| n.id == "stock-p2").unwrap();
    assert_eq!(clavos.severity, Severity::Error);
}

#[test]
fn low_stock_is_capped_to_the_first_ten() {
    let productos: Vec<Product> = (0..15)
        .map(|i| Product {
            id: format!("p{i}"),
            nombre: format!("Producto {i}"),
            stock: 1,
            stock_minimo: 3,
            ..Product::default()
        })
        .collect();
    assert_eq!(low_stock_products(&productos, NOW).len(), 10);
}

fn demo_source() -> StaticDataSource {
    StaticDataSource {
        ventas: vec![sale_due("v1", 31)],
        garantias: vec![warranty_due("g1", 10)],
        cotizaciones: vec![quotation_due("q1", 2)],
        productos: vec![Product {
            id: "p1".to_string(),
            nombre: "Martillo".to_string(),
            stock: 2,
            stock_minimo: 5,
            ..Product::default()
        }],
        ..StaticDataSource::default()
    }
}

#[test]
fn feed_is_sorted_by_occurrence_date_descending() {
    let mut center = NotificationCenter::new(demo_source(), MemoryStore::new());
    center.refresh("empresa-1", NOW);

    let dates: Vec<OffsetDateTime> = center.notifications().iter().map(|n| n.date).collect();
    let mut expected = dates.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, expected);
    assert_eq!(center.notifications().len(), 4);
    assert_eq!(center.unread_count(), 4);
}

#[test]
fn recomputation_with_identical_sources_is_idempotent() {
    let mut center = NotificationCenter::new(demo_source(), MemoryStore::new());
    center.refresh("empresa-1", NOW);
    let first = center.notifications().to_vec();
    center.refresh("empresa-1", NOW);
    assert_eq!(center.notifications(), first.as_slice());
}

/// Delegates to a fixture but fails the `ventas` collection.
struct FailingSales(StaticDataSource);

impl CompanyDataSource for FailingSales {
    fn customers(&self, company: &str) -> SourceResult<Vec<cubic_core::Customer>> {
        self.0.customers(company)
    }
    fn products(&self, company: &str) -> SourceResult<Vec<Product>> {
        self.0.products(company)
    }
    fn quotations(&self, company: &str) -> SourceResult<Vec<Quotation>> {
        self.0.quotations(company)
    }
    fn sales(&self, _company: &str) -> SourceResult<Vec<Sale>> {
        Err(SourceError::Unavailable("timeout".to_string()))
    }
    fn credit_notes(&self, company: &str) -> SourceResult<Vec<CreditNote>> {
        self.0.credit_notes(company)
    }
    fn warranties(&self, company: &str) -> SourceResult<Vec<Warranty>> {
        self.0.warranties(company)
    }
    fn supplier_invoices(&self, company: &str) -> SourceResult<Vec<SupplierInvoice>> {
        self.0.supplier_invoices(company)
    }
}

#[test]
fn one_failing_collection_leaves_the_other_derivations_intact() {
    let mut center = NotificationCenter::new(FailingSales(demo_source()), MemoryStore::new());
    center.refresh("empresa-1", NOW);

    let ids: Vec<&str> = center.notifications().iter().map(|n| n.id.as_str()).collect();
    assert!(!ids.iter().any(|id| id.starts_with("cxc-")));
    assert!(ids.contains(&"garantia-g1"));
    assert!(ids.contains(&"cotizacion-q1"));
    assert!(ids.contains(&"stock-p1"));
}

#[test]
fn tick_refreshes_once_per_interval_and_stops_without_company() {
    let mut center = NotificationCenter::new(demo_source(), MemoryStore::new());

    assert!(!center.tick(None, NOW));
    assert!(center.notifications().is_empty());

    assert!(center.tick(Some("empresa-1"), NOW));
    assert!(!center.tick(Some("empresa-1"), NOW + Duration::minutes(4)));
    assert!(center.tick(Some("empresa-1"), NOW + Duration::minutes(6)));

    // Losing the company context clears the schedule; the next tick with a
    // company refreshes immediately.
    assert!(!center.tick(None, NOW + Duration::minutes(7)));
    assert!(center.tick(Some("empresa-1"), NOW + Duration::minutes(8)));
}
