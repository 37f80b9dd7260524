//! Static navigation catalog.
//!
//! # Responsibility
//! - Enumerate every navigable destination with its search keywords.
//! - Provide the popular-suggestion shortlist shown for an empty query.
//!
//! # Invariants
//! - Entries are immutable and known at compile time; paths are unique.
//! - Keywords are lowercase so scoring never needs to re-fold them.

/// One navigable destination with its associated search keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Every destination reachable through global search.
pub const NAV_INDEX: &[CatalogEntry] = &[
    CatalogEntry {
        path: "/",
        label: "Dashboard",
        keywords: &["dashboard", "inicio", "panel", "principal", "home"],
    },
    CatalogEntry {
        path: "/finanzas/contabilidad",
        label: "Contabilidad General",
        keywords: &["contabilidad", "general", "finanzas", "cuentas", "libro"],
    },
    CatalogEntry {
        path: "/finanzas/cuentas-cobrar",
        label: "Cuentas por Cobrar",
        keywords: &["cuentas", "cobrar", "cobros", "clientes", "facturas"],
    },
    CatalogEntry {
        path: "/finanzas/cuentas-pagar",
        label: "Cuentas por Pagar",
        keywords: &["cuentas", "pagar", "pagos", "proveedores"],
    },
    CatalogEntry {
        path: "/finanzas/tesoreria",
        label: "Tesorería",
        keywords: &["tesoreria", "caja", "efectivo", "bancos", "dinero"],
    },
    CatalogEntry {
        path: "/finanzas/fiscal",
        label: "Fiscal e Impuestos",
        keywords: &["fiscal", "impuestos", "tributario", "sunat", "igv"],
    },
    CatalogEntry {
        path: "/ventas",
        label: "Ventas",
        keywords: &["ventas", "vender", "vendido", "comercial"],
    },
    CatalogEntry {
        path: "/ventas/realizar",
        label: "Realizar Venta",
        keywords: &["venta", "realizar", "nueva", "crear", "registrar", "pos"],
    },
    CatalogEntry {
        path: "/ventas/pedidos",
        label: "Pedidos de Venta",
        keywords: &["pedidos", "ordenes", "ventas"],
    },
    CatalogEntry {
        path: "/ventas/facturacion",
        label: "Facturación Electrónica",
        keywords: &["facturacion", "factura", "electronica", "comprobante", "boleta"],
    },
    CatalogEntry {
        path: "/ventas/notas",
        label: "Notas de Crédito y Débito",
        keywords: &["notas", "credito", "debito", "nc", "nd"],
    },
    CatalogEntry {
        path: "/ventas/cotizaciones",
        label: "Cotizaciones",
        keywords: &["cotizaciones", "cotizar", "presupuesto", "oferta", "proforma"],
    },
    CatalogEntry {
        path: "/ventas/pedidos-gestion",
        label: "Gestión de Pedidos",
        keywords: &["pedidos", "gestion", "administrar"],
    },
    CatalogEntry {
        path: "/ventas/kardex",
        label: "Kardex e Inventarios",
        keywords: &["kardex", "inventario", "stock", "almacen"],
    },
    CatalogEntry {
        path: "/ventas/logistica",
        label: "Logística y Envíos",
        keywords: &["logistica", "envios", "despachos", "transporte"],
    },
    CatalogEntry {
        path: "/ventas/devoluciones",
        label: "Devoluciones",
        keywords: &["devoluciones", "devolver", "retorno"],
    },
    CatalogEntry {
        path: "/ventas/garantias",
        label: "Garantías",
        keywords: &["garantias", "garantia", "servicio"],
    },
    CatalogEntry {
        path: "/ventas/reclamos",
        label: "Reclamos",
        keywords: &["reclamos", "reclamo", "queja"],
    },
    CatalogEntry {
        path: "/ventas/automatizacion",
        label: "Automatización",
        keywords: &["automatizacion", "centralizacion", "automatizar"],
    },
    CatalogEntry {
        path: "/clientes",
        label: "Clientes",
        keywords: &["clientes", "cliente", "crm", "contactos"],
    },
    CatalogEntry {
        path: "/contactos",
        label: "Contactos",
        keywords: &["contactos", "contacto", "personas", "directorio"],
    },
    CatalogEntry {
        path: "/marketing",
        label: "Marketing y Campañas",
        keywords: &["marketing", "campanas", "publicidad", "promocion"],
    },
    CatalogEntry {
        path: "/correo",
        label: "Atención al Cliente",
        keywords: &["correo", "atencion", "cliente", "soporte", "tickets"],
    },
    CatalogEntry {
        path: "/productos",
        label: "Productos",
        keywords: &["productos", "producto", "items", "articulos", "catalogo"],
    },
    CatalogEntry {
        path: "/inventarios/stock",
        label: "Control de Stock",
        keywords: &["stock", "inventario", "almacen", "existencias"],
    },
    CatalogEntry {
        path: "/reportes",
        label: "Reportes",
        keywords: &["reportes", "reporte", "informes", "estadisticas"],
    },
    CatalogEntry {
        path: "/reportes/objetivos",
        label: "Objetivos",
        keywords: &["objetivos", "metas", "kpi", "indicadores"],
    },
    CatalogEntry {
        path: "/reportes/ia",
        label: "Reporte con IA",
        keywords: &["ia", "inteligencia", "artificial", "ai", "analisis"],
    },
    CatalogEntry {
        path: "/tareas",
        label: "Tareas",
        keywords: &["tareas", "tarea", "actividades", "pendientes", "todo"],
    },
    CatalogEntry {
        path: "/admin",
        label: "Panel de Administración",
        keywords: &["admin", "administracion", "configuracion", "ajustes"],
    },
];

/// Shortlist offered when the query is empty and no recent searches exist.
pub const POPULAR_SUGGESTIONS: &[(&str, &str)] = &[
    ("/ventas/realizar", "Realizar Venta"),
    ("/clientes", "Clientes"),
    ("/productos", "Productos"),
    ("/ventas/cotizaciones", "Cotizaciones"),
    ("/reportes", "Reportes"),
];

#[cfg(test)]
mod tests {
    use super::NAV_INDEX;
    use std::collections::HashSet;

    #[test]
    fn catalog_paths_are_unique() {
        let paths: HashSet<_> = NAV_INDEX.iter().map(|entry| entry.path).collect();
        assert_eq!(paths.len(), NAV_INDEX.len());
    }

    #[test]
    fn catalog_keywords_are_lowercase() {
        for entry in NAV_INDEX {
            for keyword in entry.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "entry {}", entry.path);
            }
        }
    }
}
