use cubic_core::{
    FileStore, KeyValueStore, MemoryStore, NotificationCenter, Product, ReadState,
    StaticDataSource, READ_STATE_KEY,
};
use time::macros::datetime;
use time::OffsetDateTime;

const NOW: OffsetDateTime = datetime!(2026-03-15 12:00:00 UTC);

fn low_stock_source(count: usize) -> StaticDataSource {
    StaticDataSource {
        productos: (0..count)
            .map(|i| Product {
                id: format!("p{i}"),
                nombre: format!("Producto {i}"),
                stock: 1,
                stock_minimo: 3,
                ..Product::default()
            })
            .collect(),
        ..StaticDataSource::default()
    }
}

#[test]
fn read_state_round_trips_through_storage() {
    let mut state = ReadState::load(MemoryStore::new());
    assert!(state.is_empty());

    state.replace(["stock-p1".to_string(), "cxc-v1".to_string()]);
    assert!(state.contains("stock-p1"));
    assert!(!state.contains("stock-p9"));
    assert_eq!(state.len(), 2);
}

#[test]
fn corrupt_read_state_resets_to_empty() {
    let mut store = MemoryStore::new();
    store.set(READ_STATE_KEY, "][").unwrap();
    let state = ReadState::load(store);
    assert!(state.is_empty());
}

#[test]
fn marking_one_read_decrements_unread_by_exactly_one() {
    let mut center = NotificationCenter::new(low_stock_source(3), MemoryStore::new());
    center.refresh("empresa-1", NOW);
    assert_eq!(center.unread_count(), 3);

    center.mark_read("stock-p1");

    assert_eq!(center.unread_count(), 2);
    for notification in center.notifications() {
        assert_eq!(notification.read, notification.id == "stock-p1");
    }
}

#[test]
fn marking_all_read_zeroes_unread_and_persists_every_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut center = NotificationCenter::new(low_stock_source(3), FileStore::new(dir.path()));
    center.refresh("empresa-1", NOW);

    center.mark_all_read();
    assert_eq!(center.unread_count(), 0);

    let persisted = FileStore::new(dir.path())
        .get(READ_STATE_KEY)
        .unwrap()
        .expect("read set should be persisted");
    let ids: Vec<String> = serde_json::from_str(&persisted).unwrap();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().any(|id| id == "stock-p0"));
}

#[test]
fn read_flags_survive_feed_recomputation() {
    let dir = tempfile::tempdir().unwrap();
    let mut center = NotificationCenter::new(low_stock_source(2), FileStore::new(dir.path()));
    center.refresh("empresa-1", NOW);
    center.mark_read("stock-p0");

    // Fresh center over the same persisted state: recomputed records must
    // pick the read flag back up by identifier.
    let mut reloaded = NotificationCenter::new(low_stock_source(2), FileStore::new(dir.path()));
    reloaded.refresh("empresa-1", NOW);

    let p0 = reloaded
        .notifications()
        .iter()
        .find(|n| n.id == "stock-p0")
        .unwrap();
    assert!(p0.read);
    assert_eq!(reloaded.unread_count(), 1);
}

#[test]
fn marking_read_does_not_trigger_recomputation() {
    let mut center = NotificationCenter::new(low_stock_source(2), MemoryStore::new());
    center.refresh("empresa-1", NOW);
    let before = center.notifications().to_vec();

    center.mark_read("stock-p0");
    center.mark_all_read();

    // Same records, only read flags changed.
    assert_eq!(center.notifications().len(), before.len());
    for (fresh, original) in center.notifications().iter().zip(&before) {
        assert_eq!(fresh.id, original.id);
        assert_eq!(fresh.message, original.message);
        assert!(fresh.read);
    }
}
