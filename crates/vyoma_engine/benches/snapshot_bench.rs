//! Snapshot throughput over a synthetic 10k-star catalog.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vyoma_catalog::{CatalogStore, CelestialObject, ObjectKind};
use vyoma_engine::{Observer, SnapshotConfig, SnapshotEngine};
use vyoma_time::UtcInstant;

/// Deterministic pseudo-random star field (no RNG dependency; results
/// must be identical across runs).
fn synthetic_catalog(n: u32) -> CatalogStore {
    let mut catalog = CatalogStore::with_solar_system();
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let rejected = catalog.extend((0..n).map(|k| {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let u = (state >> 11) as f64 / (1u64 << 53) as f64;
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let v = (state >> 11) as f64 / (1u64 << 53) as f64;
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let w = (state >> 11) as f64 / (1u64 << 53) as f64;
        CelestialObject::fixed(
            1000 + k,
            &format!("bench-{k}"),
            ObjectKind::Star,
            u * 359.999,
            v * 180.0 - 90.0,
            w * 8.0,
        )
    }));
    assert!(rejected.is_empty());
    catalog
}

fn snapshot_benchmark(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let engine = SnapshotEngine::analytic();
    let observer = Observer::new(51.5, -0.12);
    let instant = UtcInstant::new(2024, 6, 21, 0, 0, 0.0).unwrap();
    let config = SnapshotConfig::default();

    c.bench_function("snapshot_10k_stars", |b| {
        b.iter(|| {
            let snapshot = engine
                .compute_snapshot(
                    black_box(&observer),
                    black_box(&instant),
                    black_box(&config),
                    black_box(&catalog),
                )
                .unwrap();
            black_box(snapshot.entries.len())
        })
    });
}

criterion_group!(benches, snapshot_benchmark);
criterion_main!(benches);
