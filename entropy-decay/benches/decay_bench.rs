use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use entropy_core::config::StoreConfig;
use entropy_decay::{DecayStore, ManualClock, SeededRandom};

fn full_store() -> (DecayStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1));
    let store = DecayStore::new(
        &StoreConfig {
            ticks_per_second: 1,
            ..StoreConfig::default()
        },
        clock.clone(),
        Arc::new(SeededRandom::new(42)),
    );
    store.write(&[b'x'; 1023]).unwrap();
    (store, clock)
}

fn bench_full_decay_after_long_idle(c: &mut Criterion) {
    c.bench_function("full_decay_1023_bytes", |b| {
        b.iter_batched(
            full_store,
            |(store, clock)| {
                clock.advance(u64::MAX);
                black_box(store.read(0, 1024).unwrap());
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_caught_up_read(c: &mut Criterion) {
    let (store, clock) = full_store();
    clock.advance_secs(10);
    store.read(0, 1024).unwrap();
    c.bench_function("read_without_new_decay", |b| {
        b.iter(|| black_box(store.read(0, 1024).unwrap()));
    });
}

fn bench_write(c: &mut Criterion) {
    let (store, _clock) = full_store();
    let payload = vec![b'y'; 512];
    c.bench_function("write_512_bytes", |b| {
        b.iter(|| black_box(store.write(&payload).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_full_decay_after_long_idle,
    bench_caught_up_read,
    bench_write
);
criterion_main!(benches);
