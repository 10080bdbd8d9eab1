use entropy_core::config::ObservabilityConfig;
use entropy_observability::tracing_setup::spans::names;
use entropy_observability::{init_tracing, StoreMetrics};

#[test]
fn metrics_start_at_zero() {
    let metrics = StoreMetrics::new();
    assert_eq!(metrics.snapshot(), Default::default());
}

#[test]
fn metrics_accumulate_per_counter() {
    let metrics = StoreMetrics::new();
    metrics.record_write();
    metrics.record_write();
    metrics.record_clear();
    metrics.record_read();
    metrics.record_decay_steps(3);
    metrics.record_decay_steps(4);
    metrics.record_transfer_fault();
    metrics.record_interruption();

    let snap = metrics.snapshot();
    assert_eq!(snap.writes, 2);
    assert_eq!(snap.clears, 1);
    assert_eq!(snap.reads, 1);
    assert_eq!(snap.decay_steps, 7);
    assert_eq!(snap.transfer_faults, 1);
    assert_eq!(snap.interruptions, 1);
}

#[test]
fn metrics_snapshot_serializes_to_json() {
    let metrics = StoreMetrics::new();
    metrics.record_decay_steps(5);
    let json = serde_json::to_value(metrics.snapshot()).unwrap();
    assert_eq!(json["decay_steps"], 5);
    assert_eq!(json["writes"], 0);
}

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    tracing::info!("tracing initialized twice without panicking");
}

#[test]
fn span_macros_use_declared_names() {
    let write = entropy_observability::store_write_span!(5usize);
    let read = entropy_observability::store_read_span!(0i64, 16usize);
    let decay = entropy_observability::decay_span!(5usize, 2usize);
    for (span, name) in [(write, names::WRITE), (read, names::READ), (decay, names::DECAY)] {
        let meta = span.metadata().expect("span should carry its callsite metadata");
        assert_eq!(meta.name(), name);
    }
}
