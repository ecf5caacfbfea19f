use criterion::{Criterion, criterion_group, criterion_main};
use piechart_rs::api::{PieChartEngine, PieChartEngineConfig};
use piechart_rs::core::{Slice, Viewport, compute_spans, hit_test};
use piechart_rs::render::NullRenderer;
use std::hint::black_box;

fn synthetic_slices(count: usize) -> Vec<Slice> {
    let fraction = 1.0 / count as f64;
    (0..count)
        .map(|i| Slice::new(format!("segment-{i}"), fraction))
        .collect()
}

fn bench_compute_spans_1k(c: &mut Criterion) {
    let slices = synthetic_slices(1_000);

    c.bench_function("compute_spans_1k", |b| {
        b.iter(|| compute_spans(black_box(&slices)))
    });
}

fn bench_hit_test_1k(c: &mut Criterion) {
    let slices = synthetic_slices(1_000);
    let spans = compute_spans(&slices);

    c.bench_function("hit_test_1k", |b| {
        b.iter(|| {
            hit_test(
                black_box(&spans),
                black_box(37.5),
                black_box(-12.25),
                black_box(200.0),
            )
        })
    });
}

fn bench_engine_snapshot_json(c: &mut Criterion) {
    let renderer = NullRenderer::default();
    let config = PieChartEngineConfig::new(Viewport::new(800, 600)).with_palette_seed(7);
    let mut engine = PieChartEngine::new(renderer, config).expect("engine init");

    engine.set_data(synthetic_slices(250));
    engine.pointer_move(450.0, 310.0);

    c.bench_function("engine_snapshot_json_250", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_spans_1k,
    bench_hit_test_1k,
    bench_engine_snapshot_json
);
criterion_main!(benches);
