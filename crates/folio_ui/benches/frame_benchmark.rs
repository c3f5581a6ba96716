//! Benchmark for one full backdrop frame at the cap.
//!
//! TARGET: advance + paint of 26 particles and 325 links well under 0.2ms
//!
//! Run with: cargo bench --package folio_ui --bench frame_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use folio_core::{FieldConfig, ParticleField};
use folio_shared::{Vec2, Viewport};
use folio_ui::{paint_field, FrameRenderer, Palette, ParticleBackdrop, RecordingSurface};

fn saturated_field() -> ParticleField {
    let mut field = ParticleField::with_seed(FieldConfig::default(), 0xF00D);
    for i in 0..26 {
        field.spawn(Vec2::new(600.0 + 2.0 * i as f32, 400.0), f64::from(i) * 40.0);
    }
    field
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    // Clear + 52 circles + 325 lines
    group.throughput(Throughput::Elements(378));

    group.bench_function("paint_at_cap", |b| {
        let field = saturated_field();
        let mut renderer = FrameRenderer::with_capacity(378);
        b.iter(|| {
            renderer.begin_frame();
            black_box(paint_field(
                &field,
                &Palette::DARK,
                Viewport::new(1920, 1080),
                &mut renderer,
            ))
        });
    });

    group.bench_function("backdrop_frame", |b| {
        b.iter_batched(
            || {
                let mut backdrop = ParticleBackdrop::new(saturated_field(), true);
                backdrop.mount(RecordingSurface::default(), Viewport::new(1920, 1080));
                backdrop
            },
            |mut backdrop| black_box(backdrop.on_frame(1_040.0)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
