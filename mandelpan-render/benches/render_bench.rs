use criterion::{criterion_group, criterion_main, Criterion};

use mandelpan_core::{EscapeTime, ViewState};
use mandelpan_render::{BandRenderer, BandedColoring, PixelBuffer};

fn bench_full_frame_render(c: &mut Criterion) {
    let renderer = BandRenderer::new(7, EscapeTime::default()).unwrap();
    let view = ViewState::default();
    let coloring = BandedColoring::default();
    let mut buffer = PixelBuffer::new(640, 480);

    c.bench_function("full_frame_640x480", |b| {
        b.iter(|| renderer.render_into(&view, &coloring, &mut buffer).unwrap());
    });
}

fn bench_worker_scaling(c: &mut Criterion) {
    let view = ViewState::default().zoomed(480);
    let coloring = BandedColoring::default();
    let mut group = c.benchmark_group("workers_320x240");
    for workers in [0, 1, 3, 7] {
        let renderer = BandRenderer::new(workers, EscapeTime::new(1000).unwrap()).unwrap();
        let mut buffer = PixelBuffer::new(320, 240);
        group.bench_function(format!("{workers}"), |b| {
            b.iter(|| renderer.render_into(&view, &coloring, &mut buffer).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_frame_render, bench_worker_scaling);
criterion_main!(benches);
