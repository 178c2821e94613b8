//! Benchmarks for full-raster rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spaceplot_scene::{Color, DataPoint, DataSpace};

/// A space with `n` randomly placed points
fn random_space(width: u32, height: u32, n: usize) -> DataSpace {
    use rand::Rng;
    let mut rng = rand::rng();
    let mut space = DataSpace {
        width,
        height,
        ..Default::default()
    };
    for i in 0..n {
        let color = Color::rgb(rng.random(), rng.random(), rng.random());
        space.push(
            DataPoint::new(rng.random(), rng.random(), rng.random(), color)
                .with_label(format!("p{}", i)),
        );
    }
    space
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (w, h) in [(200, 160), (800, 640), (1920, 1080)] {
        let mut space = random_space(w, h, 1000);
        let id = format!("{}x{}", w, h);
        group.bench_function(BenchmarkId::new("x_pattern", &id), |bench| {
            bench.iter(|| black_box(space.render()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
