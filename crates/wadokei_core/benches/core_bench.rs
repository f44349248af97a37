use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wadokei_core::{DEFAULT_FORMAT, Instant, Segment, Wadokei, WadokeiTime, render};

fn reading_bench(c: &mut Criterion) {
    // 15:00 JST, 2024-06-21
    let t = Instant::from_millis(1_718_949_600_000);

    let mut group = c.benchmark_group("reading");
    group.bench_function("at_cached", |b| {
        let mut clock = Wadokei::default();
        b.iter(|| clock.at(black_box(t)))
    });
    group.bench_function("at_cold", |b| {
        b.iter(|| Wadokei::default().at(black_box(t)))
    });
    group.bench_function("walk_one_day_15min", |b| {
        let mut clock = Wadokei::default();
        b.iter(|| {
            for step in 0..96 {
                let _ = clock.at(black_box(t.offset_ms(step * 900_000)));
            }
        })
    });
    group.finish();
}

fn render_bench(c: &mut Criterion) {
    let time = WadokeiTime::new(Instant::from_millis(0), 6.8, 4, Segment::Daytime);
    c.bench_function("render_default_format", |b| {
        b.iter(|| render(black_box(DEFAULT_FORMAT), black_box(&time)))
    });
}

criterion_group!(benches, reading_bench, render_bench);
criterion_main!(benches);
