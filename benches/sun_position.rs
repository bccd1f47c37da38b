use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sun_approx::{Precision, usno};

fn benchmark_single_calculation(c: &mut Criterion) {
    let t = 8978.0;

    c.bench_function("usno_double", |b| {
        b.iter(|| usno::sun_position(black_box(t)))
    });

    c.bench_function("usno_single", |b| {
        b.iter(|| usno::sun_position_single(black_box(8978.0_f32)))
    });

    c.bench_function("usno_parts_with_auxiliaries", |b| {
        b.iter(|| {
            let parts = usno::sun_position_parts(black_box(t));
            (
                parts.coords(),
                parts.distance_au(),
                parts.equation_of_time_minutes(),
            )
        })
    });
}

fn benchmark_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series");

    for count in [24_i32, 365, 8760] {
        // Hourly steps starting at J2000.0
        let times: Vec<f64> = (0..count).map(|h| f64::from(h) / 24.0).collect();
        group.throughput(Throughput::Elements(count as u64));

        for precision in [Precision::Single, Precision::Double] {
            group.bench_with_input(
                BenchmarkId::new(format!("{precision:?}"), count),
                &times,
                |b, times| {
                    b.iter(|| {
                        times
                            .iter()
                            .map(|&t| usno::sun_position_with_precision(black_box(t), precision))
                            .fold(0.0, |acc, coords| acc + coords.declination())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_calculation, benchmark_time_series);
criterion_main!(benches);
