use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use findoutlie::{IqrDetector, OutlierDetector, ZScoreDetector};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data with a few injected spikes
fn generate_contaminated_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(100.0, 15.0).unwrap();
    let mut data: Vec<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();
    for i in (0..size).step_by(97) {
        data[i] *= 10.0;
    }
    data
}

fn bench_detectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("Detectors");
    let sizes = [100, 1_000, 10_000, 100_000];

    let iqr = IqrDetector::default();
    let zscore = ZScoreDetector::default();

    for &size in &sizes {
        let data = generate_contaminated_data(size, 42);

        group.bench_with_input(BenchmarkId::new("iqr", size), &data, |b, data| {
            b.iter(|| iqr.detect(black_box(data.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("zscore", size), &data, |b, data| {
            b.iter(|| zscore.detect(black_box(data.as_slice())))
        });
    }

    group.finish();
}

fn bench_presorted_iqr(c: &mut Criterion) {
    let mut group = c.benchmark_group("IqrSorted");
    let iqr = IqrDetector::default();

    for &size in &[1_000, 100_000] {
        let mut data = generate_contaminated_data(size, 7);
        data.sort_by(|a, b| a.total_cmp(b));

        group.bench_with_input(BenchmarkId::new("detect", size), &data, |b, data| {
            b.iter(|| iqr.detect(black_box(data.as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("detect_sorted", size), &data, |b, data| {
            b.iter(|| iqr.detect_sorted(black_box(data.as_slice())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detectors, bench_presorted_iqr);
criterion_main!(benches);
