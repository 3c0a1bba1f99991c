use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frm_rs::{encode_all, lcs, Miner, MinerConfig, PatternMiner};

/// Noisy sines with a shared bump, `count` series of length `n`.
fn collection(count: usize, n: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|s| {
            let phase = s as f64 * 0.7;
            (0..n)
                .map(|i| {
                    let t = i as f64;
                    let bump = 2.0 * (-(t - n as f64 / 2.0).powi(2) / 40.0).exp();
                    (t * 0.13 + phase).sin() + 0.3 * (t * 1.7 + phase).cos() + bump
                })
                .collect()
        })
        .collect()
}

fn bench_sax_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("sax_encode");
    for n in [1_000, 10_000, 100_000] {
        let series = collection(4, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| encode_all(black_box(&series), 4, 6))
        });
    }
    group.finish();
}

fn bench_pattern_mining(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_mining");
    group.sample_size(10);
    for count in [5, 20, 50] {
        let series = collection(count, 400);
        let sequences = encode_all(&series, 4, 5).unwrap();
        let miner = PatternMiner::new(0.6, 3, 0, 0.9);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| miner.mine(black_box(&sequences)))
        });
    }
    group.finish();
}

fn bench_lcs(c: &mut Criterion) {
    let a: Vec<u8> = (0..64).map(|i| (i * 7 % 5) as u8).collect();
    let b: Vec<u8> = (0..48).map(|i| (i * 3 % 5) as u8).collect();
    c.bench_function("lcs_64x48", |bench| {
        bench.iter(|| lcs(black_box(&a), black_box(&b)))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(10);
    for count in [5, 20] {
        let series = collection(count, 1_000);
        let miner = Miner::new(MinerConfig::new(0.6, 5, 5).with_k(10)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| miner.mine(black_box(&series)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sax_encode,
    bench_pattern_mining,
    bench_lcs,
    bench_full_pipeline
);
criterion_main!(benches);
