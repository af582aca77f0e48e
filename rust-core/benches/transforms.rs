use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsperado::{Direction, FftTransformer, HilbertTransformer, SharedHilbertTransformer};
use num_complex::Complex;

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");
    for &n in &[256usize, 1024, 4096] {
        let input: Vec<Complex<f64>> = (0..n)
            .map(|i| Complex::new((i as f64 * 0.01).sin(), 0.0))
            .collect();
        let mut output = vec![Complex::default(); n];
        let mut fft = FftTransformer::new(n, Direction::Forward);

        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| fft.transform(black_box(input), &mut output))
        });
    }
    group.finish();
}

fn bench_hilbert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hilbert");
    for &n in &[1024usize, 4096] {
        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.05).cos()).collect();
        let mut output = vec![Complex::default(); n];
        let mut native = HilbertTransformer::new(n);
        let shared = SharedHilbertTransformer::new(n);

        group.bench_with_input(BenchmarkId::new("native", n), &signal, |b, signal| {
            b.iter(|| native.transform_real(black_box(signal), &mut output))
        });
        group.bench_with_input(BenchmarkId::new("rustfft", n), &signal, |b, signal| {
            b.iter(|| shared.transform_real(black_box(signal), &mut output))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fft, bench_hilbert);
criterion_main!(benches);
