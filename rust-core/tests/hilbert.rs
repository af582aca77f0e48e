use dsperado::{HilbertBackend, HilbertConfig, HilbertTransformer, SharedHilbertTransformer};
use num_complex::Complex;
use proptest::prelude::*;
use std::f64::consts::PI;

proptest! {
    #[test]
    fn cosine_has_flat_envelope(log2 in 3u32..=10, bin_seed in 0usize..1000, phase in 0.0f64..(2.0 * PI)) {
        let n = 1usize << log2;
        // Bins in [1, N/2 - 1) survive the mask with full weight
        let bin = 1 + bin_seed % (n / 2 - 2);
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * bin as f64 * i as f64 / n as f64 + phase).cos())
            .collect();

        let mut hilbert = HilbertTransformer::new(n);
        let mut out = vec![Complex::default(); n];
        hilbert.transform_real(&signal, &mut out);

        let scale = 1.0 / n as f64;
        for (i, z) in out.iter().enumerate() {
            let theta = 2.0 * PI * bin as f64 * i as f64 / n as f64 + phase;
            prop_assert!((z.norm() - scale).abs() < 1e-9 * scale);
            prop_assert!((z.im - scale * theta.sin()).abs() < 1e-9 * scale);
        }
    }

    #[test]
    fn backends_differ_only_by_scale(log2 in 1u32..=9, seed in any::<u64>()) {
        let n = 1usize << log2;
        let signal: Vec<f64> = (0..n)
            .map(|i| ((seed.wrapping_mul(i as u64 + 1) % 1000) as f64 / 500.0) - 1.0)
            .collect();

        let mut native = HilbertTransformer::new(n);
        let shared = SharedHilbertTransformer::new(n);
        let mut a = vec![Complex::default(); n];
        let mut b = vec![Complex::default(); n];
        native.transform_real(&signal, &mut a);
        shared.transform_real(&signal, &mut b);

        for (x, y) in a.iter().zip(&b) {
            prop_assert!((*x * n as f64 - *y).norm() < 1e-9 * n as f64);
        }
    }
}

#[test]
fn configured_backends_share_one_interface() {
    let n = 64;
    let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.2).sin()).collect();

    for backend in [HilbertBackend::Native, HilbertBackend::RustFft] {
        let mut hilbert = HilbertConfig { size: n, backend }.build().unwrap();
        let mut out = vec![Complex::default(); n];
        hilbert.analytic_real(&signal, &mut out);
        assert_eq!(hilbert.size(), n);
        assert!(out.iter().all(|z| z.re.is_finite() && z.im.is_finite()));
    }
}
