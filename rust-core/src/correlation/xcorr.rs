//! Lagged cross-correlation of two equal-shaped complex grids
//!
//! Starting at a point of interest `(row, col)`, every sample of `m1` from
//! that point to the end of the grid is paired with the sample of `m2` that
//! lies `lag` columns further along the row. Columns whose partner would
//! fall outside the grid are skipped, so the window never wraps.

use super::CorrelationError;
use ndarray::{s, ArrayView2, Zip};
use num_complex::Complex;
use std::ops::Range;

/// Sub-grids of `m1` and `m2` that take part in the sum
#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    rows: Range<usize>,
    cols: Range<usize>,
    shifted_cols: Range<usize>,
}

impl Window {
    fn new(
        m1: &ArrayView2<'_, Complex<f64>>,
        m2: &ArrayView2<'_, Complex<f64>>,
        point: (usize, usize),
        lag: isize,
    ) -> Result<Self, CorrelationError> {
        let shape = m1.dim();
        if m2.dim() != shape {
            return Err(CorrelationError::ShapeMismatch(shape, m2.dim()));
        }

        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(CorrelationError::Empty);
        }

        let (row, col) = point;
        if row >= rows || col >= cols {
            return Err(CorrelationError::PointOutOfBounds(row, col, rows, cols));
        }

        let shift = lag.unsigned_abs();
        let (lead, trail) = if lag > 0 { (0, shift) } else { (shift, 0) };

        // Clamped to an empty range when the lag exceeds the remaining width
        let start = col.saturating_add(lead).min(cols);
        let end = cols.saturating_sub(trail).max(start);
        if start == end {
            return Ok(Self {
                rows: row..rows,
                cols: start..end,
                shifted_cols: 0..0,
            });
        }

        let shifted_cols = if lag > 0 {
            start + shift..end + shift
        } else {
            start - shift..end - shift
        };

        Ok(Self {
            rows: row..rows,
            cols: start..end,
            shifted_cols,
        })
    }
}

/// Unnormalized cross-correlation `Σ m1 · conj(m2 shifted by lag)`
///
/// A positive `lag` pairs `m1[r, c]` with `m2[r, c + lag]`; a negative one
/// with `m2[r, c - |lag|]`.
pub fn xcorr_2d(
    m1: ArrayView2<'_, Complex<f64>>,
    m2: ArrayView2<'_, Complex<f64>>,
    point: (usize, usize),
    lag: isize,
) -> Result<Complex<f64>, CorrelationError> {
    let window = Window::new(&m1, &m2, point, lag)?;
    if window.cols.is_empty() {
        return Ok(Complex::default());
    }

    let a = m1.slice(s![window.rows.clone(), window.cols.clone()]);
    let b = m2.slice(s![window.rows.clone(), window.shifted_cols.clone()]);

    let mut corr = Complex::default();
    Zip::from(&a).and(&b).for_each(|&x, &y| {
        corr += x * y.conj();
    });

    Ok(corr)
}

/// Cross-correlation normalized by the energy of both windows
///
/// Returns `corr / sqrt(E1 · E2)`; a window with no energy is an error.
pub fn xcorr_2d_normalized(
    m1: ArrayView2<'_, Complex<f64>>,
    m2: ArrayView2<'_, Complex<f64>>,
    point: (usize, usize),
    lag: isize,
) -> Result<Complex<f64>, CorrelationError> {
    let window = Window::new(&m1, &m2, point, lag)?;
    if window.cols.is_empty() {
        return Err(CorrelationError::ZeroEnergy);
    }

    let a = m1.slice(s![window.rows.clone(), window.cols.clone()]);
    let b = m2.slice(s![window.rows.clone(), window.shifted_cols.clone()]);

    let mut corr = Complex::default();
    let mut energy1 = 0.0;
    let mut energy2 = 0.0;
    Zip::from(&a).and(&b).for_each(|&x, &y| {
        corr += x * y.conj();
        energy1 += x.norm_sqr();
        energy2 += y.norm_sqr();
    });

    let denominator = (energy1 * energy2).sqrt();
    if denominator == 0.0 {
        return Err(CorrelationError::ZeroEnergy);
    }

    Ok(corr / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn grid(rows: usize, cols: usize) -> Array2<Complex<f64>> {
        Array2::from_shape_fn((rows, cols), |(r, c)| {
            Complex::new((r * cols + c) as f64 + 1.0, (r as f64 - c as f64) * 0.5)
        })
    }

    fn brute_force(
        m1: &Array2<Complex<f64>>,
        m2: &Array2<Complex<f64>>,
        point: (usize, usize),
        lag: isize,
    ) -> Complex<f64> {
        let (rows, cols) = m1.dim();
        let mut corr = Complex::default();
        for r in point.0..rows {
            for c in point.1..cols {
                let shifted = c as isize + lag;
                if shifted < point.1 as isize || shifted >= cols as isize {
                    continue;
                }
                corr += m1[[r, c]] * m2[[r, shifted as usize]].conj();
            }
        }
        corr
    }

    #[test]
    fn test_zero_lag_autocorrelation_is_energy() {
        let m = grid(4, 5);
        let corr = xcorr_2d(m.view(), m.view(), (0, 0), 0).unwrap();
        let energy: f64 = m.iter().map(|z| z.norm_sqr()).sum();

        assert!((corr.re - energy).abs() < 1e-9);
        assert!(corr.im.abs() < 1e-9);
    }

    #[test]
    fn test_matches_brute_force() {
        let m1 = grid(5, 7);
        let m2 = grid(5, 7).mapv(|z| z * Complex::new(0.5, -1.5) + Complex::new(1.0, 0.0));

        for &point in &[(0, 0), (1, 2), (4, 6)] {
            for lag in -3..=3 {
                let expected = brute_force(&m1, &m2, point, lag);
                let corr = xcorr_2d(m1.view(), m2.view(), point, lag).unwrap();
                assert!(
                    (corr - expected).norm() < 1e-9,
                    "point {:?} lag {}: {} vs {}",
                    point,
                    lag,
                    corr,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_normalized_self_correlation_is_one() {
        let m = grid(3, 6);
        let corr = xcorr_2d_normalized(m.view(), m.view(), (1, 1), 0).unwrap();

        assert!((corr.re - 1.0).abs() < 1e-12);
        assert!(corr.im.abs() < 1e-12);
    }

    #[test]
    fn test_normalized_is_bounded() {
        let m1 = grid(6, 6);
        let m2 = grid(6, 6).mapv(|z| z.conj() * 3.0);

        for lag in -4..=4 {
            let corr = xcorr_2d_normalized(m1.view(), m2.view(), (0, 0), lag).unwrap();
            assert!(corr.norm() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_large_lag_clamps_to_empty_window() {
        let m = grid(3, 4);

        assert_eq!(xcorr_2d(m.view(), m.view(), (0, 1), 10).unwrap(), Complex::default());
        assert_eq!(xcorr_2d(m.view(), m.view(), (0, 1), -10).unwrap(), Complex::default());
        assert_eq!(
            xcorr_2d_normalized(m.view(), m.view(), (0, 1), 10),
            Err(CorrelationError::ZeroEnergy)
        );
    }

    #[test]
    fn test_zero_grid_has_no_energy() {
        let zeros = Array2::<Complex<f64>>::zeros((2, 2));
        assert_eq!(
            xcorr_2d_normalized(zeros.view(), zeros.view(), (0, 0), 0),
            Err(CorrelationError::ZeroEnergy)
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let a = grid(2, 3);
        let b = grid(3, 2);
        let empty = Array2::<Complex<f64>>::zeros((0, 3));

        assert_eq!(
            xcorr_2d(a.view(), b.view(), (0, 0), 0),
            Err(CorrelationError::ShapeMismatch((2, 3), (3, 2)))
        );
        assert_eq!(
            xcorr_2d(empty.view(), empty.view(), (0, 0), 0),
            Err(CorrelationError::Empty)
        );
        assert_eq!(
            xcorr_2d(a.view(), a.view(), (2, 0), 0),
            Err(CorrelationError::PointOutOfBounds(2, 0, 2, 3))
        );
    }
}
