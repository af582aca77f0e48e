//! Smoothed digital differentiator (type I)
//!
//! Coefficient tables are memoized in a caller-owned
//! [`DifferentiatorCache`] keyed by coefficient count.

use super::FilterError;
use log::trace;
use std::collections::HashMap;

/// Designed coefficient tables, keyed by coefficient count
#[derive(Debug, Default, Clone)]
pub struct DifferentiatorCache {
    tables: HashMap<usize, Vec<f64>>,
}

impl DifferentiatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coefficient table for `count` taps per side, designed on first request
    ///
    /// Every coefficient equals `1 / (count * (count + 1))`.
    pub fn coefficients(&mut self, count: usize) -> Result<&[f64], FilterError> {
        if count < 2 {
            return Err(FilterError::TooFewCoefficients(count));
        }

        let table = self.tables.entry(count).or_insert_with(|| {
            trace!("designing differentiator table for {} coefficients", count);
            let weight = 1.0 / count as f64 / (count + 1) as f64;
            vec![weight; count]
        });

        Ok(table.as_slice())
    }

    /// Number of designed tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Apply the smoothed differentiator in place
///
/// For each sample in order and each `j` in `1..=count`,
/// `x[i] += c[j-1] · (x[min(i+j, len-1)] - x[max(i-j, 0)])`.
/// Every term reads the buffer as it stands, so near the edges, where an
/// index clamps to `i`, later terms see the partially updated `x[i]`.
/// The filter spans `2 * count + 1` samples.
pub fn smoothed_dd1(
    buffer: &mut [f64],
    count: usize,
    cache: &mut DifferentiatorCache,
) -> Result<(), FilterError> {
    let coeffs = cache.coefficients(count)?;
    let Some(last) = buffer.len().checked_sub(1) else {
        return Ok(());
    };

    for i in 0..buffer.len() {
        for (j, &c) in (1..=count).zip(coeffs) {
            let ahead = (i + j).min(last);
            let behind = i.saturating_sub(j);
            buffer[i] += c * (buffer[ahead] - buffer[behind]);
        }
    }

    Ok(())
}
