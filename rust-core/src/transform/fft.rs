//! Recursive radix-2 FFT with arena-backed scratch
//!
//! Decimation in time: every level splits its input by index parity into two
//! scratch spans, transforms both halves in place and merges them with one
//! butterfly pass. All scratch comes from an [`Arena`] sized `N * log2(N)`,
//! so a call to `transform` performs no heap allocation.

use super::arena::{Arena, Span};
use super::{validate_size, Sample, TransformError};
use log::debug;
use num_complex::Complex;
use rustfft::num_traits::NumCast;

/// Transform direction, fixed when the transformer is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Unnormalized forward DFT, twiddles `e^{-2πik/n}`
    Forward,

    /// Inverse DFT, twiddles `e^{+2πik/n}`, halved at every level (1/N overall)
    Inverse,
}

impl Direction {
    /// Angle of the per-level twiddle rotation for a length-`n` merge
    fn rotation_angle<T: Sample>(self, n: usize) -> T {
        let n = <T as NumCast>::from(n).unwrap_or_else(T::max_value);
        let angle = (T::PI() + T::PI()) / n;
        match self {
            Direction::Forward => -angle,
            Direction::Inverse => angle,
        }
    }
}

/// Fixed-size FFT or IFFT
///
/// Build one per size and direction and reuse it; a single instance must
/// not be used from two threads at once.
pub struct FftTransformer<T: Sample> {
    size: usize,
    direction: Direction,

    /// Scratch for every recursion level, rewound on each call
    arena: Arena<Complex<T>>,

    /// Real-to-complex staging buffer for [`transform_real`](Self::transform_real)
    staging: Vec<Complex<T>>,
}

impl<T: Sample> FftTransformer<T> {
    /// Create a transformer
    ///
    /// # Arguments
    /// * `size` - Transform length (power of 2)
    /// * `direction` - Forward, or inverse with 1/N normalization
    ///
    /// # Panics
    /// If `size` is zero or not a power of two.
    pub fn new(size: usize, direction: Direction) -> Self {
        Self::try_new(size, direction).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a forward transformer (see [`new`](Self::new))
    pub fn forward(size: usize) -> Self {
        Self::new(size, Direction::Forward)
    }

    /// Create an inverse transformer (see [`new`](Self::new))
    pub fn inverse(size: usize) -> Self {
        Self::new(size, Direction::Inverse)
    }

    /// Create a transformer, reporting an invalid size as an error
    ///
    /// The scratch arena holds `size * log2(size)` samples.
    ///
    /// # Arguments
    /// * `size` - Transform length (power of 2)
    /// * `direction` - Forward, or inverse with 1/N normalization
    pub fn try_new(size: usize, direction: Direction) -> Result<Self, TransformError> {
        let size = validate_size(size)?;
        let capacity = size * size.trailing_zeros() as usize;

        debug!(
            "fft transformer: size={} direction={:?} arena_capacity={}",
            size, direction, capacity
        );

        Ok(Self {
            size,
            direction,
            arena: Arena::new(capacity),
            staging: vec![Complex::default(); size],
        })
    }

    /// Transform `input` into `output`
    ///
    /// # Panics
    /// If either buffer is not exactly `size` samples long.
    pub fn transform(&mut self, input: &[Complex<T>], output: &mut [Complex<T>]) {
        self.check_len("input", input.len());
        self.check_len("output", output.len());

        if self.size == 1 {
            output[0] = input[0];
            return;
        }

        let scratch = self.load(input);
        self.merge_into(scratch, output);
    }

    /// Transform `buffer` and write the result back into it
    pub fn transform_in_place(&mut self, buffer: &mut [Complex<T>]) {
        self.check_len("buffer", buffer.len());

        if self.size == 1 {
            return;
        }

        let scratch = self.load(buffer);
        self.merge_into(scratch, buffer);
    }

    /// Transform a real sequence (imaginary parts taken as zero)
    pub fn transform_real(&mut self, input: &[T], output: &mut [Complex<T>]) {
        self.check_len("input", input.len());

        let mut staging = std::mem::take(&mut self.staging);
        for (slot, &re) in staging.iter_mut().zip(input) {
            *slot = Complex::new(re, T::zero());
        }
        self.transform(&staging, output);
        self.staging = staging;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Arena capacity in complex slots (`N * log2(N)`)
    pub fn scratch_capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Arena slots consumed by the most recent transform
    pub fn scratch_used(&self) -> usize {
        self.arena.used()
    }

    fn check_len(&self, name: &str, len: usize) {
        assert_eq!(
            len, self.size,
            "{} length {} does not match transform size {}",
            name, len, self.size
        );
    }

    /// Split `input` into the top-level halves and transform both. Returns
    /// the span holding the transformed even half followed by the odd half.
    fn load(&mut self, input: &[Complex<T>]) -> Span {
        self.arena.reset();

        let half = self.size / 2;
        let even = self.arena.allocate(half);
        let odd = self.arena.allocate(half);
        let scratch = even.start..odd.end;

        deinterleave(input, self.arena.get_mut(scratch.clone()));
        transform_span(&mut self.arena, self.direction, even);
        transform_span(&mut self.arena, self.direction, odd);

        scratch
    }

    fn merge_into(&self, scratch: Span, output: &mut [Complex<T>]) {
        let (evens, odds) = self.arena.get(scratch).split_at(self.size / 2);
        butterfly(self.direction, evens, odds, output);
    }
}

/// Transform the arena slots in `span` in place
///
/// Child spans are always allocated after `span`, so splitting the arena at
/// the first child separates the level's output from its scratch.
fn transform_span<T: Sample>(arena: &mut Arena<Complex<T>>, direction: Direction, span: Span) {
    let n = span.len();
    if n == 1 {
        return;
    }

    let half = n / 2;
    let even = arena.allocate(half);
    let odd = arena.allocate(half);
    let children = even.start;

    {
        let (head, tail) = arena.split_at_mut(children);
        deinterleave(&head[span.clone()], &mut tail[..n]);
    }

    transform_span(arena, direction, even);
    transform_span(arena, direction, odd);

    let (head, tail) = arena.split_at_mut(children);
    let (evens, odds) = tail[..n].split_at(half);
    butterfly(direction, evens, odds, &mut head[span]);
}

/// Even-indexed samples of `src` go to the first half of `dst`, odd-indexed
/// samples to the second half.
fn deinterleave<S: Copy>(src: &[S], dst: &mut [S]) {
    let (evens, odds) = dst.split_at_mut(src.len() / 2);
    for ((pair, even), odd) in src.chunks_exact(2).zip(evens.iter_mut()).zip(odds.iter_mut()) {
        *even = pair[0];
        *odd = pair[1];
    }
}

/// Merge two half-length spectra into `output`
///
/// The twiddle is advanced by one complex multiply per bin, so each merge
/// costs a single `sin`/`cos` pair.
fn butterfly<T: Sample>(
    direction: Direction,
    evens: &[Complex<T>],
    odds: &[Complex<T>],
    output: &mut [Complex<T>],
) {
    let half = evens.len();
    let rotation = Complex::from_polar(T::one(), direction.rotation_angle::<T>(2 * half));
    let two = T::one() + T::one();

    let mut twiddle = Complex::new(T::one(), T::zero());
    let (lower, upper) = output.split_at_mut(half);

    for (((&even, &odd), lo), hi) in evens.iter().zip(odds).zip(lower).zip(upper) {
        let product = twiddle * odd;
        let (sum, diff) = (even + product, even - product);

        match direction {
            Direction::Forward => {
                *lo = sum;
                *hi = diff;
            }
            Direction::Inverse => {
                *lo = sum.unscale(two);
                *hi = diff.unscale(two);
            }
        }

        twiddle = twiddle * rotation;
    }
}
