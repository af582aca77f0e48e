//! Fixed-capacity scratch arena for recursive transforms
//!
//! Slots are handed out by a bump cursor as index spans into one owned
//! buffer and reclaimed all at once by [`Arena::reset`]. There is no
//! per-span deallocation.

use std::ops::Range;

/// Span of contiguous slots handed out by [`Arena::allocate`]
pub type Span = Range<usize>;

/// Bump allocator over a fixed buffer of slots
///
/// Not safe for concurrent use. Spans taken before a [`reset`](Arena::reset)
/// refer to slots that the next allocation round will overwrite.
pub struct Arena<S> {
    /// Backing storage, allocated once and never resized
    slots: Vec<S>,

    /// Number of slots handed out since the last reset
    offset: usize,
}

impl<S: Copy + Default> Arena<S> {
    /// Create an arena
    ///
    /// # Arguments
    /// * `capacity` - Number of slots, all default-initialized up front
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![S::default(); capacity],
            offset: 0,
        }
    }

    /// Hand out the next `length` slots
    ///
    /// # Panics
    /// If fewer than `length` slots remain. Owners size their arena so this
    /// cannot happen; reaching it means the sizing is wrong.
    pub fn allocate(&mut self, length: usize) -> Span {
        let end = match self.offset.checked_add(length) {
            Some(end) if end <= self.slots.len() => end,
            _ => panic!(
                "arena exhausted: requested {} slots with {} of {} remaining",
                length,
                self.remaining(),
                self.slots.len()
            ),
        };

        let span = self.offset..end;
        self.offset = end;
        span
    }

    /// Rewind the cursor; slot contents are left as they are
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Slots covered by `span`
    ///
    /// # Panics
    /// If `span` reaches past the capacity.
    pub fn get(&self, span: Span) -> &[S] {
        &self.slots[span]
    }

    /// Mutable view of the slots covered by `span` (see [`get`](Self::get))
    pub fn get_mut(&mut self, span: Span) -> &mut [S] {
        &mut self.slots[span]
    }

    /// Split the whole buffer at `mid`
    ///
    /// Spans allocated after `mid` lie entirely in the second half, which lets
    /// a caller read a parent span while writing child spans (or vice versa).
    pub fn split_at_mut(&mut self, mid: usize) -> (&mut [S], &mut [S]) {
        self.slots.split_at_mut(mid)
    }

    /// Total capacity in slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots used since last reset
    pub fn used(&self) -> usize {
        self.offset
    }

    /// Remaining available slots
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn allocate_advances_cursor() {
        let mut arena = Arena::<Complex<f64>>::new(10);
        assert_eq!(arena.capacity(), 10);

        let a = arena.allocate(4);
        assert_eq!(a, 0..4);
        assert_eq!(arena.used(), 4);

        let b = arena.allocate(6);
        assert_eq!(b, 4..10);
        assert_eq!(arena.remaining(), 0);
    }

    #[test]
    fn reset_rewinds_without_clearing() {
        let mut arena = Arena::<Complex<f64>>::new(4);
        let span = arena.allocate(2);
        arena.get_mut(span)[1] = Complex::new(3.0, -1.0);

        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.remaining(), 4);

        // Contents are not zeroed by a reset
        let span = arena.allocate(2);
        assert_eq!(arena.get(span)[1], Complex::new(3.0, -1.0));
    }

    #[test]
    fn zero_length_allocation() {
        let mut arena = Arena::<f32>::new(0);
        let span = arena.allocate(0);
        assert!(span.is_empty());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn split_separates_parent_and_children() {
        let mut arena = Arena::<f64>::new(6);
        let parent = arena.allocate(2);
        let child = arena.allocate(4);

        let (head, tail) = arena.split_at_mut(child.start);
        head[parent].copy_from_slice(&[1.0, 2.0]);
        tail[..child.len()].fill(7.0);

        assert_eq!(arena.get(0..6), &[1.0, 2.0, 7.0, 7.0, 7.0, 7.0]);
    }

    #[test]
    #[should_panic(expected = "arena exhausted")]
    fn exhaustion_is_fatal() {
        let mut arena = Arena::<f64>::new(3);
        arena.allocate(2);
        arena.allocate(2);
    }
}
