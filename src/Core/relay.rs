//! Two-stage relay of a foreign Gray pointer into the local domain.
//!
//! Each domain keeps one `Relay` for the opposite side's pointer. On every
//! local advance the relay shifts once: `stage2 := stage1`, then
//! `stage1 := sample`. Only `stage2` is consulted, so the visible foreign
//! value is always exactly two local advances old.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Relay {
    stage1: u64,
    stage2: u64,
}

impl Relay {
    pub const fn new() -> Self {
        Self {
            stage1: 0,
            stage2: 0,
        }
    }

    /// Shift in a freshly sampled foreign value.
    #[inline]
    pub fn shift(&mut self, sampled: u64) {
        self.stage2 = self.stage1;
        self.stage1 = sampled;
    }

    /// Sample the published word and shift it in.
    ///
    /// `Acquire` pairs with the publisher's `Release` store, so any slot
    /// traffic the foreign side performed before publishing is visible by the
    /// time the value reaches `stage2`.
    #[inline]
    pub fn sample(&mut self, wire: &AtomicU64) {
        self.shift(wire.load(Ordering::Acquire));
    }

    /// The trusted, synchronized foreign value.
    #[inline]
    pub fn synchronized(&self) -> u64 {
        self.stage2
    }

    #[cfg(test)]
    pub(crate) fn stage1(&self) -> u64 {
        self.stage1
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_surfaces_after_two_shifts() {
        let mut r = Relay::new();
        r.shift(5);
        assert_eq!(r.synchronized(), 0);
        assert_eq!(r.stage1(), 5);
        r.shift(6);
        assert_eq!(r.synchronized(), 5);
        r.shift(6);
        assert_eq!(r.synchronized(), 6);
    }

    #[test]
    fn sample_reads_wire() {
        let wire = AtomicU64::new(3);
        let mut r = Relay::new();
        r.sample(&wire);
        wire.store(7, Ordering::Release);
        r.sample(&wire);
        assert_eq!(r.synchronized(), 3);
        r.sample(&wire);
        assert_eq!(r.synchronized(), 7);
    }

    #[test]
    fn clear_zeroes_both_stages() {
        let mut r = Relay::new();
        r.shift(1);
        r.shift(2);
        r.clear();
        assert_eq!(r, Relay::new());
    }
}
