// This is the slot storage shared by the producer and consumer domains

use std::sync::atomic::AtomicU64;

/// Fixed-capacity array of payload slots.
///
/// ### Concurrency Design:
/// - Only the producer writes a slot, only the consumer reads one.
/// - Which slot each side may touch is decided purely by the exchanged
///   indices; the cells are atomics only so that the physical aliasing of a
///   slot between the two domains is never a data race.
/// - Cell access is `Relaxed`. Ordering comes from the `Release`/`Acquire`
///   pair on the published pointer words in [`PointerWires`](super::layout::PointerWires).
pub struct RingBuffer {
    /// One cell per slot, zero-initialised.
    pub(crate) slots: Box<[AtomicU64]>,

    /// The capacity of the buffer (number of slots).
    pub(crate) capacity: usize,

    /// A bitmask used to wrap addresses around the buffer.
    /// Calculated as `capacity - 1`.
    pub(crate) mask: usize,

    /// Keeps the low `width` bits of every stored payload.
    pub(crate) width_mask: u64,
}
