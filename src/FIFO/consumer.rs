// src/FIFO/consumer.rs

use crate::Core::gray::IndexCodec;
use crate::Core::relay::Relay;
use crate::FIFO::Buffer::Shared;
use std::sync::Arc;

/// The read-domain half of a FIFO.
///
/// Owns the read index and the registered `empty` flag. Mirrors
/// [`Producer`](super::Producer): the write pointer arrives through a
/// two-stage relay, so `empty` may stay set for up to two ticks after data
/// lands but is never clear while nothing is readable.
pub struct Consumer {
    pub(crate) shared: Arc<Shared>,
    pub(crate) codec: IndexCodec,
    pub(crate) ridx: u64,
    pub(crate) ridx_gray: u64,
    pub(crate) empty: bool,
    /// Relay of the producer's reflected write index.
    pub(crate) write_sync: Relay,
    pub(crate) ticks: u64,
}

impl Consumer {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        let codec = IndexCodec::for_capacity(shared.config.capacity);
        Self {
            shared,
            codec,
            ridx: 0,
            ridx_gray: 0,
            empty: true,
            write_sync: Relay::new(),
            ticks: 0,
        }
    }

    /// One read-domain tick.
    ///
    /// Returns the slot at the current read address, sampled before the index
    /// moves. The value is only a real item when `empty` was clear going into
    /// this call; otherwise it is stale and must be ignored.
    pub fn advance(&mut self, pop_requested: bool) -> u64 {
        let data = self.shared.ring.read(self.ridx & self.codec.address_mask());
        let accepted = pop_requested && !self.empty;

        let next_ridx = if accepted {
            self.codec.increment(self.ridx)
        } else {
            if pop_requested {
                tracing::trace!(ridx = self.ridx, "pop rejected: fifo empty");
            }
            self.ridx
        };

        let next_gray = self.codec.encode(next_ridx);
        if accepted {
            self.shared.wires.publish_read(next_gray);
        }
        self.ridx = next_ridx;
        self.ridx_gray = next_gray;

        self.write_sync.sample(&self.shared.wires.write_gray);

        self.empty = next_gray == self.write_sync.synchronized();
        self.ticks += 1;
        data
    }

    /// Request a pop on this tick.
    ///
    /// # Returns
    /// * `Some(data)` if an item was consumed
    /// * `None` if the FIFO was empty as of the previous tick
    pub fn pop(&mut self) -> Option<u64> {
        let available = !self.empty;
        let data = self.advance(true);
        available.then_some(data)
    }

    /// Registered empty flag.
    #[inline]
    pub fn empty(&self) -> bool {
        self.empty
    }

    /// Return this domain to its power-on state: read index, published Gray
    /// form and relay stages to zero, `empty` set. The producer is untouched.
    pub fn reset(&mut self) {
        tracing::debug!(ridx = self.ridx, ticks = self.ticks, "consumer reset");
        self.ridx = 0;
        self.ridx_gray = 0;
        self.shared.wires.publish_read(0);
        self.write_sync.clear();
        self.empty = true;
        self.ticks = 0;
    }

    /// Binary read index.
    pub fn index(&self) -> u64 {
        self.ridx
    }

    /// Gray-coded read index as last published.
    pub fn reflected_index(&self) -> u64 {
        self.ridx_gray
    }

    /// The producer's write index as this domain currently trusts it (stage 2, decoded).
    pub fn synchronized_foreign(&self) -> u64 {
        self.codec.decode(self.write_sync.synchronized())
    }

    pub fn capacity(&self) -> usize {
        self.shared.config.capacity
    }

    pub fn width(&self) -> u32 {
        self.shared.config.width
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
