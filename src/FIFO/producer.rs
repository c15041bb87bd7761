// In src/FIFO/producer.rs
use crate::Core::gray::IndexCodec;
use crate::Core::relay::Relay;
use crate::FIFO::Buffer::Shared;
use std::sync::Arc;

/// The write-domain half of a FIFO.
///
/// Owns the write index and the registered `full` flag. The consumer's
/// position is only known through a two-stage relay of its Gray-coded read
/// index, so `full` may stay set for up to two ticks after room appears but
/// is never clear while the ring has no free slot.
pub struct Producer {
    pub(crate) shared: Arc<Shared>,
    pub(crate) codec: IndexCodec,
    /// Binary write index, `N` bits.
    pub(crate) widx: u64,
    /// `encode(widx)`, the value last published to the consumer.
    pub(crate) widx_gray: u64,
    /// Registered full flag, as of the last `advance`.
    pub(crate) full: bool,
    /// Relay of the consumer's reflected read index.
    pub(crate) read_sync: Relay,
    /// Local advances since construction or the last reset.
    pub(crate) ticks: u64,
}

impl Producer {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        let codec = IndexCodec::for_capacity(shared.config.capacity);
        Self {
            shared,
            codec,
            widx: 0,
            widx_gray: 0,
            full: false,
            read_sync: Relay::new(),
            ticks: 0,
        }
    }

    /// One write-domain tick.
    ///
    /// If `push_requested` and the FIFO was not full as of the previous tick,
    /// `data` is stored at the current write address and the write index
    /// steps. Either way the consumer's pointer is shifted through the relay
    /// and `full` is recomputed.
    ///
    /// # Returns
    /// * `true` if `data` was committed
    /// * `false` if no push was requested or the push was rejected
    pub fn advance(&mut self, push_requested: bool, data: u64) -> bool {
        let accepted = push_requested && !self.full;

        let next_widx = if accepted {
            self.shared.ring.write(self.widx & self.codec.address_mask(), data);
            self.codec.increment(self.widx)
        } else {
            if push_requested {
                tracing::trace!(widx = self.widx, "push rejected: fifo full");
            }
            self.widx
        };

        let next_gray = self.codec.encode(next_widx);
        if accepted {
            self.shared.wires.publish_write(next_gray);
        }
        self.widx = next_widx;
        self.widx_gray = next_gray;

        self.read_sync.sample(&self.shared.wires.read_gray);

        self.full = next_gray == self.codec.invert_top_two_bits(self.read_sync.synchronized());
        self.ticks += 1;
        accepted
    }

    /// Shorthand for `advance(true, data)`.
    #[inline]
    pub fn push(&mut self, data: u64) -> bool {
        self.advance(true, data)
    }

    /// Registered full flag.
    #[inline]
    pub fn full(&self) -> bool {
        self.full
    }

    /// Return this domain to its power-on state.
    ///
    /// The write index, its published Gray form and both relay stages go to
    /// zero and `full` clears. The consumer is untouched; it sees the new
    /// write pointer through its own relay like any other update.
    pub fn reset(&mut self) {
        tracing::debug!(widx = self.widx, ticks = self.ticks, "producer reset");
        self.widx = 0;
        self.widx_gray = 0;
        self.shared.wires.publish_write(0);
        self.read_sync.clear();
        self.full = false;
        self.ticks = 0;
    }

    /// Binary write index.
    pub fn index(&self) -> u64 {
        self.widx
    }

    /// Gray-coded write index as last published.
    pub fn reflected_index(&self) -> u64 {
        self.widx_gray
    }

    /// The consumer's read index as this domain currently trusts it (stage 2, decoded).
    pub fn synchronized_foreign(&self) -> u64 {
        self.codec.decode(self.read_sync.synchronized())
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
