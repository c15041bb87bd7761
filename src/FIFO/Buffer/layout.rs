use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Buffer::RingBuffer;
use crate::Core::error::FifoError;
use crate::FIFO::Structs::FifoConfig;

/// The two Gray-coded pointer words crossing between the domains.
///
/// Each word has exactly one writer: the producer publishes `write_gray`,
/// the consumer publishes `read_gray`. The opposite side only samples it
/// through its [`Relay`](crate::Core::relay::Relay).
#[repr(C, align(128))]
pub struct PointerWires {
    /// Reflected write index, published by the producer.
    /// Padded to prevent false sharing with the read pointer.
    pub write_gray: CachePadded<AtomicU64>,

    /// Reflected read index, published by the consumer.
    /// Padded to prevent false sharing with the write pointer.
    pub read_gray: CachePadded<AtomicU64>,
}

impl PointerWires {
    pub fn new() -> Self {
        Self {
            write_gray: CachePadded::new(AtomicU64::new(0)),
            read_gray: CachePadded::new(AtomicU64::new(0)),
        }
    }

    /// `Release` so the slot write that preceded the index step travels with it.
    #[inline]
    pub fn publish_write(&self, gray: u64) {
        self.write_gray.store(gray, Ordering::Release);
    }

    /// `Release` so the slot read that preceded the index step is ordered
    /// before the producer may reuse that slot.
    #[inline]
    pub fn publish_read(&self, gray: u64) {
        self.read_gray.store(gray, Ordering::Release);
    }
}

impl Default for PointerWires {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything both domains hold a reference to.
pub struct Shared {
    pub config: FifoConfig,
    pub ring: RingBuffer,
    pub wires: PointerWires,
}

impl Shared {
    pub fn new(config: FifoConfig) -> Result<Self, FifoError> {
        Ok(Self {
            ring: RingBuffer::new(&config)?,
            wires: PointerWires::new(),
            config,
        })
    }
}
