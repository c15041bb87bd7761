use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::Relaxed;

use super::Buffer::RingBuffer;
use crate::Core::error::FifoError;
use crate::FIFO::Structs::FifoConfig;

impl RingBuffer {
    /// Allocate `config.capacity` slots, all holding zero.
    ///
    /// # Errors
    /// `FifoError::AllocationFailed` if the allocator cannot supply the slot array.
    pub fn new(config: &FifoConfig) -> Result<Self, FifoError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(config.capacity)
            .map_err(|_| FifoError::AllocationFailed {
                capacity: config.capacity,
            })?;
        slots.extend((0..config.capacity).map(|_| AtomicU64::new(0)));
        Ok(Self {
            slots: slots.into_boxed_slice(),
            capacity: config.capacity,
            mask: config.capacity - 1,
            width_mask: config.width_mask(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store `value` at `addr mod capacity`, truncated to the slot width.
    ///
    /// Unconditional: the producer only calls this once its full guard passed.
    #[inline]
    pub fn write(&self, addr: u64, value: u64) {
        let idx = (addr as usize) & self.mask;
        self.slots[idx].store(value & self.width_mask, Relaxed);
    }

    /// Current contents at `addr mod capacity`, with no latching.
    #[inline]
    pub fn read(&self, addr: u64) -> u64 {
        let idx = (addr as usize) & self.mask;
        self.slots[idx].load(Relaxed)
    }

    /// Copy of every slot in address order.
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Vec<u64> {
        self.slots.iter().map(|s| s.load(Relaxed)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(capacity: usize, width: u32) -> RingBuffer {
        RingBuffer::new(&FifoConfig::new(capacity, width).unwrap()).unwrap()
    }

    #[test]
    fn starts_zeroed() {
        let rb = ring(8, 16);
        assert_eq!(rb.snapshot(), vec![0; 8]);
    }

    #[test]
    fn address_wraps_modulo_capacity() {
        let rb = ring(4, 8);
        rb.write(6, 0x42);
        assert_eq!(rb.read(2), 0x42);
        assert_eq!(rb.read(10), 0x42);
        assert_eq!(rb.snapshot(), vec![0, 0, 0x42, 0]);
    }

    #[test]
    fn payload_truncated_to_width() {
        let rb = ring(4, 4);
        rb.write(0, 0xAB);
        assert_eq!(rb.read(0), 0xB);
    }

    #[test]
    fn read_follows_latest_write() {
        let rb = ring(2, 64);
        rb.write(1, u64::MAX);
        assert_eq!(rb.read(1), u64::MAX);
        rb.write(1, 7);
        assert_eq!(rb.read(1), 7);
    }
}
