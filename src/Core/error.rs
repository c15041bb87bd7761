/// Construction-time failures.
///
/// Flow control (a push into a full FIFO, a pop from an empty one) is never
/// reported here; those are ordinary results of `advance`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FifoError {
    #[error("capacity {capacity} is not a power of two")]
    CapacityNotPowerOfTwo { capacity: usize },

    #[error("capacity {capacity} is below the minimum of 2 slots")]
    CapacityTooSmall { capacity: usize },

    #[error("capacity {capacity} exceeds the largest addressable slot array")]
    CapacityTooLarge { capacity: usize },

    #[error("failed to allocate {capacity} slots")]
    AllocationFailed { capacity: usize },

    #[error("slot width {width} is outside 1..=64 bits")]
    WidthOutOfRange { width: u32 },
}
