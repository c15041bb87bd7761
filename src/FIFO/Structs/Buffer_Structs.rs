// This is the validated geometry of one dual-domain FIFO

use crate::Core::error::FifoError;
use std::mem::size_of;
use std::sync::atomic::AtomicU64;

/// Most slots a single allocation can address without exceeding `isize::MAX` bytes.
const SLOT_LIMIT: usize = isize::MAX as usize / size_of::<AtomicU64>();

/// Largest accepted capacity: `SLOT_LIMIT` rounded down to a power of two.
/// Always below `2^63`, so the `N`-bit index keeps its wrap bit inside a `u64`.
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 1 - SLOT_LIMIT.leading_zeros());

/// Widest payload a slot can carry.
pub const MAX_WIDTH: u32 = 64;

/// Geometry shared by both domains. Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FifoConfig {
    /// Number of slots. Always a power of two, at least 2.
    pub capacity: usize,
    /// Payload bits per slot, 1..=64.
    pub width: u32,
}

impl FifoConfig {
    /// Validate a capacity/width pair.
    ///
    /// Capacities that are not a power of two are rejected rather than rounded.
    pub fn new(capacity: usize, width: u32) -> Result<Self, FifoError> {
        if capacity < 2 {
            return Err(FifoError::CapacityTooSmall { capacity });
        }
        if !capacity.is_power_of_two() {
            return Err(FifoError::CapacityNotPowerOfTwo { capacity });
        }
        if capacity > MAX_CAPACITY {
            return Err(FifoError::CapacityTooLarge { capacity });
        }
        if width == 0 || width > MAX_WIDTH {
            return Err(FifoError::WidthOutOfRange { width });
        }
        Ok(Self { capacity, width })
    }

    /// Mask keeping the low `width` bits of a payload.
    #[inline]
    pub fn width_mask(&self) -> u64 {
        if self.width == MAX_WIDTH {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }
}
