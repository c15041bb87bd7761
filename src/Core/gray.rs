//! Reflected-binary (Gray) index codec.
//!
//! Pointers crossing between the producer and consumer domains are exchanged
//! in Gray form: two consecutive indices differ in exactly one bit, so a value
//! sampled while it is changing can only ever be the old or the new index.
//!
//! Indices are `N` bits wide where `N = log2(capacity) + 1`. The low `N - 1`
//! bits address the ring; the top bit counts laps so that "full" and "empty"
//! can be told apart when the address bits match.

/// `N`-bit index arithmetic and Gray conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexCodec {
    /// Index width `N` in bits (address bits + 1 wrap bit).
    bits: u32,
}

impl IndexCodec {
    /// Codec for a ring of `capacity` slots.
    ///
    /// `capacity` is expected to be a validated power of two; see
    /// [`FifoConfig::new`](crate::FIFO::Structs::FifoConfig::new).
    pub fn for_capacity(capacity: usize) -> Self {
        Self {
            bits: capacity.trailing_zeros() + 1,
        }
    }

    /// Codec for raw `N`-bit indices, 1..=64.
    #[cfg(test)]
    pub(crate) fn with_bits(bits: u32) -> Self {
        assert!((1..=64).contains(&bits), "index width must be 1..=64 bits");
        Self { bits }
    }

    /// Index width `N`.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of bits used to address a slot (`N - 1`).
    #[inline]
    pub fn address_bits(&self) -> u32 {
        self.bits - 1
    }

    /// All `N` index bits set.
    #[inline]
    pub fn mask(&self) -> u64 {
        if self.bits == 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Mask selecting the slot address from an index.
    #[inline]
    pub fn address_mask(&self) -> u64 {
        self.mask() >> 1
    }

    /// `x + 1` modulo `2^N`.
    #[inline]
    pub fn increment(&self, x: u64) -> u64 {
        x.wrapping_add(1) & self.mask()
    }

    /// Binary to reflected form: `b ^ (b >> 1)`.
    #[inline]
    pub fn encode(&self, binary: u64) -> u64 {
        let b = binary & self.mask();
        b ^ (b >> 1)
    }

    /// Reflected form back to binary, resolved from the most significant bit
    /// down: `b[N-1] = r[N-1]`, `b[i] = b[i+1] ^ r[i]`.
    pub fn decode(&self, reflected: u64) -> u64 {
        let r = reflected & self.mask();
        let top = self.bits - 1;
        let mut binary = r & (1u64 << top);
        let mut prev = (r >> top) & 1;
        for i in (0..top).rev() {
            let bit = prev ^ ((r >> i) & 1);
            binary |= bit << i;
            prev = bit;
        }
        binary
    }

    /// Flips bits `N-1` and `N-2`, leaving the rest untouched.
    ///
    /// A Gray write index equals the inverted-top-two form of the Gray read
    /// index exactly when the writer is one full lap ahead.
    #[inline]
    pub fn invert_top_two_bits(&self, x: u64) -> u64 {
        let top = self.bits - 1;
        let two = if top == 0 { 1 } else { (1u64 << top) | (1u64 << (top - 1)) };
        (x ^ two) & self.mask()
    }
}
