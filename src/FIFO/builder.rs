use super::Buffer::Shared;
use super::Structs::FifoConfig;
use super::{Consumer, Producer};
use crate::Core::error::FifoError;
use std::sync::Arc;

pub struct FifoBuilder {
    capacity: usize,
    width: u32,
}

impl Default for FifoBuilder {
    fn default() -> Self {
        Self {
            capacity: 16, // 16 slots
            width: 8,     // one byte per slot
        }
    }
}

impl FifoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Validate the geometry and split the FIFO into its two domains.
    ///
    /// Both halves start out reset: `full == false`, `empty == true`.
    pub fn build(self) -> Result<(Producer, Consumer), FifoError> {
        let config = FifoConfig::new(self.capacity, self.width).inspect_err(|e| {
            tracing::debug!(capacity = self.capacity, width = self.width, "rejected fifo geometry: {e}");
        })?;
        let shared = Arc::new(Shared::new(config).inspect_err(|e| {
            tracing::debug!(capacity = config.capacity, "slot allocation failed: {e}");
        })?);
        tracing::debug!(capacity = config.capacity, width = config.width, "fifo created");
        Ok((Producer::new(Arc::clone(&shared)), Consumer::new(shared)))
    }
}
