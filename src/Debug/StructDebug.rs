use crate::FIFO::Buffer::RingBuffer;
use crate::FIFO::{Consumer, Producer};
use std::fmt;

/// Debug function for Producer
///
/// Shows the local write index in binary and Gray form, the registered full
/// flag and the read index as currently synchronized into the write domain.
pub fn debug_producer(producer: &Producer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Producer")
        .field("capacity", &producer.capacity())
        .field("width", &producer.width())
        .field("widx", &producer.widx)
        .field("widx_gray", &format_args!("{:#b}", producer.widx_gray))
        .field("full", &producer.full)
        .field("read_sync", &producer.read_sync)
        .field("ticks", &producer.ticks)
        .finish()
}

/// Debug function for Consumer
pub fn debug_consumer(consumer: &Consumer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Consumer")
        .field("capacity", &consumer.capacity())
        .field("width", &consumer.width())
        .field("ridx", &consumer.ridx)
        .field("ridx_gray", &format_args!("{:#b}", consumer.ridx_gray))
        .field("empty", &consumer.empty)
        .field("write_sync", &consumer.write_sync)
        .field("ticks", &consumer.ticks)
        .finish()
}

/// Debug function for RingBuffer
///
/// Displays geometry only; slot contents belong to whichever domain the
/// indices currently assign them to.
pub fn debug_ring_buffer(buffer: &RingBuffer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RingBuffer")
        .field("capacity", &buffer.capacity)
        .field("width_mask", &format_args!("{:#x}", buffer.width_mask))
        .finish_non_exhaustive()
}
