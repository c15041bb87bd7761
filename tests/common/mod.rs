// Shared testbench: drives a Producer and a Consumer from one DualClock,
// holding write/read enables the way a simulator holds input signals.
#![allow(dead_code)]

use dmxp_async_fifo::Core::{DualClock, Edge};
use dmxp_async_fifo::{Consumer, FifoBuilder, Producer};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// What one read edge observed, sampled before the edge took effect.
#[derive(Debug, Copy, Clone)]
pub struct ReadSample {
    pub popped: bool,
    pub data: u64,
}

pub struct Testbench {
    pub producer: Producer,
    pub consumer: Consumer,
    pub clock: DualClock,
    pub wen: bool,
    pub wdata: u64,
    pub ren: bool,
    /// Every item the consumer accepted, in order.
    pub received: Vec<u64>,
    /// Every item the producer accepted, in order.
    pub sent: Vec<u64>,
}

impl Testbench {
    pub fn new(capacity: usize, write_period: u64, read_period: u64) -> Self {
        init_tracing();
        let (producer, consumer) = FifoBuilder::new()
            .with_capacity(capacity)
            .with_width(8)
            .build()
            .expect("valid geometry");
        Self {
            producer,
            consumer,
            clock: DualClock::new(write_period, read_period),
            wen: false,
            wdata: 0,
            ren: false,
            received: Vec::new(),
            sent: Vec::new(),
        }
    }

    pub fn reset_both(&mut self) {
        self.producer.reset();
        self.consumer.reset();
        self.wen = false;
        self.ren = false;
    }

    fn write_edge(&mut self) {
        if self.producer.advance(self.wen, self.wdata) {
            self.sent.push(self.wdata);
        }
    }

    fn read_edge(&mut self) -> ReadSample {
        let popped = self.ren && !self.consumer.empty();
        let data = self.consumer.advance(self.ren);
        if popped {
            self.received.push(data);
        }
        ReadSample { popped, data }
    }

    /// Run the clocks until the next edge and apply it.
    pub fn step(&mut self) -> (Edge, Option<ReadSample>) {
        let edge = self.clock.next_edge();
        if edge.is_write() {
            self.write_edge();
        }
        let sample = edge.is_read().then(|| self.read_edge());
        (edge, sample)
    }

    /// Run until the write clock has risen once more.
    pub fn rising_edge_w(&mut self) {
        loop {
            let (edge, _) = self.step();
            if edge.is_write() {
                return;
            }
        }
    }

    /// Run until the read clock has risen once more; returns that edge's sample.
    pub fn rising_edge_r(&mut self) -> ReadSample {
        loop {
            if let (_, Some(sample)) = self.step() {
                return sample;
            }
        }
    }

    pub fn cycles_w(&mut self, n: usize) {
        for _ in 0..n {
            self.rising_edge_w();
        }
    }

    pub fn cycles_r(&mut self, n: usize) {
        for _ in 0..n {
            self.rising_edge_r();
        }
    }

    /// Items currently held according to the two authoritative indices.
    pub fn occupancy(&self) -> u64 {
        occupancy(&self.producer, &self.consumer)
    }
}

/// `(widx - ridx) mod 2·capacity`.
pub fn occupancy(producer: &Producer, consumer: &Consumer) -> u64 {
    let modulus = 2 * producer.capacity() as u64;
    producer.index().wrapping_sub(consumer.index()) & (modulus - 1)
}
