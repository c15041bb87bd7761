//! Deterministic schedule of two free-running clocks.
//!
//! `DualClock` merges the rising edges of a write clock and a read clock with
//! arbitrary integer periods into one time-ordered stream. It lets a single
//! thread drive a [`Producer`](crate::FIFO::Producer) and a
//! [`Consumer`](crate::FIFO::Consumer) at a fixed rate ratio, e.g. 10 ns
//! against 15 ns.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
    Write,
    Read,
    /// Both clocks rise at the same instant.
    Both,
}

impl Edge {
    pub fn is_write(self) -> bool {
        matches!(self, Edge::Write | Edge::Both)
    }

    pub fn is_read(self) -> bool {
        matches!(self, Edge::Read | Edge::Both)
    }
}

#[derive(Debug, Clone)]
pub struct DualClock {
    write_period: u64,
    read_period: u64,
    next_write: u64,
    next_read: u64,
    now: u64,
    write_edges: u64,
    read_edges: u64,
}

impl DualClock {
    /// # Panics
    /// Panics if either period is zero.
    pub fn new(write_period: u64, read_period: u64) -> Self {
        assert!(write_period > 0 && read_period > 0, "clock periods must be non-zero");
        Self {
            write_period,
            read_period,
            next_write: write_period,
            next_read: read_period,
            now: 0,
            write_edges: 0,
            read_edges: 0,
        }
    }

    /// Advance time to the next rising edge and report which clock(s) rose.
    pub fn next_edge(&mut self) -> Edge {
        let edge = if self.next_write < self.next_read {
            Edge::Write
        } else if self.next_read < self.next_write {
            Edge::Read
        } else {
            Edge::Both
        };

        if edge.is_write() {
            self.now = self.next_write;
            self.next_write += self.write_period;
            self.write_edges += 1;
        }
        if edge.is_read() {
            self.now = self.next_read;
            self.next_read += self.read_period;
            self.read_edges += 1;
        }
        edge
    }

    /// Time of the most recent edge.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn write_edges(&self) -> u64 {
        self.write_edges
    }

    pub fn read_edges(&self) -> u64 {
        self.read_edges
    }
}
