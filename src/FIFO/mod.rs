mod builder;
mod consumer;
mod debug;
mod producer;

pub use builder::FifoBuilder;
pub use consumer::Consumer;
pub use producer::Producer;

#[allow(non_snake_case)]
pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub mod layout;
    pub use Buffer::RingBuffer; // re-export for stable path
    pub use layout::{PointerWires, Shared};
}

#[allow(non_snake_case)]
pub mod Structs {
    pub mod Buffer_Structs;
    pub use Buffer_Structs::FifoConfig; // re-export for stable path
}
