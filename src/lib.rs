// Module naming follows project convention (FIFO = the dual-domain first-in first-out buffer)
#[allow(non_snake_case)]
pub mod FIFO;

#[allow(non_snake_case)]
pub mod Core {
    pub mod clock;
    pub mod error;
    pub mod gray;
    pub mod relay;

    pub use clock::{DualClock, Edge};
    pub use error::FifoError;
    pub use gray::IndexCodec;
    pub use relay::Relay;
}

#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

pub use Core::FifoError;
pub use FIFO::{Consumer, FifoBuilder, Producer};
