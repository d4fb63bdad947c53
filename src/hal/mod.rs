//! Hardware abstraction layer: the lower two levels of the hal chain

pub mod crypto;
pub mod spi;

pub use crypto::Crypto;
pub use spi::Spi;
