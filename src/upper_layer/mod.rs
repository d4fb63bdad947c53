//! Upper layer: the entry point of the hal chain

pub mod osal;

pub use osal::Osal;
