//! Application layer: builds chains and renders what they report
//!
//! This layer orchestrates the domain components; it does no terminal I/O.

pub mod error;
pub mod report;
pub mod service;

pub use error::{ApplicationError, ApplicationResult};
pub use report::{to_json, ChainReport, OutputFormat};
pub use service::{ChainService, Variant};
