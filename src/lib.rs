//! Layered component chains with owning delegation
//!
//! Two chains of the same shape are provided: `osal -> crypto -> spi` and
//! `ProjectC -> ProjectB -> ProjectA`. The top component owns the middle one,
//! which owns the base. A call made at the top is delegated down the chain
//! and every level wraps the returned text with its own tag.
//!
//! ```
//! use cpm_chain::domain::TopComponent;
//! use cpm_chain::upper_layer::Osal;
//!
//! let osal = Osal::new();
//! assert_eq!(
//!     osal.execute("Hello"),
//!     "[osal] Final result: [crypto] Processed: [spi] Hello"
//! );
//! ```

pub mod application;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod hal;
pub mod project;
pub mod upper_layer;
pub mod util;
