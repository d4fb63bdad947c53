//! Domain layer: component roles, dependency trees and library resolution
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod component;
pub mod library;
pub mod resolve;
pub mod tree;

pub use component::{tagged, BaseComponent, Component, MiddleComponent, TopComponent};
pub use library::LibraryVersion;
pub use resolve::{resolve, LibraryRequest, ResolvedLibrary};
pub use tree::{ascii_branches, DependencyChain, DependencyNode, CHAIN_ROOT};
