//! Component roles in an owning delegation chain
//!
//! A chain is three levels deep: a top component owns a middle component,
//! which owns a base component. Calls enter at the top and are delegated
//! downwards; each level wraps the result it gets back with its own tag.

use crate::domain::{resolve, DependencyChain, DependencyNode, ResolvedLibrary};

/// Behaviour shared by every level of a chain.
pub trait Component {
    /// Identifier used in message tags, e.g. `spi` in `[spi] ...`.
    fn tag(&self) -> &'static str;

    /// Descriptive text for this component and everything it owns.
    fn get_info(&self) -> String;

    /// Logical dependency tree rooted at this component.
    fn dependency_node(&self) -> DependencyNode;
}

/// Leaf of a chain: owns nothing.
pub trait BaseComponent: Component {
    /// Wrap `msg` with this component's tag. Never empty, even for an empty `msg`.
    fn format_message(&self, msg: &str) -> String;
}

/// Owns exactly one base component.
pub trait MiddleComponent: Component {
    /// Format `input` through the owned base component and wrap the result.
    fn process(&self, input: &str) -> String;
}

/// Owns exactly one middle component; the entry point of a chain.
pub trait TopComponent: Component {
    /// Run `command` through the whole chain.
    fn execute(&self, command: &str) -> String;

    /// Listing of the dependency tree, identical on every call.
    fn get_full_dependency_chain(&self) -> Vec<String> {
        DependencyChain::from_root(&self.dependency_node()).into_lines()
    }

    /// Library versions the whole chain is built against.
    fn resolved_libraries(&self) -> Vec<ResolvedLibrary> {
        resolve(&self.dependency_node())
    }
}

/// `[tag] msg`
pub fn tagged(tag: &str, msg: &str) -> String {
    format!("[{tag}] {msg}")
}
