//! Logical dependency tree and its text renderings

use std::fmt;

use itertools::{Itertools, Position};
use serde::Serialize;
use termtree::Tree;

use crate::domain::LibraryVersion;

/// Root label of every dependency chain listing.
pub const CHAIN_ROOT: &str = "Main Application";

/// One component in the owner graph, with the libraries it requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    pub name: String,
    pub description: String,
    pub libraries: Vec<LibraryVersion>,
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            libraries: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_libraries(mut self, libraries: impl IntoIterator<Item = LibraryVersion>) -> Self {
        self.libraries.extend(libraries);
        self
    }

    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.description)
    }

    /// Libraries are listed before child components.
    pub fn to_tree(&self) -> Tree<String> {
        let mut tree = Tree::new(self.label());
        for library in &self.libraries {
            tree.push(Tree::new(library.label()));
        }
        for child in &self.children {
            tree.push(child.to_tree());
        }
        tree
    }
}

/// Ordered, human-readable listing of a dependency tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyChain {
    lines: Vec<String>,
}

impl DependencyChain {
    /// Render `node` under the [`CHAIN_ROOT`] label.
    pub fn from_root(node: &DependencyNode) -> Self {
        let mut tree = Tree::new(CHAIN_ROOT.to_string());
        tree.push(node.to_tree());
        let lines = tree.to_string().lines().map(str::to_string).collect();
        Self { lines }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// ASCII branches used by the hal info strings: `|--` for every entry but the last, `+--` for the last.
///
/// Each entry starts on a new line prefixed with `indent`.
pub fn ascii_branches<I, D>(indent: &str, entries: I) -> String
where
    I: IntoIterator<Item = D>,
    D: fmt::Display,
{
    entries
        .into_iter()
        .with_position()
        .map(|(position, entry)| {
            let branch = match position {
                Position::Last | Position::Only => "+--",
                Position::First | Position::Middle => "|--",
            };
            format!("\n{indent}{branch} {entry}")
        })
        .join("")
}
