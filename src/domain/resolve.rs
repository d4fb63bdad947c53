//! Transitive library resolution over a dependency tree
//!
//! Every component may request a library at its own version. Walking the
//! tree owner-first collects all requests; per library the highest requested
//! version is the one the whole chain is built against.

use itertools::Itertools;
use semver::Version;
use serde::Serialize;
use tracing::debug;

use crate::domain::DependencyNode;

/// One component's request for a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryRequest {
    pub component: String,
    pub version: Version,
}

/// The version selected for a library, with every request that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLibrary {
    pub name: String,
    pub version: Version,
    /// Requests in tree order (owner before child)
    pub requests: Vec<LibraryRequest>,
}

impl ResolvedLibrary {
    /// Whether `request` asked for an older version than the resolved one.
    pub fn was_upgraded(&self, request: &LibraryRequest) -> bool {
        request.version < self.version
    }

    /// Requests that asked for an older version than the resolved one.
    pub fn upgraded(&self) -> impl Iterator<Item = &LibraryRequest> {
        self.requests.iter().filter(|r| self.was_upgraded(r))
    }

    pub fn is_upgrade(&self) -> bool {
        self.upgraded().next().is_some()
    }
}

/// Resolve all library requests below `root`, sorted by library name.
pub fn resolve(root: &DependencyNode) -> Vec<ResolvedLibrary> {
    let mut requests = Vec::new();
    collect_requests(root, &mut requests);
    debug!("resolve: {} library requests below {}", requests.len(), root.name);

    requests
        .into_iter()
        .into_group_map()
        .into_iter()
        .filter_map(|(name, requests)| {
            let version = requests.iter().map(|r| &r.version).max()?.clone();
            Some(ResolvedLibrary {
                name,
                version,
                requests,
            })
        })
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect()
}

fn collect_requests(node: &DependencyNode, out: &mut Vec<(String, LibraryRequest)>) {
    for library in &node.libraries {
        out.push((
            library.name.clone(),
            LibraryRequest {
                component: node.name.clone(),
                version: library.version.clone(),
            },
        ));
    }
    for child in &node.children {
        collect_requests(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LibraryVersion;

    #[test]
    fn given_same_library_at_two_versions_when_resolving_then_highest_wins() {
        let root = DependencyNode::new("top", "Top")
            .with_libraries([LibraryVersion::from_packed("fmt", 100_201)])
            .with_child(
                DependencyNode::new("base", "Base")
                    .with_libraries([LibraryVersion::from_packed("fmt", 120_100)]),
            );

        let resolved = resolve(&root);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].version, Version::new(12, 1, 0));
        assert_eq!(resolved[0].requests.len(), 2);
        assert_eq!(resolved[0].requests[0].component, "top");
        let upgraded: Vec<_> = resolved[0].upgraded().map(|r| r.component.as_str()).collect();
        assert_eq!(upgraded, vec!["top"]);
    }

    #[test]
    fn given_distinct_libraries_when_resolving_then_sorted_by_name() {
        let root = DependencyNode::new("top", "Top").with_libraries([
            LibraryVersion::from_packed("zeta", 100),
            LibraryVersion::from_packed("alpha", 100),
        ]);

        let names: Vec<_> = resolve(&root).into_iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn given_single_request_when_resolving_then_not_an_upgrade() {
        let root = DependencyNode::new("top", "Top")
            .with_libraries([LibraryVersion::from_packed("solo", 10_000)]);

        let resolved = resolve(&root);

        assert!(!resolved[0].is_upgrade());
    }

    #[test]
    fn given_node_without_libraries_when_resolving_then_empty() {
        assert!(resolve(&DependencyNode::new("bare", "Bare")).is_empty());
    }
}
