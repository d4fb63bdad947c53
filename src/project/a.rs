//! ProjectA: base component of the project chain

use serde_json::json;

use crate::build_info;
use crate::domain::{tagged, BaseComponent, Component, DependencyNode, LibraryVersion};

pub const TAG: &str = "ProjectA";

#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentA;

impl ComponentA {
    pub fn new() -> Self {
        Self
    }

    pub fn libraries(&self) -> Vec<LibraryVersion> {
        vec![
            build_info::itertools(),
            build_info::serde_json(),
            build_info::rstest(),
        ]
    }
}

impl Component for ComponentA {
    fn tag(&self) -> &'static str {
        TAG
    }

    /// Reported as a JSON object naming the libraries in use.
    fn get_info(&self) -> String {
        let uses: Vec<String> = self.libraries().into_iter().map(|lib| lib.name).collect();
        json!({
            "component": TAG,
            "description": "Base Component",
            "uses": uses,
        })
        .to_string()
    }

    fn dependency_node(&self) -> DependencyNode {
        DependencyNode::new(TAG, "Base component").with_libraries(self.libraries())
    }
}

impl BaseComponent for ComponentA {
    fn format_message(&self, msg: &str) -> String {
        tagged(TAG, msg)
    }
}
