//! ProjectB: middleware component owning ProjectA

use tracing::debug;

use crate::domain::{tagged, BaseComponent, Component, DependencyNode, MiddleComponent};
use crate::project::ComponentA;

pub const TAG: &str = "ProjectB";

#[derive(Debug, Default)]
pub struct ComponentB {
    component_a: ComponentA,
}

impl ComponentB {
    pub fn new() -> Self {
        debug!("ProjectB: constructing with owned ProjectA");
        Self {
            component_a: ComponentA::new(),
        }
    }

    pub fn process_with_a(&self, input: &str) -> String {
        let formatted = self.component_a.format_message(input);
        tagged(TAG, &format!("Processed: {formatted}"))
    }
}

impl Component for ComponentB {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn get_info(&self) -> String {
        format!(
            "ProjectB - Middleware Component (uses {})",
            self.component_a.get_info()
        )
    }

    fn dependency_node(&self) -> DependencyNode {
        DependencyNode::new(TAG, "Middleware component").with_child(self.component_a.dependency_node())
    }
}

impl MiddleComponent for ComponentB {
    fn process(&self, input: &str) -> String {
        self.process_with_a(input)
    }
}
