//! ProjectC: top-level component owning ProjectB

use tracing::{debug, instrument};

use crate::build_info;
use crate::domain::{tagged, Component, DependencyNode, MiddleComponent, TopComponent};
use crate::project::ComponentB;

pub const TAG: &str = "ProjectC";

#[derive(Debug, Default)]
pub struct ComponentC {
    component_b: ComponentB,
}

impl ComponentC {
    pub fn new() -> Self {
        debug!("ProjectC: constructing with owned ProjectB");
        Self {
            component_b: ComponentB::new(),
        }
    }
}

impl Component for ComponentC {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn get_info(&self) -> String {
        format!(
            "ProjectC - Top-level Component (uses {})",
            self.component_b.get_info()
        )
    }

    // Requests an older itertools than ProjectA does; resolution upgrades it.
    fn dependency_node(&self) -> DependencyNode {
        DependencyNode::new(TAG, "Top-level component")
            .with_libraries([build_info::itertools_legacy()])
            .with_child(self.component_b.dependency_node())
    }
}

impl TopComponent for ComponentC {
    #[instrument(level = "debug", skip(self))]
    fn execute(&self, command: &str) -> String {
        let processed = self.component_b.process(command);
        tagged(TAG, &format!("Final result: {processed}"))
    }
}
