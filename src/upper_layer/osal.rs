//! OS abstraction layer: top of the hal chain

use tracing::{debug, instrument};

use crate::build_info;
use crate::domain::{ascii_branches, tagged, Component, DependencyNode, MiddleComponent, TopComponent};
use crate::hal::Crypto;

pub const TAG: &str = "osal";

/// Owns [`Crypto`], which owns [`crate::hal::Spi`].
#[derive(Debug, Default)]
pub struct Osal {
    crypto: Crypto,
}

impl Osal {
    pub fn new() -> Self {
        debug!("osal: constructing with owned crypto");
        Self {
            crypto: Crypto::new(),
        }
    }
}

impl Component for Osal {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn get_info(&self) -> String {
        let entries = [build_info::itertools().to_string(), self.crypto.get_info()];
        format!("osal - OS Abstraction Layer{}", ascii_branches("  ", entries))
    }

    fn dependency_node(&self) -> DependencyNode {
        DependencyNode::new(TAG, "OS abstraction layer")
            .with_libraries([build_info::itertools()])
            .with_child(self.crypto.dependency_node())
    }
}

impl TopComponent for Osal {
    #[instrument(level = "debug", skip(self))]
    fn execute(&self, command: &str) -> String {
        let processed = self.crypto.process(command);
        tagged(TAG, &format!("Final result: {processed}"))
    }
}
