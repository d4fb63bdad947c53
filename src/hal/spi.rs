//! SPI component: leaf of the hal chain

use tracing::trace;

use crate::build_info;
use crate::domain::{ascii_branches, tagged, BaseComponent, Component, DependencyNode, LibraryVersion};

pub const TAG: &str = "spi";

/// Serial peripheral interface component. Owns nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spi;

impl Spi {
    pub fn new() -> Self {
        Self
    }

    /// Libraries this component links against.
    pub fn libraries(&self) -> Vec<LibraryVersion> {
        vec![build_info::itertools(), build_info::serde_json()]
    }
}

impl Component for Spi {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn get_info(&self) -> String {
        format!(
            "spi - SPI HAL Component{}",
            ascii_branches("      ", self.libraries())
        )
    }

    fn dependency_node(&self) -> DependencyNode {
        DependencyNode::new(TAG, "SPI HAL component").with_libraries(self.libraries())
    }
}

impl BaseComponent for Spi {
    fn format_message(&self, msg: &str) -> String {
        trace!("spi: format_message len={}", msg.len());
        tagged(TAG, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_spi_when_getting_info_then_lists_libraries_with_versions() {
        let info = Spi::new().get_info();
        let expected = format!(
            "spi - SPI HAL Component\n      |-- {}\n      +-- {}",
            build_info::itertools(),
            build_info::serde_json()
        );
        assert_eq!(info, expected);
    }
}
