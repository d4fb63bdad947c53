//! Crypto component: owns the SPI component

use tracing::{debug, trace};

use crate::domain::{ascii_branches, tagged, BaseComponent, Component, DependencyNode, MiddleComponent};
use crate::hal::Spi;

pub const TAG: &str = "crypto";

/// Cryptography component built on top of [`Spi`].
#[derive(Debug, Default)]
pub struct Crypto {
    spi: Spi,
}

impl Crypto {
    pub fn new() -> Self {
        debug!("crypto: constructing with owned spi");
        Self { spi: Spi::new() }
    }

    /// Format `input` through spi and mark it as processed.
    pub fn process_with_spi(&self, input: &str) -> String {
        trace!("crypto: delegating to spi");
        let formatted = self.spi.format_message(input);
        tagged(TAG, &format!("Processed: {formatted}"))
    }
}

impl Component for Crypto {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn get_info(&self) -> String {
        format!(
            "crypto - Cryptography HAL Component{}",
            ascii_branches("    ", [self.spi.get_info()])
        )
    }

    fn dependency_node(&self) -> DependencyNode {
        DependencyNode::new(TAG, "Cryptography HAL component").with_child(self.spi.dependency_node())
    }
}

impl MiddleComponent for Crypto {
    fn process(&self, input: &str) -> String {
        self.process_with_spi(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_input_when_processing_then_wraps_spi_output() {
        assert_eq!(
            Crypto::new().process_with_spi("data"),
            "[crypto] Processed: [spi] data"
        );
    }
}
