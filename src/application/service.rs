//! Chain service
//!
//! Builds the selected component chain once and answers every query against it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::report::ChainReport;
use crate::application::ApplicationError;
use crate::build_info;
use crate::domain::{ResolvedLibrary, TopComponent};
use crate::project::ComponentC;
use crate::upper_layer::Osal;

/// Which naming of the three-level chain to build.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// osal -> crypto -> spi
    #[default]
    Hal,
    /// ProjectC -> ProjectB -> ProjectA
    Project,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Hal => f.write_str("hal"),
            Variant::Project => f.write_str("project"),
        }
    }
}

impl FromStr for Variant {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hal" => Ok(Variant::Hal),
            "project" => Ok(Variant::Project),
            _ => Err(ApplicationError::InvalidSetting {
                key: "variant",
                value: s.to_string(),
            }),
        }
    }
}

/// Owns the top component of one chain.
pub struct ChainService {
    variant: Variant,
    top: Box<dyn TopComponent>,
}

impl ChainService {
    pub fn new(variant: Variant) -> Self {
        debug!("ChainService: building {variant} chain");
        let top: Box<dyn TopComponent> = match variant {
            Variant::Hal => Box::new(Osal::new()),
            Variant::Project => Box::new(ComponentC::new()),
        };
        debug!("ChainService: top component [{}]", top.tag());
        Self { variant, top }
    }

    pub fn info(&self) -> String {
        self.top.get_info()
    }

    pub fn chain(&self) -> Vec<String> {
        self.top.get_full_dependency_chain()
    }

    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn execute(&self, command: &str) -> String {
        self.top.execute(command)
    }

    pub fn resolve(&self) -> Vec<ResolvedLibrary> {
        self.top.resolved_libraries()
    }

    /// Everything the entry point shows, for one `command`.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn report(&self, command: &str) -> ChainReport {
        ChainReport {
            package: build_info::PKG_NAME.to_string(),
            version: build_info::PKG_VERSION.to_string(),
            variant: self.variant,
            info: self.info(),
            dependency_chain: self.chain(),
            command: command.to_string(),
            result: self.execute(command),
            libraries: self.resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_variant_names_when_parsing_then_case_insensitive() {
        assert_eq!("HAL".parse::<Variant>().unwrap(), Variant::Hal);
        assert_eq!(" project ".parse::<Variant>().unwrap(), Variant::Project);
    }

    #[test]
    fn given_unknown_variant_when_parsing_then_invalid_setting() {
        let err = "gpio".parse::<Variant>().unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidSetting { key: "variant", .. }));
    }

    #[test]
    fn given_variant_when_building_service_then_top_tag_leads_result() {
        assert!(ChainService::new(Variant::Hal).execute("x").starts_with("[osal]"));
        assert!(ChainService::new(Variant::Project)
            .execute("x")
            .starts_with("[ProjectC]"));
    }
}
