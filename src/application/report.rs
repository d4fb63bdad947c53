//! Chain report and its text/JSON renderings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::application::service::Variant;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ResolvedLibrary;

pub const BANNER: &str = "=== CPM Recursive Dependencies Test ===";

/// How reports are written to stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ApplicationError::InvalidSetting {
                key: "format",
                value: s.to_string(),
            }),
        }
    }
}

/// Result of one full run through a chain.
#[derive(Debug, Clone, Serialize)]
pub struct ChainReport {
    pub package: String,
    pub version: String,
    pub variant: Variant,
    pub info: String,
    pub dependency_chain: Vec<String>,
    pub command: String,
    pub result: String,
    pub libraries: Vec<ResolvedLibrary>,
}

impl ChainReport {
    /// Banner, info, chain listing and execution result, blank-line separated.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(BANNER);
        out.push_str("\n\nComponent Info:\n");
        out.push_str(&self.info);
        out.push_str("\n\nFull Dependency Chain:\n");
        out.push_str(&self.dependency_chain.join("\n"));
        out.push_str("\n\nExecuting command through dependency chain:\n");
        out.push_str(&self.result);
        out
    }

    pub fn render_json(&self) -> ApplicationResult<String> {
        to_json(self, "chain report")
    }

    pub fn render(&self, format: OutputFormat) -> ApplicationResult<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }
}

/// Pretty JSON for any serializable part of a report.
pub fn to_json<T: Serialize + ?Sized>(value: &T, what: &str) -> ApplicationResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ApplicationError::Render {
        context: format!("serialize {what}"),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ChainService;

    #[test]
    fn given_report_when_rendering_text_then_sections_in_order() {
        let report = ChainService::new(Variant::Hal).report("ping");
        let text = report.render_text();

        let info = text.find("Component Info:").unwrap();
        let chain = text.find("Full Dependency Chain:").unwrap();
        let exec = text.find("Executing command through dependency chain:").unwrap();
        assert!(text.starts_with(BANNER));
        assert!(info < chain && chain < exec);
        assert!(text.ends_with("[osal] Final result: [crypto] Processed: [spi] ping"));
    }

    #[test]
    fn given_report_when_rendering_json_then_round_trips_as_value() {
        let report = ChainService::new(Variant::Project).report("ping");
        let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(json["variant"], "project");
        assert_eq!(json["command"], "ping");
        assert_eq!(json["libraries"][0]["name"], "itertools");
        assert_eq!(
            json["libraries"][0]["version"],
            crate::build_info::itertools().version.to_string()
        );
    }

    #[test]
    fn given_format_names_when_parsing_then_known_values_accepted() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
