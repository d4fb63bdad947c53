//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::{OutputFormat, Variant};

/// Layered component chain: owning delegation, dependency tree listing and library resolution
#[derive(Parser, Debug)]
#[command(name = "cpm-chain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (overrides global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Chain to build
    #[arg(long, value_enum, global = true)]
    pub variant: Option<Variant>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show info, dependency chain and one execution (default)
    Run {
        /// Command sent through the chain (default: from config)
        text: Option<String>,
    },

    /// Show top component info
    Info,

    /// Show the dependency chain listing
    Chain,

    /// Send one command through the chain
    Execute {
        /// Command text (may be empty)
        text: String,
    },

    /// Show resolved library versions
    Resolve,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file location
    Path,
}
