//! Command dispatch: settings + chain service → terminal output
//!
//! Every command renders its whole output to a `String`; only
//! [`execute_command`] writes to the terminal.

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{to_json, ChainService, OutputFormat};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};

pub const SUCCESS_MESSAGE: &str = "All recursive dependencies working correctly!";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // Completions must work even when the config is broken
    let out = match &cli.command {
        Some(Commands::Completion { shell }) => completion(*shell),
        command => {
            let settings = effective_settings(cli)?;
            debug!("settings: {:?}", settings);
            render_command(command.as_ref(), &settings)?
        }
    };
    output::info(&out);
    Ok(())
}

/// Loaded settings with command-line flags applied on top.
pub fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(variant) = cli.variant {
        settings.variant = variant;
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }
    Ok(settings)
}

/// Stdout content of `command` under `settings`; no subcommand means `run`.
pub fn render_command(command: Option<&Commands>, settings: &Settings) -> CliResult<String> {
    match command {
        None => run(settings, None),
        Some(Commands::Run { text }) => run(settings, text.as_deref()),
        Some(Commands::Info) => info(settings),
        Some(Commands::Chain) => chain(settings),
        Some(Commands::Execute { text }) => execute(settings, text),
        Some(Commands::Resolve) => resolve(settings),
        Some(Commands::Config { command }) => config(settings, command),
        Some(Commands::Completion { shell }) => Ok(completion(*shell)),
    }
}

#[instrument(skip(settings))]
fn run(settings: &Settings, text: Option<&str>) -> CliResult<String> {
    let command = text.unwrap_or(settings.command.as_str());
    let report = ChainService::new(settings.variant).report(command);
    let rendered = report.render(settings.format)?;
    Ok(match settings.format {
        OutputFormat::Text => format!("{rendered}\n\n{}", output::success(SUCCESS_MESSAGE)),
        OutputFormat::Json => rendered,
    })
}

#[instrument(skip(settings))]
fn info(settings: &Settings) -> CliResult<String> {
    let info = ChainService::new(settings.variant).info();
    Ok(match settings.format {
        OutputFormat::Text => info,
        OutputFormat::Json => to_json(&info, "info")?,
    })
}

#[instrument(skip(settings))]
fn chain(settings: &Settings) -> CliResult<String> {
    let lines = ChainService::new(settings.variant).chain();
    Ok(match settings.format {
        OutputFormat::Text => lines.join("\n"),
        OutputFormat::Json => to_json(&lines, "dependency chain")?,
    })
}

#[instrument(skip(settings))]
fn execute(settings: &Settings, text: &str) -> CliResult<String> {
    let result = ChainService::new(settings.variant).execute(text);
    Ok(match settings.format {
        OutputFormat::Text => result,
        OutputFormat::Json => to_json(&result, "result")?,
    })
}

#[instrument(skip(settings))]
fn resolve(settings: &Settings) -> CliResult<String> {
    let libraries = ChainService::new(settings.variant).resolve();
    if settings.format == OutputFormat::Json {
        return Ok(to_json(&libraries, "resolved libraries")?);
    }

    let mut lines = Vec::new();
    for library in &libraries {
        let header = if library.is_upgrade() {
            format!("{} (upgraded)", library.version)
        } else {
            library.version.to_string()
        };
        lines.push(output::action(&library.name, &header));
        for request in &library.requests {
            let line = format!("{} requested {}", request.component, request.version);
            if library.was_upgraded(request) {
                lines.push(output::upgrade(&format!("{line}, upgraded to {}", library.version)));
            } else {
                lines.push(output::detail(&line));
            }
        }
    }
    Ok(lines.join("\n"))
}

fn config(settings: &Settings, command: &ConfigCommands) -> CliResult<String> {
    match command {
        ConfigCommands::Show => Ok(settings.to_toml()?),
        ConfigCommands::Template => Ok(Settings::template()),
        ConfigCommands::Path => config_path(global_config_path()),
    }
}

/// `None` means the platform has no config directory for this user.
pub fn config_path(path: Option<PathBuf>) -> CliResult<String> {
    let path = path.ok_or_else(|| {
        CliError::Unavailable("cannot determine config directory".to_string())
    })?;
    Ok(path.display().to_string())
}

fn completion(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, name, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
