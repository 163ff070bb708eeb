//! CLI interface module
//!
//! Runs clap-parsed commands against a link store built from configuration.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::LinkRouterError;
use crate::services::{ContextResolver, GeoIpProvider, LinkService};
use crate::storage::StorageFactory;
use crate::utils::RandomIdGenerator;
use commands::{
    add_link, config_generate, list_links, resolve_link, show_link, toggle_link, update_link,
};

#[derive(Debug)]
pub enum CliError {
    Router(LinkRouterError),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Router(err) => format!("[{}] {}", err.code(), err.format_simple()),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Router(err) => err.format_colored(),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Router(LinkRouterError::NotFound(_)) => 3,
            CliError::Router(LinkRouterError::NoDestinationResolved(_)) => 4,
            CliError::ParseError(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkRouterError> for CliError {
    fn from(err: LinkRouterError) -> Self {
        CliError::Router(err)
    }
}

fn build_service(config: &StaticConfig) -> Result<LinkService, CliError> {
    let store = StorageFactory::create(&config.storage)?;
    let ids = Arc::new(RandomIdGenerator::from_config(&config.ids));
    Ok(LinkService::new(store, ids))
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Config generation needs no store
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let service = build_service(config)?;

    match cmd {
        Commands::Resolve {
            short_code,
            country,
            browser,
            user_agent,
            ip,
        } => {
            let resolver = ContextResolver::new(GeoIpProvider::from_config(&config.geoip));
            resolve_link(
                &service,
                &resolver,
                &short_code,
                commands::RequestOverrides {
                    country,
                    browser,
                    user_agent,
                    ip,
                },
            )
        }
        Commands::Add { source } => add_link(&service, &source),
        Commands::Update { id, source } => update_link(&service, &id, &source),
        Commands::Toggle { short_code } => toggle_link(&service, &short_code),
        Commands::Show { key, id } => show_link(&service, &key, id),
        Commands::List => list_links(&service),
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
