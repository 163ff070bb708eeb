//! Helper functions for link management CLI commands

use std::io::Read;

use colored::Colorize;

use crate::cli::PayloadSource;
use crate::interfaces::cli::CliError;
use crate::services::LinkPayload;
use crate::storage::Link;

/// Load a link payload from `--file` (or stdin with `-`) or `--json`
pub fn read_payload(source: &PayloadSource) -> Result<LinkPayload, CliError> {
    let raw = match (&source.file, &source.json) {
        (_, Some(json)) => json.clone(),
        (Some(path), None) if path == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::CommandError(format!("Failed to read stdin: {}", e)))?;
            buf
        }
        (Some(path), None) => std::fs::read_to_string(path)
            .map_err(|e| CliError::CommandError(format!("Failed to read {}: {}", path, e)))?,
        (None, None) => {
            return Err(CliError::ParseError(
                "either --file or --json is required".to_string(),
            ));
        }
    };

    Ok(LinkPayload::from_json(&raw)?)
}

/// One-line summary used by add/update/toggle/list
pub(super) fn describe_link(link: &Link) -> String {
    let state = if link.active {
        "active".green().to_string()
    } else {
        "inactive".red().to_string()
    };

    let default = link
        .default_destination
        .as_ref()
        .map(|d| format!(" default -> {}", d.url.blue().underline()))
        .unwrap_or_default();

    format!(
        "{} [{}] {} destination(s){} {}",
        link.short.cyan(),
        state,
        link.destinations.len(),
        default,
        format!("(id: {})", link.id).dimmed()
    )
}

/// Destinations in evaluation order, one per line
pub(super) fn print_destinations(link: &Link) {
    for destination in link.ordered_destinations() {
        let condition = destination
            .condition
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "never (no condition)".to_string());
        println!(
            "    {} {} when {}",
            format!("[{}]", destination.priority).yellow(),
            destination.url.blue().underline(),
            condition.dimmed()
        );
    }
}
