//! Toggle link command

use colored::Colorize;

use super::helpers::describe_link;
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn toggle_link(service: &LinkService, short_code: &str) -> Result<(), CliError> {
    let link = service.toggle(short_code)?;

    let verb = if link.active { "Activated" } else { "Deactivated" };
    println!("{} {} link: {}", "✓".bold().green(), verb, describe_link(&link));
    Ok(())
}
