//! Update link command

use colored::Colorize;

use super::helpers::{describe_link, print_destinations, read_payload};
use crate::cli::PayloadSource;
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn update_link(service: &LinkService, id: &str, source: &PayloadSource) -> Result<(), CliError> {
    let payload = read_payload(source)?;
    let link = service.replace_link(id, payload)?;

    println!("{} Updated link: {}", "✓".bold().green(), describe_link(&link));
    print_destinations(&link);
    Ok(())
}
