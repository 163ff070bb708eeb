//! Add link command

use colored::Colorize;

use super::helpers::{describe_link, print_destinations, read_payload};
use crate::cli::PayloadSource;
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn add_link(service: &LinkService, source: &PayloadSource) -> Result<(), CliError> {
    let payload = read_payload(source)?;
    let generated_code = payload.short.as_deref().is_none_or(|s| s.trim_matches('/').is_empty());

    let link = service.create_link(payload)?;

    if generated_code {
        println!(
            "{} Generated random code: {}",
            "ℹ".bold().blue(),
            link.short.magenta()
        );
    }
    println!("{} Added link: {}", "✓".bold().green(), describe_link(&link));
    print_destinations(&link);
    Ok(())
}
