//! List links command

use colored::Colorize;

use super::helpers::describe_link;
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn list_links(service: &LinkService) -> Result<(), CliError> {
    let links = service.list()?;

    if links.is_empty() {
        println!("{} No links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Link list:".bold().green());
    println!();
    for link in &links {
        println!("  {}", describe_link(link));
    }
    println!();

    let active = links.iter().filter(|l| l.active).count();
    println!(
        "{} Total {} links ({} active)",
        "ℹ".bold().blue(),
        links.len().to_string().green(),
        active
    );
    Ok(())
}
