//! Show link command

use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn show_link(service: &LinkService, key: &str, by_id: bool) -> Result<(), CliError> {
    let link = if by_id {
        service.get_by_id(key)?
    } else {
        service.find_any_by_short(key)?
    };

    let json = serde_json::to_string_pretty(&link)
        .map_err(|e| CliError::CommandError(format!("Failed to serialize link: {}", e)))?;
    println!("{}", json);
    Ok(())
}
