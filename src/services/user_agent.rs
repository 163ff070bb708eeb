//! Browser detection from a User-Agent string

use woothee::parser::Parser;

use crate::routing::UNKNOWN;

/// Lowercase browser token for `user_agent`
///
/// `chrome`, `firefox`, `safari`, `edge`, `opera`, `ie`, ... or [`UNKNOWN`]
/// when the string is empty or not recognised.
pub fn detect_browser(user_agent: &str) -> String {
    if user_agent.trim().is_empty() {
        return UNKNOWN.to_string();
    }

    let Some(result) = Parser::new().parse(user_agent) else {
        return UNKNOWN.to_string();
    };

    match result.name {
        "" | "UNKNOWN" => UNKNOWN.to_string(),
        "Internet Explorer" => "ie".to_string(),
        name => name.to_lowercase().replace(' ', "_"),
    }
}
