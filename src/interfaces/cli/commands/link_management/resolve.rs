//! Resolve command: simulate a request against a short code

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::routing::{RequestContext, normalize_country};
use crate::services::{ContextResolver, LinkService, RequestHeaders};

/// Request attributes given on the command line
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub country: Option<String>,
    pub browser: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

/// Derive a context from `--ip`/`--user-agent`, then apply explicit
/// `--country`/`--browser`
pub fn build_context(resolver: &ContextResolver, overrides: RequestOverrides) -> RequestContext {
    let headers = RequestHeaders {
        user_agent: overrides.user_agent,
        x_real_ip: None,
        x_forwarded_for: None,
        remote_addr: overrides.ip,
    };
    let mut ctx = resolver.build(&headers);

    if let Some(country) = overrides.country.filter(|c| !c.trim().is_empty()) {
        ctx.country = normalize_country(&country);
    }
    if let Some(browser) = overrides.browser.filter(|b| !b.trim().is_empty()) {
        ctx.browser = browser.trim().to_lowercase();
    }
    ctx
}

pub fn resolve_link(
    service: &LinkService,
    resolver: &ContextResolver,
    short_code: &str,
    overrides: RequestOverrides,
) -> Result<(), CliError> {
    let ctx = build_context(resolver, overrides);
    let destination = service.resolve(short_code, &ctx)?;

    eprintln!(
        "{} {} (country={}, browser={}, priority={})",
        "→".bold().green(),
        short_code.cyan(),
        ctx.country,
        ctx.browser,
        destination.priority
    );
    // Bare URL on stdout so the command composes in scripts
    println!("{}", destination.url);
    Ok(())
}
