//! Command-line interface definitions using clap

use clap::{Args, Parser, Subcommand};

/// linkrouter - conditional short-link routing
#[derive(Parser)]
#[command(name = "linkrouter")]
#[command(version)]
#[command(about = "Resolve short codes to destinations by country, browser and priority", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a link payload comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct PayloadSource {
    /// Read the JSON payload from a file ("-" for stdin)
    #[arg(long)]
    pub file: Option<String>,

    /// Inline JSON payload
    #[arg(long)]
    pub json: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a short code for a simulated request
    ///
    /// Explicit --country/--browser win over values derived from
    /// --ip (GeoIP) and --user-agent.
    Resolve {
        /// Short code to resolve
        short_code: String,

        /// ISO 3166-1 alpha-2 country of the request
        #[arg(long)]
        country: Option<String>,

        /// Browser token (chrome, firefox, safari, ...)
        #[arg(long)]
        browser: Option<String>,

        /// User-Agent header to detect the browser from
        #[arg(long)]
        user_agent: Option<String>,

        /// Client IP, used for GeoIP lookup
        #[arg(long)]
        ip: Option<String>,
    },

    /// Create a link from a JSON payload
    Add {
        #[command(flatten)]
        source: PayloadSource,
    },

    /// Replace a link (by id) with a new JSON payload
    Update {
        /// Link id
        id: String,

        #[command(flatten)]
        source: PayloadSource,
    },

    /// Activate or deactivate a link
    Toggle {
        /// Short code to toggle
        short_code: String,
    },

    /// Show one link as JSON
    Show {
        /// Short code, or id with --id
        key: String,

        /// Treat KEY as a link id
        #[arg(long)]
        id: bool,
    },

    /// List all links
    List,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}
