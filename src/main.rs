use clap::Parser;
use tracing::debug;

use linkrouter::cli::Cli;
use linkrouter::config::{StaticConfig, get_config, set_config};
use linkrouter::interfaces::cli::run_cli_command;
use linkrouter::system::init_logging;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => set_config(StaticConfig::load_from(path)?),
        None => set_config(StaticConfig::load()),
    }
    let config = get_config();

    let guard = init_logging(&config.logging)?;
    debug!("Configuration: {:?}", config);

    if let Err(e) = run_cli_command(cli.command, &config) {
        eprintln!("{}", e.format_colored());
        // 退出前刷新日志缓冲
        drop(guard);
        std::process::exit(e.exit_code());
    }
    Ok(())
}
