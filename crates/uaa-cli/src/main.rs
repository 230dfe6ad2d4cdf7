use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::Cli;
use crate::cli_command::handle_command;
use crate::modules::system::{load_config, resolve_config_path, save_config, CommandContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_filter = init_logging(cli.verbose)?;
    let config_path = resolve_config_path(cli.config.clone())?;
    let mut config = load_config(&config_path)?;
    if config.verbose && cli.verbose == 0 {
        log_filter.reload(log_level(1))?;
    }

    let mut ctx = CommandContext {
        config: &mut config,
        config_path: &config_path,
        skip_ssl_validation: cli.skip_ssl_validation,
        dirty: false,
    };
    handle_command(cli.command, &mut ctx).await?;
    if ctx.dirty {
        save_config(ctx.config, &config_path)?;
    }

    Ok(())
}

fn log_level(verbosity: u8) -> EnvFilter {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    EnvFilter::new(filter)
}

/// Installs the stderr subscriber. The returned handle lets the level be
/// raised once the persisted `Verbose` preference is known.
fn init_logging(verbosity: u8) -> anyhow::Result<reload::Handle<EnvFilter, Registry>> {
    let (filter, handle) = reload::Layer::new(log_level(verbosity));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(handle)
}
