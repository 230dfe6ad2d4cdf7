use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::modules::context::args::*;
pub use crate::modules::keys::args::*;
pub use crate::modules::target::args::*;

#[derive(Parser)]
#[command(name = "uaa")]
#[command(about = "UAA command line session manager")]
pub struct Cli {
    #[arg(long, env = "UAA_CONFIG", help = "Config file (defaults to ~/.uaa/config.json)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, global = true, help = "Disable TLS certificate validation for the target")]
    pub skip_ssl_validation: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Set or show the target UAA")]
    Target(TargetArgs),
    #[command(about = "List known targets")]
    Targets,
    #[command(about = "Remove a target from the config")]
    DeleteTarget(DeleteTargetArgs),
    #[command(about = "Check the health of the active target")]
    Status,
    #[command(about = "Show the active context")]
    Context(ContextArgs),
    #[command(about = "List contexts of the active target")]
    Contexts,
    #[command(about = "Store an externally obtained token as the active context")]
    SaveContext(SaveContextArgs),
    #[command(about = "Fetch all token verification keys")]
    TokenKeys(TokenKeysArgs),
    #[command(about = "Fetch the token verification key")]
    TokenKey(TokenKeyArgs),
    #[command(about = "Remove the saved config, forgetting all targets and tokens")]
    Logout,
}
