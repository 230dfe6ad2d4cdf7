mod actions;
pub(crate) mod config;
pub(crate) mod types;

pub(crate) use actions::handle_logout;
pub(crate) use config::{
    ensure_target_url, load_config, require_target, resolve_config_path, save_config,
};
pub(crate) use types::CommandContext;
