use std::path::{Path, PathBuf};

use anyhow::Context as _;
use uaa_core::{default_config_path, read_config, write_config, Config, Target};

pub(crate) fn resolve_config_path(arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => Ok(default_config_path()?),
    }
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<Config> {
    read_config(path).with_context(|| format!("unable to load config from {}", path.display()))
}

pub(crate) fn save_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    write_config(config, path)
        .with_context(|| format!("unable to save config to {}", path.display()))
}

/// The active target, provided it has a base URL to talk to.
pub(crate) fn require_target(config: &Config) -> anyhow::Result<&Target> {
    match config.current_target() {
        Some(target) if !target.base_url.is_empty() => Ok(target),
        _ => anyhow::bail!("no target set; run `uaa target <url>` first"),
    }
}

pub(crate) fn ensure_target_url(url: &str) -> anyhow::Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        anyhow::bail!("invalid target url (expected http:// or https://): {url}");
    }
    Ok(())
}
