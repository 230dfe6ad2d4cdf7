use tracing::info;
use uaa_core::remove_config;

use crate::modules::system::CommandContext;

pub(crate) fn handle_logout(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    remove_config(ctx.config_path)?;
    ctx.config.clear();
    ctx.dirty = false;
    info!(path = %ctx.config_path.display(), "config removed");
    println!("Logged out");
    Ok(())
}
