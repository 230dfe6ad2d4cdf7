use crate::cli_args::*;
use crate::modules::context::{handle_context, handle_contexts, handle_save_context};
use crate::modules::keys::{handle_token_key, handle_token_keys};
use crate::modules::system::{handle_logout, CommandContext};
use crate::modules::target::{handle_delete_target, handle_status, handle_target, handle_targets};

pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Target(args) => handle_target(args, ctx).await?,
        Command::Targets => handle_targets(ctx),
        Command::DeleteTarget(args) => handle_delete_target(args, ctx)?,
        Command::Status => handle_status(ctx).await?,
        Command::Context(args) => handle_context(args, ctx)?,
        Command::Contexts => handle_contexts(ctx)?,
        Command::SaveContext(args) => handle_save_context(args, ctx)?,
        Command::TokenKeys(args) => handle_token_keys(args, ctx).await?,
        Command::TokenKey(args) => handle_token_key(args, ctx).await?,
        Command::Logout => handle_logout(ctx)?,
    }

    Ok(())
}
