use uaa_core::{client_for_target, fetch_token_key, resolve_token_keys};

use crate::cli_args::*;
use crate::modules::system::{require_target, CommandContext};

pub(crate) async fn handle_token_keys(
    args: TokenKeysArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let target = require_target(ctx.config)?;
    let client = client_for_target(target, &ctx.config.zone_subdomain)?;
    let keys = resolve_token_keys(&client, &target.base_url).await?;
    if args.kid_only {
        for key in &keys {
            println!("{}", key.kid);
        }
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&keys)?);
    Ok(())
}

pub(crate) async fn handle_token_key(
    args: TokenKeyArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let target = require_target(ctx.config)?;
    let client = client_for_target(target, &ctx.config.zone_subdomain)?;
    let key = fetch_token_key(&client, &target.base_url).await?;
    if args.value_only {
        println!("{}", key.value);
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&key)?);
    Ok(())
}
