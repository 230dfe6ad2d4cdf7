use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;
use uaa_core::{grant_type_label, Context, Token};

use crate::cli_args::*;
use crate::modules::system::CommandContext;

pub(crate) fn handle_context(args: ContextArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let Some(context) = ctx.config.current_context() else {
        anyhow::bail!("no context set; run `uaa save-context` first");
    };
    if args.access_token {
        if context.token.access_token.is_empty() {
            anyhow::bail!("active context has no access token");
        }
        println!("{}", context.token.access_token);
        return Ok(());
    }
    if context.token.is_expired(Utc::now()) {
        eprintln!("warning: access token has expired");
    }
    println!("{}", serde_json::to_string_pretty(context)?);
    Ok(())
}

pub(crate) fn handle_contexts(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let Some(target) = ctx.config.current_target() else {
        anyhow::bail!("no target set; run `uaa target <url>` first");
    };
    let mut entries: Vec<(&String, &Context)> = target.contexts.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (name, context) in entries {
        let marker = if *name == target.active_context_name {
            "*"
        } else {
            " "
        };
        let username = if context.username.is_empty() {
            "-"
        } else {
            context.username.as_str()
        };
        println!(
            "{marker} {}\t{}\t{}",
            context.client_id,
            username,
            grant_type_label(&context.grant_type)
        );
    }
    Ok(())
}

pub(crate) fn handle_save_context(
    args: SaveContextArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    if args.client_id.trim().is_empty() {
        anyhow::bail!("client id is required");
    }
    if args.access_token.trim().is_empty() {
        anyhow::bail!("access token is required");
    }
    let expiry = args.expires_in.map(expiry_after).transpose()?;
    let token = Token {
        access_token: args.access_token,
        token_type: args.token_type,
        refresh_token: args.refresh_token,
        expiry,
        scope: args.scope,
    };
    let context = Context::new(args.client_id, args.grant_type, args.username, token);
    let name = context.name();
    ctx.config.add_context(context);
    ctx.dirty = true;
    info!(context = %name, target_name = %ctx.config.active_target_name, "context saved");
    println!("Context saved: {name}");
    Ok(())
}

fn expiry_after(seconds: i64) -> anyhow::Result<DateTime<Utc>> {
    let Some(lifetime) = TimeDelta::try_seconds(seconds) else {
        anyhow::bail!("token lifetime out of range: {seconds} seconds");
    };
    let Some(expiry) = Utc::now().checked_add_signed(lifetime) else {
        anyhow::bail!("token lifetime out of range: {seconds} seconds");
    };
    Ok(expiry)
}
