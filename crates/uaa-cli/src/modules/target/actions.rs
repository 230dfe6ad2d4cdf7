use uaa_core::{check_health, client_for_target, http_client, Target};

use crate::cli_args::*;
use crate::modules::system::{ensure_target_url, require_target, CommandContext};

pub(crate) async fn handle_target(
    args: TargetArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    if let Some(zone) = args.zone {
        let zone = zone.trim().to_string();
        http_client(ctx.skip_ssl_validation, &zone)?;
        ctx.config.zone_subdomain = zone;
        ctx.dirty = true;
    }

    let Some(url) = args.url else {
        let Some(target) = ctx.config.current_target().filter(|t| !t.base_url.is_empty()) else {
            println!("No target set");
            return Ok(());
        };
        let client = client_for_target(target, &ctx.config.zone_subdomain)?;
        let health = check_health(&client, &target.base_url).await;
        println!("Target: {}", target.base_url);
        println!("Status: {health}");
        if target.skip_ssl_validation {
            println!("SkipSSLValidation: true");
        }
        if !ctx.config.zone_subdomain.is_empty() {
            println!("Zone: {}", ctx.config.zone_subdomain);
        }
        return Ok(());
    };

    let url = url.trim_end_matches('/').to_string();
    ensure_target_url(&url)?;
    ctx.config
        .add_target(Target::new(url.clone(), ctx.skip_ssl_validation));
    ctx.dirty = true;
    println!("Target set to {url}");
    Ok(())
}

pub(crate) fn handle_targets(ctx: &CommandContext<'_>) {
    let mut names: Vec<&String> = ctx.config.targets.keys().collect();
    names.sort();
    for name in names {
        let marker = if *name == ctx.config.active_target_name {
            "*"
        } else {
            " "
        };
        println!("{marker} {name}");
    }
}

pub(crate) fn handle_delete_target(
    args: DeleteTargetArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let url = args.url.trim_end_matches('/');
    if ctx.config.remove_target(url).is_none() {
        anyhow::bail!("target not found: {url}");
    }
    ctx.dirty = true;
    println!("Target {url} removed");
    Ok(())
}

pub(crate) async fn handle_status(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let target = require_target(ctx.config)?;
    let client = client_for_target(target, &ctx.config.zone_subdomain)?;
    let health = check_health(&client, &target.base_url).await;
    if !health.is_healthy() {
        anyhow::bail!("{} is {health}", target.base_url);
    }
    println!("{}: {health}", target.base_url);
    Ok(())
}
