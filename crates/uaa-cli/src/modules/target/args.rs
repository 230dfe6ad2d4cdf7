use clap::Args;

#[derive(Args)]
pub struct TargetArgs {
    #[arg(help = "UAA base URL; omit to show the active target")]
    pub url: Option<String>,
    #[arg(long, help = "Identity zone subdomain sent with every request (empty clears it)")]
    pub zone: Option<String>,
}

#[derive(Args)]
pub struct DeleteTargetArgs {
    #[arg(help = "Base URL of the target to remove")]
    pub url: String,
}
