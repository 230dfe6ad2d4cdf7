use clap::Args;

#[derive(Args)]
pub struct ContextArgs {
    #[arg(long, help = "Print only the stored access token")]
    pub access_token: bool,
}

#[derive(Args)]
pub struct SaveContextArgs {
    #[arg(long)]
    pub client_id: String,
    #[arg(long, default_value = "client_credentials")]
    pub grant_type: String,
    #[arg(long, default_value = "")]
    pub username: String,
    #[arg(long, env = "UAA_ACCESS_TOKEN")]
    pub access_token: String,
    #[arg(long)]
    pub refresh_token: Option<String>,
    #[arg(long, default_value = "bearer")]
    pub token_type: String,
    #[arg(long, help = "Token lifetime in seconds")]
    pub expires_in: Option<i64>,
    #[arg(long)]
    pub scope: Option<String>,
}
