use clap::Args;

#[derive(Args)]
pub struct TokenKeysArgs {
    #[arg(long, help = "Print only the key ids")]
    pub kid_only: bool,
}

#[derive(Args)]
pub struct TokenKeyArgs {
    #[arg(long, help = "Print only the key value")]
    pub value_only: bool,
}
