mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_token_key, handle_token_keys};
