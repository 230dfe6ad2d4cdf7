mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_delete_target, handle_status, handle_target, handle_targets};
