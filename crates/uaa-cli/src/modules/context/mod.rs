mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_context, handle_contexts, handle_save_context};
