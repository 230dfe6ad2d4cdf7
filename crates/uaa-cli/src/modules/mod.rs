pub(crate) mod context;
pub(crate) mod keys;
pub(crate) mod system;
pub(crate) mod target;
