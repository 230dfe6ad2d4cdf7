use std::path::Path;

use uaa_core::Config;

pub struct CommandContext<'a> {
    pub config: &'a mut Config,
    pub config_path: &'a Path,
    pub skip_ssl_validation: bool,
    /// Set by handlers that changed `config`; the caller persists it once.
    pub dirty: bool,
}
