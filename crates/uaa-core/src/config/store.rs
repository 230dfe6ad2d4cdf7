use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::model::Config;

const CONFIG_DIR: &str = ".uaa";
const CONFIG_FILE: &str = "config.json";

/// `~/.uaa/config.json` for the invoking user.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| ConfigError::MissingHome)?;
    Ok(Path::new(&home).join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Loads the config at `path`.
///
/// A missing file yields an empty config. Any other read failure and
/// malformed contents are returned as errors.
pub fn read_config(path: &Path) -> ConfigResult<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file; starting empty");
            return Ok(Config::new());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if contents.trim().is_empty() {
        return Ok(Config::new());
    }
    let mut config: Config =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.repair_active_pointers();
    Ok(config)
}

/// Persists `config` to `path` with owner-only permissions.
///
/// The parent directory is created `rwxr-xr-x` when absent. The file is
/// written to a temporary sibling and renamed into place.
pub fn write_config(config: &Config, path: &Path) -> ConfigResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_config_dir(parent)?;

    let contents = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(CONFIG_FILE);
    let tmp_path = parent.join(format!(".{}.tmp.{}", file_name, rand::random::<u64>()));

    let result = write_private_file(&tmp_path, contents.as_bytes())
        .and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(ConfigError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    debug!(path = %path.display(), targets = config.targets.len(), "config saved");
    Ok(())
}

/// Deletes the persisted config. An already absent file counts as removed.
pub fn remove_config(path: &Path) -> ConfigResult<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "config removed");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConfigError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn ensure_config_dir(dir: &Path) -> ConfigResult<()> {
    if dir.exists() {
        return Ok(());
    }
    let create_err = |source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(create_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).map_err(create_err)?;
    }
    Ok(())
}

fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.create_new(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}
