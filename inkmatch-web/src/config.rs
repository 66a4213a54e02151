//! Data directory resolution
//!
//! Priority order:
//! 1. Command-line argument (highest priority)
//! 2. INKMATCH_DATA_DIR environment variable
//! 3. `data_dir` key in the platform config file
//!    (e.g. ~/.config/inkmatch/config.toml)
//! 4. OS-dependent default (e.g. ~/.local/share/inkmatch)

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "INKMATCH_DATA_DIR";

/// Resolve the directory holding the gallery database
pub fn resolve_data_dir(cli_arg: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(DATA_DIR_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = config_file_data_dir() {
        return path;
    }

    default_data_dir()
}

fn config_file_data_dir() -> Option<PathBuf> {
    let config_path = dirs::config_dir()?.join("inkmatch").join("config.toml");
    let contents = std::fs::read_to_string(config_path).ok()?;
    let config: toml::Value = toml::from_str(&contents).ok()?;
    config
        .get("data_dir")
        .and_then(|value| value.as_str())
        .map(PathBuf::from)
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("inkmatch"))
        .unwrap_or_else(|| PathBuf::from("./inkmatch_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_argument_wins() {
        let resolved = resolve_data_dir(Some(Path::new("/tmp/gallery")));
        assert_eq!(resolved, PathBuf::from("/tmp/gallery"));
    }

    #[test]
    fn test_resolution_always_yields_a_path() {
        let resolved = resolve_data_dir(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
