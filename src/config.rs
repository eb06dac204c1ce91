//! Settings file loading.
//!
//! Settings live in `config.toml` inside the configuration directory
//! (`~/.config/hides` by default). Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::state::Bandwidth;

/// Errors raised while loading the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but cannot be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown keys.
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the modulator device nodes.
    pub device_dir: PathBuf,
    /// sysfs class directory of the device nodes.
    pub sysfs_dir: PathBuf,
    /// Device node name prefix.
    pub device_prefix: String,
    /// Default carrier frequency for `--gain-range`, in Hz.
    pub frequency: Option<u64>,
    /// Default bandwidth for `--gain-range`, in MHz.
    pub bandwidth: Option<Bandwidth>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device_dir: PathBuf::from(constants::DEFAULT_DEVICE_DIR),
            sysfs_dir: PathBuf::from(constants::DEFAULT_SYSFS_DIR),
            device_prefix: constants::DEFAULT_DEVICE_PREFIX.to_string(),
            frequency: None,
            bandwidth: None,
        }
    }
}

/// Configuration directory and where it came from (`"cli"`, `"default"`).
///
/// Returns `None` when there is no override and no user config directory.
#[must_use]
pub fn config_dir(override_dir: Option<&Path>) -> Option<(PathBuf, &'static str)> {
    if let Some(dir) = override_dir {
        return Some((dir.to_path_buf(), "cli"));
    }
    dirs::config_dir().map(|dir| (dir.join(constants::CONFIG_DIR_NAME), "default"))
}

/// Loads `config.toml` from `dir`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub fn load(dir: &Path) -> Result<Settings, ConfigError> {
    let path = dir.join(constants::CONFIG_FILE_NAME);
    if !path.is_file() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_settings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "device_dir = \"/tmp/dev\"\nfrequency = 650000000\nbandwidth = 6\n",
        )
        .unwrap();

        let settings = load(dir.path()).unwrap();
        assert_eq!(settings.device_dir, PathBuf::from("/tmp/dev"));
        assert_eq!(
            settings.sysfs_dir,
            PathBuf::from(constants::DEFAULT_SYSFS_DIR)
        );
        assert_eq!(settings.frequency, Some(650_000_000));
        assert_eq!(settings.bandwidth, Some(Bandwidth::Mhz6));
    }

    #[test]
    fn test_invalid_bandwidth_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "bandwidth = 9\n").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "adapter = 1\n").unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn test_config_dir_override() {
        let (dir, source) = config_dir(Some(Path::new("/etc/hides"))).unwrap();
        assert_eq!(dir, PathBuf::from("/etc/hides"));
        assert_eq!(source, "cli");
    }
}
