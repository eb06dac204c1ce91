//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout the inspector,
//! including device-node locations, configuration paths, and output messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Device Discovery ===

/// Directory holding the modulator device nodes.
pub const DEFAULT_DEVICE_DIR: &str = "/dev";
/// sysfs class directory under which the it950x driver registers its nodes.
pub const DEFAULT_SYSFS_DIR: &str = "/sys/class/usbmisc";
/// Node name prefix used by the it950x driver (`usb-it95x0`, `usb-it95x1`, ...).
pub const DEFAULT_DEVICE_PREFIX: &str = "usb-it95x";

// === Frequency Defaults ===

/// First UHF channel, used as the default carrier for gain-range queries.
pub const UHF_FIRST_CHANNEL: u32 = 21;
/// Centre frequency of the (virtual) UHF channel 0.
pub const UHF_BASE_FREQUENCY: u64 = 306_000_000;
/// Spacing between two UHF channels.
pub const UHF_CHANNEL_WIDTH: u64 = 8_000_000;

// === Path Configuration ===

/// Name of the configuration subdirectory under the user config dir.
pub const CONFIG_DIR_NAME: &str = "hides";
/// Name of the settings file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the configuration directory.
pub const ENV_CONFIG_DIR: &str = "HIDES_CONFIG_DIR";
/// Environment variable holding the diagnostic log filter.
pub const ENV_LOG: &str = "HIDES_LOG";
/// Log filter used when `HIDES_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// === Output Messages ===

pub const MSG_NO_DEVICE: &str = "No HiDes device found";
pub const LABEL_DEVICE: &str = "Device: ";
pub const LABEL_FREQUENCY: &str = "Frequency: ";
pub const LABEL_BANDWIDTH: &str = "Bandwidth: ";
pub const LABEL_MIN_GAIN: &str = "Min. gain: ";
pub const LABEL_MAX_GAIN: &str = "Max. gain: ";

// === Error Messages ===

pub const ERR_EXCLUSIVE_MODES: &str = "--count and --gain-range are mutually exclusive";
pub const ERR_GAIN_RANGE_UNSUPPORTED: &str =
    "output gain range requires the it950x control interface, not available through device nodes";
