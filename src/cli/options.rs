//! Turns parsed arguments into a validated [`Configuration`].

use crate::cli::args::Args;
use crate::config::Settings;
use crate::constants;
use crate::state::Configuration;
use crate::utils;

/// Invalid combination of command-line options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("{}", constants::ERR_EXCLUSIVE_MODES)]
    ExclusiveModes,
}

/// Validates `args` and fills in defaults.
///
/// Frequency and bandwidth come from the command line, then the settings
/// file, then the built-in defaults. Touches no device.
///
/// # Errors
///
/// Returns [`UsageError::ExclusiveModes`] when both `--count` and
/// `--gain-range` are given.
pub fn resolve(args: &Args, settings: &Settings) -> Result<Configuration, UsageError> {
    if args.count && args.gain_range {
        return Err(UsageError::ExclusiveModes);
    }

    Ok(Configuration {
        count: args.count,
        gain_range: args.gain_range,
        verbose: args.verbose,
        adapter: args.adapter,
        device_name: args.device.clone().filter(|name| !name.is_empty()),
        frequency: args
            .frequency
            .or(settings.frequency)
            .unwrap_or_else(utils::default_frequency),
        bandwidth: args.bandwidth.or(settings.bandwidth).unwrap_or_default(),
    })
}
