//! Command entry point: settings, option resolution, query.

use std::io::{self, Write};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::debug;

use crate::cli::args::Args;
use crate::cli::resolve;
use crate::config::{self, Settings};
use crate::core;
use crate::device::{DevNodeDriver, HiDesDriver};

/// Runs one invocation against the device-node driver, writing to stdout.
///
/// # Errors
///
/// Fails on an unreadable settings file, a usage error, or a device error.
pub fn run(args: &Args) -> Result<()> {
    let settings = match config::config_dir(args.config_dir.as_deref()) {
        Some((dir, source)) => {
            debug!(dir = %dir.display(), source, "configuration directory");
            config::load(&dir)?
        }
        None => Settings::default(),
    };

    let mut driver = DevNodeDriver::from_settings(&settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(args, &settings, &mut driver, &mut out)
}

/// Resolves `args` and runs the query with the given driver and output.
///
/// A usage error is returned before the driver is called.
///
/// # Errors
///
/// Fails on a usage error or a device error.
pub fn run_with<D, W>(
    args: &Args,
    settings: &Settings,
    driver: &mut D,
    out: &mut W,
) -> Result<()>
where
    D: HiDesDriver,
    W: Write,
{
    let configuration = resolve(args, settings)?;
    debug!(?configuration, "options resolved");

    core::run(driver, &configuration, out).wrap_err("HiDes query failed")
}
