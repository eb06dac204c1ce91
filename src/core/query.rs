//! Query orchestration.
//!
//! Decides which devices to acquire for a [`Configuration`], makes the
//! driver calls and renders one of four outputs: device count, gain range,
//! single device, or device list. Output is built completely before it is
//! written, so a failing driver call leaves stdout untouched.

use std::fmt::Write as _;
use std::io;

use tracing::debug;

use crate::constants;
use crate::device::{DeviceError, DeviceSession, GainRange, HiDesDeviceInfo, HiDesDriver};
use crate::state::{Configuration, DeviceTarget};
use crate::utils;

/// Errors raised while running a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A driver call failed.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Writing the output failed.
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs the query and writes its output to `out`.
///
/// # Errors
///
/// Returns [`QueryError::Device`] on the first failing driver call, in which
/// case nothing is written, or [`QueryError::Output`] if writing fails.
pub fn run<D, W>(driver: &mut D, config: &Configuration, out: &mut W) -> Result<(), QueryError>
where
    D: HiDesDriver,
    W: io::Write,
{
    let text = execute(driver, config)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Runs the query and returns the complete output text.
///
/// # Errors
///
/// Returns the first driver error. No retry is attempted.
pub fn execute<D: HiDesDriver>(
    driver: &mut D,
    config: &Configuration,
) -> Result<String, DeviceError> {
    match config.acquisition() {
        DeviceTarget::AllDevices => {
            let devices = driver.enumerate()?;
            debug!(count = devices.len(), "devices enumerated");
            if config.count {
                Ok(format!("{}\n", devices.len()))
            } else {
                Ok(render_list(&devices, config.verbose))
            }
        }
        target => {
            let mut session = DeviceSession::open(driver, &target)?;
            let info = session.info()?;
            if config.gain_range {
                let range = session.gain_range(config.frequency, config.bandwidth)?;
                Ok(render_gain_range(&info, config, range))
            } else {
                Ok(format!("{}\n", info.render(config.verbose)))
            }
        }
    }
}

fn render_gain_range(info: &HiDesDeviceInfo, config: &Configuration, range: GainRange) -> String {
    let mut text = String::with_capacity(160);
    let _ = writeln!(text, "{}{}", constants::LABEL_DEVICE, info.summary());
    let _ = writeln!(
        text,
        "{}{} Hz",
        constants::LABEL_FREQUENCY,
        utils::group_thousands(config.frequency)
    );
    let _ = writeln!(
        text,
        "{}{} MHz",
        constants::LABEL_BANDWIDTH,
        config.bandwidth
    );
    let _ = writeln!(text, "{}{} dB", constants::LABEL_MIN_GAIN, range.min_db);
    let _ = writeln!(text, "{}{} dB", constants::LABEL_MAX_GAIN, range.max_db);
    text
}

fn render_list(devices: &[HiDesDeviceInfo], verbose: bool) -> String {
    if devices.is_empty() {
        return format!("{}\n", constants::MSG_NO_DEVICE);
    }

    let mut text = String::new();
    if verbose {
        let _ = writeln!(text, "Found {} HiDes devices\n", devices.len());
    }
    for device in devices {
        let _ = writeln!(text, "{}", device.render(verbose));
    }
    text
}
