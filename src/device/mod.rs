//! HiDes modulator device access.
//!
//! The rest of the crate talks to hardware only through [`HiDesDriver`].
//! A device opened with [`DeviceSession::open`] is closed when the session
//! goes out of scope, whichever way the caller leaves.

mod devnode;
mod info;
#[cfg(test)]
pub(crate) mod mock;

pub use devnode::DevNodeDriver;
pub use info::HiDesDeviceInfo;

use std::path::PathBuf;

use tracing::debug;

use crate::state::{Bandwidth, DeviceTarget};

/// Errors reported by a device driver.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// No device at the requested adapter index.
    #[error("HiDes adapter {index} not found ({available} device(s) present)")]
    NotFound {
        /// Requested adapter index.
        index: u32,
        /// Number of devices actually present.
        available: usize,
    },

    /// No device with the requested name or path.
    #[error("HiDes device \"{0}\" not found")]
    NameNotFound(String),

    /// A device node or directory could not be accessed.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The driver cannot perform this operation.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// A convenience `Result` alias using [`DeviceError`] as the error type.
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Output gain limits for one frequency and bandwidth, in dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainRange {
    /// Lowest allowed output gain.
    pub min_db: i32,
    /// Highest allowed output gain.
    pub max_db: i32,
}

/// Capability interface of a HiDes device driver.
pub trait HiDesDriver {
    /// Handle on one open device.
    type Handle;

    /// List all attached devices, in driver order.
    fn enumerate(&mut self) -> Result<Vec<HiDesDeviceInfo>>;

    /// Open the device at `index` in enumeration order.
    fn open_index(&mut self, index: u32) -> Result<Self::Handle>;

    /// Open the device with the given name or path.
    fn open_name(&mut self, name: &str) -> Result<Self::Handle>;

    /// Fetch the identity of an open device.
    fn info(&mut self, handle: &Self::Handle) -> Result<HiDesDeviceInfo>;

    /// Fetch the allowed output gain range of an open device.
    fn gain_range(
        &mut self,
        handle: &Self::Handle,
        frequency: u64,
        bandwidth: Bandwidth,
    ) -> Result<GainRange>;

    /// Release an open device. Called exactly once per handle.
    fn close(&mut self, handle: &mut Self::Handle);
}

/// One open device, closed on drop.
pub struct DeviceSession<'a, D: HiDesDriver> {
    driver: &'a mut D,
    handle: D::Handle,
}

impl<'a, D: HiDesDriver> DeviceSession<'a, D> {
    /// Opens the device designated by `target`.
    ///
    /// # Errors
    ///
    /// Returns the driver error when the device cannot be opened, or
    /// [`DeviceError::Unsupported`] when `target` is not a single device.
    pub fn open(driver: &'a mut D, target: &DeviceTarget) -> Result<Self> {
        let handle = match target {
            DeviceTarget::ByName(name) => {
                debug!(name = %name, "opening HiDes device by name");
                driver.open_name(name)?
            }
            DeviceTarget::ByIndex(index) => {
                debug!(index, "opening HiDes device by index");
                driver.open_index(*index)?
            }
            DeviceTarget::AllDevices => {
                return Err(DeviceError::Unsupported(
                    "cannot open all devices as one session".to_string(),
                ));
            }
        };
        Ok(Self { driver, handle })
    }

    /// Identity of the open device.
    ///
    /// # Errors
    ///
    /// Propagates the driver error.
    pub fn info(&mut self) -> Result<HiDesDeviceInfo> {
        self.driver.info(&self.handle)
    }

    /// Output gain range of the open device.
    ///
    /// # Errors
    ///
    /// Propagates the driver error.
    pub fn gain_range(&mut self, frequency: u64, bandwidth: Bandwidth) -> Result<GainRange> {
        self.driver.gain_range(&self.handle, frequency, bandwidth)
    }
}

impl<D: HiDesDriver> Drop for DeviceSession<'_, D> {
    fn drop(&mut self) {
        debug!("closing HiDes device");
        self.driver.close(&mut self.handle);
    }
}
