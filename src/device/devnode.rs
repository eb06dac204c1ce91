//! Driver backed by the it950x Linux device nodes.
//!
//! The kernel driver registers one `/dev/usb-it95xN` node per modulator and
//! exposes the USB attributes of the parent device through sysfs.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{DeviceError, GainRange, HiDesDeviceInfo, HiDesDriver, Result};
use crate::config::Settings;
use crate::constants;
use crate::state::Bandwidth;

/// Device-node driver for HiDes modulators.
#[derive(Debug, Clone)]
pub struct DevNodeDriver {
    device_dir: PathBuf,
    sysfs_dir: PathBuf,
    prefix: String,
}

/// An open device node.
#[derive(Debug)]
pub struct DevNodeHandle {
    file: Option<File>,
    info: HiDesDeviceInfo,
}

impl DevNodeDriver {
    /// Driver looking for `<device_dir>/<prefix>N` nodes, with USB attributes
    /// under `<sysfs_dir>/<prefix>N`.
    #[must_use]
    pub fn new(device_dir: PathBuf, sysfs_dir: PathBuf, prefix: String) -> Self {
        Self {
            device_dir,
            sysfs_dir,
            prefix,
        }
    }

    /// Driver configured from the settings file.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.device_dir.clone(),
            settings.sysfs_dir.clone(),
            settings.device_prefix.clone(),
        )
    }

    /// Node number of a device node name, if it belongs to this driver.
    /// Only plain decimal suffixes count: no sign, no leading zero.
    fn node_number(&self, file_name: &str) -> Option<u32> {
        let suffix = file_name.strip_prefix(&self.prefix)?;
        let canonical = !suffix.is_empty()
            && suffix.bytes().all(|b| b.is_ascii_digit())
            && (suffix == "0" || !suffix.starts_with('0'));
        if !canonical {
            return None;
        }
        suffix.parse().ok()
    }

    fn describe(&self, index: u32, name: String, path: PathBuf) -> HiDesDeviceInfo {
        // sysfs `device` points to the USB interface, attributes live on its parent
        let usb_dir = self.sysfs_dir.join(&name).join("device").join("..");

        HiDesDeviceInfo {
            index,
            vendor_id: read_hex_attribute(&usb_dir, "idVendor"),
            product_id: read_hex_attribute(&usb_dir, "idProduct"),
            manufacturer: read_attribute(&usb_dir, "manufacturer"),
            product: read_attribute(&usb_dir, "product"),
            serial: read_attribute(&usb_dir, "serial"),
            speed: read_attribute(&usb_dir, "speed"),
            name,
            path,
        }
    }

    fn open_info(info: HiDesDeviceInfo) -> Result<DevNodeHandle> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&info.path)
            .map_err(|source| DeviceError::Io {
                path: info.path.clone(),
                source,
            })?;
        debug!(path = %info.path.display(), "device node opened");
        Ok(DevNodeHandle {
            file: Some(file),
            info,
        })
    }
}

impl HiDesDriver for DevNodeDriver {
    type Handle = DevNodeHandle;

    fn enumerate(&mut self) -> Result<Vec<HiDesDeviceInfo>> {
        let entries = fs::read_dir(&self.device_dir).map_err(|source| DeviceError::Io {
            path: self.device_dir.clone(),
            source,
        })?;

        let mut nodes: Vec<(u32, String, PathBuf)> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                let number = self.node_number(&name)?;
                Some((number, name, entry.path()))
            })
            .collect();
        nodes.sort_by_key(|(number, _, _)| *number);

        let devices: Vec<HiDesDeviceInfo> = nodes
            .into_iter()
            .zip(0u32..)
            .map(|((_, name, path), index)| self.describe(index, name, path))
            .collect();

        debug!(
            dir = %self.device_dir.display(),
            count = devices.len(),
            "enumerated HiDes devices"
        );
        Ok(devices)
    }

    fn open_index(&mut self, index: u32) -> Result<DevNodeHandle> {
        let mut devices = self.enumerate()?;
        let available = devices.len();
        let slot = index as usize;
        if slot >= available {
            return Err(DeviceError::NotFound { index, available });
        }
        Self::open_info(devices.swap_remove(slot))
    }

    fn open_name(&mut self, name: &str) -> Result<DevNodeHandle> {
        let info = self
            .enumerate()?
            .into_iter()
            .find(|d| {
                d.name.eq_ignore_ascii_case(name)
                    || d.path.to_string_lossy().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| DeviceError::NameNotFound(name.to_string()))?;
        Self::open_info(info)
    }

    fn info(&mut self, handle: &DevNodeHandle) -> Result<HiDesDeviceInfo> {
        Ok(handle.info.clone())
    }

    fn gain_range(
        &mut self,
        _handle: &DevNodeHandle,
        frequency: u64,
        bandwidth: Bandwidth,
    ) -> Result<GainRange> {
        debug!(frequency, %bandwidth, "gain range requested");
        Err(DeviceError::Unsupported(
            constants::ERR_GAIN_RANGE_UNSUPPORTED.to_string(),
        ))
    }

    fn close(&mut self, handle: &mut DevNodeHandle) {
        if handle.file.take().is_some() {
            debug!(path = %handle.info.path.display(), "device node closed");
        }
    }
}

/// Reads one sysfs attribute, trimmed. Missing or empty attributes yield `None`.
fn read_attribute(dir: &Path, name: &str) -> Option<String> {
    match fs::read_to_string(dir.join(name)) {
        Ok(value) => {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }
        Err(e) => {
            debug!(attribute = name, dir = %dir.display(), "sysfs attribute unavailable: {e}");
            None
        }
    }
}

fn read_hex_attribute(dir: &Path, name: &str) -> Option<u16> {
    let raw = read_attribute(dir, name)?;
    match u16::from_str_radix(&raw, 16) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(attribute = name, value = %raw, "ignoring malformed sysfs attribute");
            None
        }
    }
}
