//! Recording driver used by unit tests.

use std::path::PathBuf;

use super::{DeviceError, GainRange, HiDesDeviceInfo, HiDesDriver, Result};
use crate::state::Bandwidth;

/// One driver call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Enumerate,
    OpenIndex(u32),
    OpenName(String),
    Info,
    GainRange(u64, Bandwidth),
    Close,
}

pub struct MockDriver {
    pub devices: Vec<HiDesDeviceInfo>,
    pub range: GainRange,
    pub fail_enumerate: bool,
    pub fail_open: bool,
    pub fail_info: bool,
    pub fail_gain_range: bool,
    pub calls: Vec<Call>,
}

impl MockDriver {
    pub fn with_devices(count: u32) -> Self {
        let devices = (0..count)
            .map(|index| HiDesDeviceInfo {
                index,
                name: format!("DEV{index}"),
                path: PathBuf::from(format!("/dev/usb-it95x{index}")),
                ..HiDesDeviceInfo::default()
            })
            .collect();
        Self {
            devices,
            range: GainRange {
                min_db: -3,
                max_db: 27,
            },
            fail_enumerate: false,
            fail_open: false,
            fail_info: false,
            fail_gain_range: false,
            calls: Vec::new(),
        }
    }

    pub fn closes(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Close).count()
    }

    fn failure() -> DeviceError {
        DeviceError::Unsupported("mock failure".to_string())
    }
}

impl HiDesDriver for MockDriver {
    type Handle = usize;

    fn enumerate(&mut self) -> Result<Vec<HiDesDeviceInfo>> {
        self.calls.push(Call::Enumerate);
        if self.fail_enumerate {
            return Err(Self::failure());
        }
        Ok(self.devices.clone())
    }

    fn open_index(&mut self, index: u32) -> Result<usize> {
        self.calls.push(Call::OpenIndex(index));
        if self.fail_open {
            return Err(Self::failure());
        }
        let slot = index as usize;
        if slot < self.devices.len() {
            Ok(slot)
        } else {
            Err(DeviceError::NotFound {
                index,
                available: self.devices.len(),
            })
        }
    }

    fn open_name(&mut self, name: &str) -> Result<usize> {
        self.calls.push(Call::OpenName(name.to_string()));
        if self.fail_open {
            return Err(Self::failure());
        }
        self.devices
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| DeviceError::NameNotFound(name.to_string()))
    }

    fn info(&mut self, handle: &usize) -> Result<HiDesDeviceInfo> {
        self.calls.push(Call::Info);
        if self.fail_info {
            return Err(Self::failure());
        }
        Ok(self.devices[*handle].clone())
    }

    fn gain_range(
        &mut self,
        _handle: &usize,
        frequency: u64,
        bandwidth: Bandwidth,
    ) -> Result<GainRange> {
        self.calls.push(Call::GainRange(frequency, bandwidth));
        if self.fail_gain_range {
            return Err(Self::failure());
        }
        Ok(self.range)
    }

    fn close(&mut self, _handle: &mut usize) {
        self.calls.push(Call::Close);
    }
}
