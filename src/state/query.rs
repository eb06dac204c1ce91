//! Resolved query configuration and device targeting.

use super::Bandwidth;

/// Which device(s) a query is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceTarget {
    /// Enumerate every attached device.
    AllDevices,
    /// Open one device by node name or path.
    ByName(String),
    /// Open one device by adapter index.
    ByIndex(u32),
}

/// Validated user intent for one invocation.
///
/// Built once by [`crate::cli::resolve`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Only display the number of devices.
    pub count: bool,
    /// Only display the output gain range of one device.
    pub gain_range: bool,
    /// Use the verbose descriptor rendering.
    pub verbose: bool,
    /// Adapter index selected with `--adapter`.
    pub adapter: Option<u32>,
    /// Device name selected with `--device`. Never `Some("")`.
    pub device_name: Option<String>,
    /// Carrier frequency for the gain-range query, in Hz.
    pub frequency: u64,
    /// Channel bandwidth for the gain-range query.
    pub bandwidth: Bandwidth,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            count: false,
            gain_range: false,
            verbose: false,
            adapter: None,
            device_name: None,
            frequency: crate::utils::default_frequency(),
            bandwidth: Bandwidth::default(),
        }
    }
}

impl Configuration {
    /// Device selection implied by the selectors.
    ///
    /// A name wins over an index. Gain-range queries always aim at a single
    /// device, the first one unless something else is selected.
    #[must_use]
    pub fn target(&self) -> DeviceTarget {
        if let Some(name) = &self.device_name {
            DeviceTarget::ByName(name.clone())
        } else if self.adapter.is_some() || self.gain_range {
            DeviceTarget::ByIndex(self.adapter.unwrap_or(0))
        } else {
            DeviceTarget::AllDevices
        }
    }

    /// Device acquisition actually performed.
    ///
    /// `--count` always enumerates all devices: the number printed is the
    /// number of attached devices, whatever `--adapter` or `--device` say.
    #[must_use]
    pub fn acquisition(&self) -> DeviceTarget {
        if self.count {
            DeviceTarget::AllDevices
        } else {
            self.target()
        }
    }
}
