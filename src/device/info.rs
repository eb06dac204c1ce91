//! Device descriptor and its text renderings.

use std::fmt::Write as _;
use std::path::PathBuf;

/// Identity of one HiDes device, as reported by the driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HiDesDeviceInfo {
    /// Adapter index, in enumeration order.
    pub index: u32,
    /// Device name (e.g., `usb-it95x0`).
    pub name: String,
    /// Device node path.
    pub path: PathBuf,
    /// USB vendor id.
    pub vendor_id: Option<u16>,
    /// USB product id.
    pub product_id: Option<u16>,
    /// USB manufacturer string.
    pub manufacturer: Option<String>,
    /// USB product string.
    pub product: Option<String>,
    /// USB serial number.
    pub serial: Option<String>,
    /// USB link speed, in Mb/s.
    pub speed: Option<String>,
}

impl HiDesDeviceInfo {
    /// One-line summary: `0: "usb-it95x0" (/dev/usb-it95x0)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: \"{}\" ({})", self.index, self.name, self.path.display())
    }

    /// Full description, one `Label: value` per line, without trailing newline.
    /// Attributes the driver could not read are left out.
    #[must_use]
    pub fn details(&self) -> String {
        let mut text = String::with_capacity(256);

        let _ = write!(text, "Index: {}", self.index);
        let _ = write!(text, "\nName: \"{}\"", self.name);
        let _ = write!(text, "\nDevice: {}", self.path.display());
        if let Some(id) = self.vendor_id {
            let _ = write!(text, "\nVendor id: 0x{id:04X}");
        }
        if let Some(id) = self.product_id {
            let _ = write!(text, "\nProduct id: 0x{id:04X}");
        }
        if let Some(s) = &self.manufacturer {
            let _ = write!(text, "\nManufacturer: {s}");
        }
        if let Some(s) = &self.product {
            let _ = write!(text, "\nProduct: {s}");
        }
        if let Some(s) = &self.serial {
            let _ = write!(text, "\nSerial number: {s}");
        }
        if let Some(s) = &self.speed {
            let _ = write!(text, "\nUSB speed: {s} Mb/s");
        }

        text
    }

    /// Terse or verbose rendering.
    #[must_use]
    pub fn render(&self, verbose: bool) -> String {
        if verbose {
            self.details()
        } else {
            self.summary()
        }
    }
}
