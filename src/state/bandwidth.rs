//! DVB-T channel bandwidth.

use serde::{Deserialize, Serialize};

/// Channel bandwidth of a DVB-T carrier.
///
/// On the command line and in the settings file the value is written in MHz
/// (`5`, `6`, `7` or `8`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum Bandwidth {
    /// 5 MHz channel.
    #[value(name = "5")]
    Mhz5,
    /// 6 MHz channel.
    #[value(name = "6")]
    Mhz6,
    /// 7 MHz channel.
    #[value(name = "7")]
    Mhz7,
    /// 8 MHz channel.
    #[default]
    #[value(name = "8")]
    Mhz8,
}

impl Bandwidth {
    /// Width in MHz.
    #[must_use]
    pub const fn mhz(self) -> u32 {
        match self {
            Self::Mhz5 => 5,
            Self::Mhz6 => 6,
            Self::Mhz7 => 7,
            Self::Mhz8 => 8,
        }
    }
}

impl std::fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mhz())
    }
}

impl TryFrom<u32> for Bandwidth {
    type Error = String;

    fn try_from(mhz: u32) -> Result<Self, Self::Error> {
        match mhz {
            5 => Ok(Self::Mhz5),
            6 => Ok(Self::Mhz6),
            7 => Ok(Self::Mhz7),
            8 => Ok(Self::Mhz8),
            other => Err(format!("unsupported bandwidth: {other} MHz (expected 5, 6, 7 or 8)")),
        }
    }
}

impl From<Bandwidth> for u32 {
    fn from(bandwidth: Bandwidth) -> Self {
        bandwidth.mhz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_display_is_mhz_label() {
        assert_eq!(Bandwidth::Mhz5.to_string(), "5");
        assert_eq!(Bandwidth::Mhz8.to_string(), "8");
        assert_eq!(u32::from(Bandwidth::Mhz7), 7);
    }

    #[test]
    fn test_six_mhz_is_its_own_value() {
        let parsed = Bandwidth::from_str("6", false).unwrap();
        assert_eq!(parsed, Bandwidth::Mhz6);
        assert_eq!(parsed.mhz(), 6);
    }

    #[test]
    fn test_try_from_rejects_unknown_width() {
        assert_eq!(Bandwidth::try_from(7), Ok(Bandwidth::Mhz7));
        assert!(Bandwidth::try_from(10).unwrap_err().contains("10 MHz"));
    }

    #[test]
    fn test_default_is_eight_mhz() {
        assert_eq!(Bandwidth::default(), Bandwidth::Mhz8);
    }
}
