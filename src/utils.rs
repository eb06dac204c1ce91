//! Small formatting and frequency helpers.

use crate::constants;

/// Formats an integer with `,` thousands separators (`650000000` -> `650,000,000`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Centre frequency of a UHF channel, in Hz.
#[must_use]
pub const fn uhf_frequency(channel: u32) -> u64 {
    constants::UHF_BASE_FREQUENCY + constants::UHF_CHANNEL_WIDTH * channel as u64
}

/// Default carrier frequency for gain-range queries: the first UHF channel.
#[must_use]
pub const fn default_frequency() -> u64 {
    uhf_frequency(constants::UHF_FIRST_CHANNEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(650_000_000), "650,000,000");
        assert_eq!(group_thousands(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn test_default_frequency_is_channel_21() {
        assert_eq!(uhf_frequency(21), 474_000_000);
        assert_eq!(default_frequency(), 474_000_000);
    }
}
