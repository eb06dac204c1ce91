//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;
use crate::state::Bandwidth;

/// List HiDes modulator devices
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// HiDes adapter number to list. By default, list all HiDes devices
    #[arg(short = 'a', long, value_name = "N")]
    pub adapter: Option<u32>,

    /// Bandwidth in MHz with --gain-range [default: 8]
    #[arg(short = 'b', long, value_enum, value_name = "MHZ")]
    pub bandwidth: Option<Bandwidth>,

    /// Only display the number of devices
    #[arg(short = 'c', long)]
    pub count: bool,

    /// HiDes device name or path to list. By default, list all HiDes devices
    #[arg(short = 'd', long, value_name = "NAME")]
    pub device: Option<String>,

    /// Frequency, in Hz, of the output carrier with --gain-range [default: first UHF channel]
    #[arg(
        short = 'f',
        long,
        value_name = "HZ",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub frequency: Option<u64>,

    /// Display the allowed range of output gain for the device, using the
    /// specified frequency and bandwidth
    #[arg(short = 'g', long)]
    pub gain_range: bool,

    /// Produce verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Emit debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR", env = constants::ENV_CONFIG_DIR)]
    pub config_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let argv = "hides -d DEV1 -g -f 650000000 -b 8 -v".split_whitespace();
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.device.as_deref(), Some("DEV1"));
        assert!(args.gain_range);
        assert_eq!(args.frequency, Some(650_000_000));
        assert_eq!(args.bandwidth, Some(Bandwidth::Mhz8));
        assert!(args.verbose);
        assert!(!args.count);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from(["hides", "--adapter", "2", "--count"]).unwrap();
        assert_eq!(args.adapter, Some(2));
        assert!(args.count);
    }

    #[test]
    fn test_rejects_zero_frequency() {
        assert!(Args::try_parse_from(["hides", "-f", "0"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_bandwidth() {
        assert!(Args::try_parse_from(["hides", "-b", "10"]).is_err());
    }

    #[test]
    fn test_rejects_negative_adapter() {
        assert!(Args::try_parse_from(["hides", "-a", "-1"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
