//! Inspector for HiDes USB DVB-T modulator devices.
//!
//! Lists the attached modulators, describes one of them, or reports the
//! allowed output gain range for a carrier frequency and bandwidth.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod device;
pub mod runtime;
pub mod state;
pub mod utils;
