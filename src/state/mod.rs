//! Value types describing one inspector invocation.

mod bandwidth;
mod query;

pub use bandwidth::Bandwidth;
pub use query::{Configuration, DeviceTarget};
