//! Process-wide runtime setup.
//!
//! [`Runtime`] installs the error report hooks and the diagnostic log
//! subscriber. It must outlive every device session: `main` drops it last.

use std::io::{self, Write};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Guard for the process-wide runtime. Dropping it flushes stdout.
#[derive(Debug)]
pub struct Runtime {
    _private: (),
}

impl Runtime {
    /// Installs error hooks and logging. Diagnostics go to stderr, filtered by
    /// `HIDES_LOG` (`warn` when unset) or forced to `debug` by `debug`.
    ///
    /// # Errors
    ///
    /// Fails if called twice in the same process.
    pub fn init(debug: bool) -> Result<Self> {
        color_eyre::install()?;

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(false)
            .with_env_filter(log_filter(debug))
            .try_init()
            .map_err(|e| eyre!("cannot install log subscriber: {e}"))?;

        debug!(
            "{} v{} starting",
            constants::APP_NAME,
            constants::APP_VERSION
        );
        Ok(Self { _private: () })
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        flush_output(&mut io::stdout());
        debug!("runtime shut down");
    }
}

/// Flushes `out`, logging a failure instead of dropping it. Returns whether
/// the flush succeeded.
fn flush_output<W: Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!("cannot flush stdout: {e}");
            false
        }
    }
}

fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_overrides_environment() {
        assert_eq!(log_filter(true).to_string(), "debug");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_flush_failure_is_reported() {
        assert!(!flush_output(&mut BrokenPipe));
        assert!(flush_output(&mut Vec::new()));
    }
}
