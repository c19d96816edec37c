// src/log.rs
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const QUIET: &str = "warn";
const VERBOSE: &str = "warn,tba_csv=debug";

/// Install the stderr subscriber. Stdout is reserved for CSV rows.
///
/// `RUST_LOG` wins over `verbose` when set. Calling this twice is harmless;
/// the second install is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE } else { QUIET }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
