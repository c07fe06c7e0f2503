//! Logging setup for the service binary.
//!
//! Library code only emits records through the `log` facade; whichever
//! logger the host installs receives them.

use env_logger::Env;

/// Installs `env_logger`, honoring `RUST_LOG` and defaulting to `info`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
