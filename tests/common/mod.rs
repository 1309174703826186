//! Helpers shared by the integration tests.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by url-hostname and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every resolved relative host:
///   RUST_LOG=url_hostname=TRACE
///
/// Events are only emitted if the `tracing` feature is enabled.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
