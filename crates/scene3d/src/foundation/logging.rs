//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Honors `RUST_LOG`; falls back to `info` for this crate when unset.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("scene3d=info"))
        .init();
}

/// Initialize logging for tests, ignoring repeated initialization
pub fn try_init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
