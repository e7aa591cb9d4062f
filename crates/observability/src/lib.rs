//! Tracing/logging setup shared by every shopnav binary.

/// Initialize process-wide logging with the format named by
/// `SHOPNAV_LOG_FORMAT` (`json`, the default, or `pretty`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init(LogFormat::from_env());
}

pub use self::tracing::{init as init_with, LogFormat};

/// Subscriber configuration (filters, output format).
pub mod tracing;
