// crates/valset-core/src/logging.rs
//
// Tracing subscriber setup shared by scenarios and integration tests.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence over `level` when set. Installing twice is
/// not an error: later calls are ignored, so every test may call this.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_err()
    {
        tracing::trace!("Tracing subscriber already installed");
    }
}
