//! Tracing setup shared by the shop binaries.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,shop=debug,sqlx=warn";

/// `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Formatting subscriber writing to stderr, gated only by `filter`.
pub fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

/// Initializes the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set (e.g. `RUST_LOG=shop_store=trace`)
/// - Otherwise [`DEFAULT_FILTER`]
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_tracing() {
    // A subscriber may already be installed (tests, repeated calls)
    let _ = tracing::subscriber::set_global_default(subscriber(env_filter()));
}

// =============================================================================
// Unit Tests
// =============================================================================
