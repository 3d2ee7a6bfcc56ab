//! Tracing subscriber initialization.
//!
//! The localization crates emit `tracing` events from the reactive rules;
//! the embedding process decides where they go. This default sink is a
//! compact stderr writer filtered through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Defaults to `info`, overridable via `RUST_LOG`. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(true)
        .try_init();
}
