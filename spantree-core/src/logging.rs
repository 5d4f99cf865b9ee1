//! Structured logging for traversal audit trails using **tracing**.
//!
//! The library itself only emits `tracing` events (round progress,
//! supernode skips, query completion); installing a collector is the
//! embedding application's job. The JSON subscriber configured here
//! provides machine-readable output for observability platforms.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime. It configures structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=spantree=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr) // keeps stdout clean for query output
        .init();
}
