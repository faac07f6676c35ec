#![forbid(unsafe_code)]

//! Logging shim over `tracing`.
//!
//! All logging in the workspace goes through the optional `tracing`
//! feature; with the feature off this module compiles to nothing and no
//! logging dependency is linked. The `tracing-json` feature additionally
//! pulls in a JSON subscriber for production log pipelines.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops if a global
/// subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
