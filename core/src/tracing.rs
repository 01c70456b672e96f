//! Tracing utilities for statement observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The feature check happens in the calling crate, which
//! must expose its own `tracing` feature.

/// Emit a debug-level tracing event with the operation name and SQL text.
///
/// ```ignore
/// persistence_trace_sql!("find_all", &sql);
/// ```
#[macro_export]
macro_rules! persistence_trace_sql {
    ($op:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(op = $op, sql = %$sql, "persistence.sql");
    };
}

/// Emit an info-level tracing event with the operation name and SQL text.
///
/// Used when statement logging is switched on in configuration.
///
/// ```ignore
/// persistence_show_sql!("persist", &sql);
/// ```
#[macro_export]
macro_rules! persistence_show_sql {
    ($op:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::info!(op = $op, sql = %$sql, "persistence.sql");
    };
}
