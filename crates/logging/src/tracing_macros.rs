//! crates/logging/src/tracing_macros.rs
//! Convenience macros for treewalk-specific tracing.
//!
//! These macros wrap the standard tracing macros with targets that
//! [`crate::TreewalkLayer`] maps back onto info and debug flags.

/// Emit a traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("yielded {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "treewalk::walk", $($arg)*);
    };
}

/// Emit a skip trace.
///
/// # Example
/// ```ignore
/// trace_skip!("pruned {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_skip {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "treewalk::skip", $($arg)*);
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!("{} entries", count);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "treewalk::stats", $($arg)*);
    };
}
