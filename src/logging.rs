//! Logging abstraction layer.
//!
//! The navigation macros dispatch to either [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing), depending on which feature is
//! enabled. Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Every record is emitted under the [`LOG_TARGET`] target, so an
//! application can raise or silence navigation logging on its own:
//!
//! ```text
//! RUST_LOG=stream_navigator=debug
//! ```
//!
//! ```ignore
//! use stream_navigator::{debug_log, info_log, warn_log};
//!
//! debug_log!("Bare request '{}' matches current url, refreshing", target);
//! info_log!("Transition #{} committed: '{}'", id, url);
//! warn_log!("Error route has nothing to recover");
//! ```

/// Target attached to every log record emitted by this crate.
pub const LOG_TARGET: &str = "stream_navigator";

/// Emit a **trace**-level record under [`LOG_TARGET`].
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Emit a **debug**-level record under [`LOG_TARGET`].
///
/// Used for policy decisions: which branch a request took and why.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Emit an **info**-level record under [`LOG_TARGET`].
///
/// Used for committed transitions and route registration.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::info!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Emit a **warn**-level record under [`LOG_TARGET`].
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Emit an **error**-level record under [`LOG_TARGET`].
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::error!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}
