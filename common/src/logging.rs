//! Operator-status macros.
//!
//! Thin wrappers over [`tracing`] events. The CLI installs a formatter that
//! renders each level as a colored status symbol, so `success!` lines show
//! up as `[+]`, `warn!` as `[*]` and `fail!` as `[x]`. Library crates emit
//! statuses through these and keep `tracing::debug!` for diagnostics.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
