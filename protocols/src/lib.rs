//! Thin async transport wrappers used by the liveness prober.
//!
//! Nothing here owns policy: callers decide what a refused or timed-out
//! connection means.

pub mod tcp;
pub mod udp;

use std::io;

use thiserror::Error;

/// Why a connect attempt did not produce an open socket.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The peer answered with a reset; something is there but not listening.
    #[error("connection refused")]
    Refused,
    /// No answer within the configured limit.
    #[error("connect timed out")]
    TimedOut,
    #[error(transparent)]
    Io(#[from] io::Error),
}
