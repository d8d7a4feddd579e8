//! Crate-level error types.

use std::fmt;

/// Errors produced by the circle-morph crate.
///
/// Everything here is detected eagerly: entropy failure before the frame
/// loop starts, configuration problems before the engine is built. The
/// frame loop itself is total - control mutators clamp instead of failing.
#[derive(Debug)]
pub enum Error {
    /// The system entropy source could not supply a seed.
    EntropyUnavailable(getrandom::Error),
    /// Rejected runtime configuration (zero frame rate, empty table, ...).
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropyUnavailable(e) => {
                write!(f, "cannot read random data from system entropy: {e}")
            }
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<getrandom::Error> for Error {
    fn from(e: getrandom::Error) -> Self {
        Self::EntropyUnavailable(e)
    }
}
