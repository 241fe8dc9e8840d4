//! Error types for the adapter layer.
//!
//! The [`Button`](crate::button::Button) state machine itself never fails.
//! Everything around it (pin sampling, configuration decoding) funnels into
//! the single `Copy` enum below so a poll loop can handle it uniformly.

use core::fmt;

use embedded_hal::digital::ErrorKind;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input pin could not be read this cycle.
    Sample(ErrorKind),
    /// A configuration value is out of range.
    Config(&'static str),
    /// A serialized configuration blob could not be decoded.
    Decode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample(kind) => write!(f, "sample: {kind}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Decode => write!(f, "config decode failed"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::Sample(kind)
    }
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Self::Decode
    }
}

impl From<postcard::Error> for Error {
    fn from(_: postcard::Error) -> Self {
        Self::Decode
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
