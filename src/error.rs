//! Unified error types for the light firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the render
//! path and bring-up code can use `?` uniformly.  All variants are `Copy`;
//! none of them ever reach the logical light state, which stays the source
//! of truth whatever the hardware does.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The pixel sink rejected a write or refresh.
    Sink(SinkError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "sink: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pixel sink errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// Pixel index is beyond the strip length.
    IndexOutOfRange(usize),
    /// The strip driver failed to clock out the frame.
    WriteFailed,
    /// The frame was sent but took longer than the refresh budget.
    Timeout { elapsed_ms: u32 },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(i) => write!(f, "pixel index {i} out of range"),
            Self::WriteFailed => write!(f, "strip write failed"),
            Self::Timeout { elapsed_ms } => write!(f, "refresh timed out after {elapsed_ms}ms"),
        }
    }
}

impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Input was not valid JSON for [`LightConfig`](crate::config::LightConfig).
    Parse,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "malformed config"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
