#![forbid(unsafe_code)]

//! Error taxonomy for chrome commands.
//!
//! Every error is local to the single command that raised it: the command
//! fails, prior state is preserved, and the program loop keeps running.

use edgekit_style::ColorParseError;

/// Failure modes of a chrome command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeError {
    /// A color argument was empty, malformed, or unrecognized.
    InvalidFormat,
    /// An argument had the wrong shape or type for the command.
    InvalidArgument,
    /// The command arrived before the hosting view was attached and measured.
    /// Callers should retry after the ready signal.
    NotAttached,
}

impl std::fmt::Display for ChromeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid hex color string"),
            Self::InvalidArgument => write!(f, "invalid argument for command"),
            Self::NotAttached => write!(f, "host view is not attached"),
        }
    }
}

impl std::error::Error for ChromeError {}

impl From<ColorParseError> for ChromeError {
    fn from(err: ColorParseError) -> Self {
        match err {
            ColorParseError::InvalidFormat => Self::InvalidFormat,
        }
    }
}
