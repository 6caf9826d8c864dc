#![forbid(unsafe_code)]

//! EdgeKit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! EdgeKit governs the visual chrome (status bar, navigation bar) and the
//! safe-area insets of a full-screen embedded view inside a host
//! application: host glue implements [`NativeSurface`], spawns a
//! [`ChromeProgram`], and forwards the content layer's calls through
//! [`Command::decode`] and a [`ChromeHandle`].

// --- Style re-exports ------------------------------------------------------

pub use edgekit_style::{BarStyle, ColorParseError, Rgba, parse_hex};

// --- Layout re-exports -----------------------------------------------------

pub use edgekit_layout::{InsetRect, KeyboardState, compute_insets};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use edgekit_runtime::{
    ArgValue, BarAppearance, BarKind, ChromeConfig, ChromeController, ChromeError, ChromeHandle,
    ChromeProgram, ChromeSimulator, Command, CommandReply, CommandTicket, DecodeError,
    DisplayMode, InsetStream, NativeSurface, PlatformCapability, SubId, normalize_hex,
};

/// Standard result type for EdgeKit command operations.
#[cfg(feature = "runtime")]
pub type Result<T> = std::result::Result<T, ChromeError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    //! Common imports for host glue and tests.

    pub use crate::{BarStyle, InsetRect, KeyboardState, Rgba};

    #[cfg(feature = "runtime")]
    pub use crate::{
        BarKind, ChromeError, ChromeHandle, ChromeProgram, Command, CommandReply, DisplayMode,
        InsetStream, NativeSurface, PlatformCapability, Result,
    };
}
