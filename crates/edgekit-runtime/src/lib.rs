#![forbid(unsafe_code)]

//! EdgeKit Runtime
//!
//! This crate ties the color and inset leaves into the chrome core: the
//! display-mode state machine, the visibility toggle, the safe-area
//! subscription channel, and the single-threaded program loop that serializes
//! commands with layout events.
//!
//! # Key Components
//!
//! - [`ChromeProgram`] / [`ChromeHandle`] - the UI-affinity loop and its
//!   thread-safe entry point
//! - [`ChromeController`] - display-mode state machine and effect producer
//! - [`Command`] - the closed command union of the inbound channel
//! - [`NativeSurface`] - the outbound seam to the hosting platform
//! - [`InsetStream`] - cancellable keep-alive stream of safe-area insets
//! - [`ChromeSimulator`] - deterministic, threadless driver for tests
//!
//! # Role in EdgeKit
//! `edgekit-runtime` is the orchestrator. It consumes typed commands from the
//! host's dispatcher, drives the mode/appearance state machine, and issues
//! ordered effects against the host through `NativeSurface`.

pub mod chrome;
pub mod command;
pub mod error;
pub mod program;
pub mod simulator;
pub mod subscription;
pub mod surface;

pub use chrome::{BarAppearance, ChromeConfig, ChromeController, DisplayMode};
pub use command::{ArgValue, Command, DecodeError, normalize_hex};
pub use error::ChromeError;
pub use program::{ChromeHandle, ChromeProgram, CommandReply, CommandTicket};
pub use simulator::{ChromeSimulator, Effect, RecordingSurface};
pub use subscription::{InsetStream, SubId};
pub use surface::{BarKind, NativeSurface, PlatformCapability};
