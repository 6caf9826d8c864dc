#![forbid(unsafe_code)]

//! Color parsing and content-style derivation for system bars.
//!
//! This crate is the color leaf of EdgeKit: it parses the hex color strings
//! arriving over the command channel and decides whether a bar needs light or
//! dark foreground content to stay readable on a given background fill.
//!
//! - [`Rgba`] - 8-bit-per-channel RGBA color
//! - [`parse_hex`] - strict `#RRGGBB` / `#AARRGGBB` parser
//! - [`BarStyle`] - light/dark content style, derivable from luminance
//! - [`ColorParseError`] - rejection of malformed input, no best-effort repair

pub mod color;

pub use color::{BarStyle, ColorParseError, Rgba, parse_hex};
