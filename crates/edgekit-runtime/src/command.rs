#![forbid(unsafe_code)]

//! The typed command set of the inbound command channel.
//!
//! The host's dispatcher receives string-keyed calls from the embedded
//! content layer; [`Command::decode`] turns each `(action, args)` pair into a
//! closed union, with an explicit [`DecodeError::Unrecognized`] outcome the
//! dispatcher uses to fall through to its default handling. The core itself
//! only ever sees fully typed [`Command`] values.

use crate::error::ChromeError;

/// A loosely typed argument as delivered by the command channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A boolean argument.
    Bool(bool),
    /// A string argument.
    Str(String),
}

impl ArgValue {
    /// The boolean payload, if this argument is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Str(_) => None,
        }
    }

    /// The string payload, if this argument is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

/// One operation of the command channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query whether the bars are currently visible.
    Ready,
    /// Show the system bars.
    Show {
        /// Leave the applied padding untouched instead of recomputing it.
        keep_insets: bool,
    },
    /// Hide the system bars.
    Hide {
        /// Leave the applied padding untouched instead of forcing zero.
        keep_insets: bool,
    },
    /// Set the status-bar fill from a hex color string.
    SetStatusBarColor(String),
    /// Set the navigation-bar fill from a hex color string.
    SetNavBarColor(String),
    /// Enter or leave the fullscreen-overlay display mode.
    SetOverlay(bool),
    /// Force dark content on both bars.
    SetStyleDefault,
    /// Force light content on both bars.
    SetStyleLightContent,
    /// One-shot read of the applied safe-area insets.
    GetSafeAreaInsets,
    /// Open a keep-alive stream of safe-area insets.
    SubscribeSafeAreaInsets,
}

/// Failure to turn a channel call into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The action name is not part of the command set. The external
    /// dispatcher handles the fall-through; the core never sees the call.
    Unrecognized(String),
    /// The action was recognized but its arguments were unusable.
    Command(ChromeError),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized(action) => write!(f, "unrecognized action {action:?}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<ChromeError> for DecodeError {
    fn from(err: ChromeError) -> Self {
        Self::Command(err)
    }
}

impl Command {
    /// Decode a string-keyed channel call into the command union.
    ///
    /// Boolean-valued actions reject missing or non-boolean arguments with
    /// [`ChromeError::InvalidArgument`]; color actions reject missing or
    /// non-string arguments with [`ChromeError::InvalidFormat`], matching how
    /// the channel reports unusable color input. `show`/`hide` take an
    /// optional `keepInsets` boolean defaulting to `false`. Surplus arguments
    /// are ignored.
    pub fn decode(action: &str, args: &[ArgValue]) -> Result<Self, DecodeError> {
        match action {
            "_ready" => Ok(Self::Ready),
            "show" => Ok(Self::Show {
                keep_insets: optional_bool(args)?,
            }),
            "hide" => Ok(Self::Hide {
                keep_insets: optional_bool(args)?,
            }),
            "backgroundColorByHexString" => {
                Ok(Self::SetStatusBarColor(required_color(args)?))
            }
            "navigationBackgroundColorByHexString" => {
                Ok(Self::SetNavBarColor(required_color(args)?))
            }
            "overlaysWebView" => Ok(Self::SetOverlay(required_bool(args)?)),
            "styleDefault" => Ok(Self::SetStyleDefault),
            "styleLightContent" => Ok(Self::SetStyleLightContent),
            "getSafeAreaInsets" => Ok(Self::GetSafeAreaInsets),
            "subscribeSafeAreaInsets" => Ok(Self::SubscribeSafeAreaInsets),
            other => Err(DecodeError::Unrecognized(other.to_owned())),
        }
    }

    /// Return a stable name for telemetry and tracing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Show { .. } => "Show",
            Self::Hide { .. } => "Hide",
            Self::SetStatusBarColor(_) => "SetStatusBarColor",
            Self::SetNavBarColor(_) => "SetNavBarColor",
            Self::SetOverlay(_) => "SetOverlay",
            Self::SetStyleDefault => "SetStyleDefault",
            Self::SetStyleLightContent => "SetStyleLightContent",
            Self::GetSafeAreaInsets => "GetSafeAreaInsets",
            Self::SubscribeSafeAreaInsets => "SubscribeSafeAreaInsets",
        }
    }
}

fn optional_bool(args: &[ArgValue]) -> Result<bool, DecodeError> {
    match args.first() {
        None => Ok(false),
        Some(arg) => arg
            .as_bool()
            .ok_or(DecodeError::Command(ChromeError::InvalidArgument)),
    }
}

fn required_bool(args: &[ArgValue]) -> Result<bool, DecodeError> {
    args.first()
        .and_then(ArgValue::as_bool)
        .ok_or(DecodeError::Command(ChromeError::InvalidArgument))
}

fn required_color(args: &[ArgValue]) -> Result<String, DecodeError> {
    let raw = args
        .first()
        .and_then(ArgValue::as_str)
        .ok_or(DecodeError::Command(ChromeError::InvalidFormat))?;
    Ok(normalize_hex(raw))
}

/// Normalize content-layer color shorthand before strict parsing.
///
/// A missing `#` prefix is inserted and the `#RGB` shorthand expands to
/// `#RRGGBB`. Anything else passes through untouched; strict validation
/// happens at parse time.
#[must_use]
pub fn normalize_hex(raw: &str) -> String {
    let prefixed = if raw.starts_with('#') {
        raw.to_owned()
    } else {
        format!("#{raw}")
    };
    let digits = &prefixed[1..];
    if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        let mut expanded = String::with_capacity(7);
        expanded.push('#');
        for c in digits.chars() {
            expanded.push(c);
            expanded.push(c);
        }
        return expanded;
    }
    prefixed
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Decoding ---

    #[test]
    fn decodes_every_action() {
        assert_eq!(Command::decode("_ready", &[]), Ok(Command::Ready));
        assert_eq!(
            Command::decode("show", &[]),
            Ok(Command::Show { keep_insets: false })
        );
        assert_eq!(
            Command::decode("hide", &[ArgValue::Bool(true)]),
            Ok(Command::Hide { keep_insets: true })
        );
        assert_eq!(
            Command::decode("overlaysWebView", &[ArgValue::Bool(true)]),
            Ok(Command::SetOverlay(true))
        );
        assert_eq!(Command::decode("styleDefault", &[]), Ok(Command::SetStyleDefault));
        assert_eq!(
            Command::decode("styleLightContent", &[]),
            Ok(Command::SetStyleLightContent)
        );
        assert_eq!(
            Command::decode("getSafeAreaInsets", &[]),
            Ok(Command::GetSafeAreaInsets)
        );
        assert_eq!(
            Command::decode("subscribeSafeAreaInsets", &[]),
            Ok(Command::SubscribeSafeAreaInsets)
        );
    }

    #[test]
    fn color_actions_carry_normalized_input() {
        assert_eq!(
            Command::decode("backgroundColorByHexString", &[ArgValue::from("#336699")]),
            Ok(Command::SetStatusBarColor("#336699".into()))
        );
        assert_eq!(
            Command::decode(
                "navigationBackgroundColorByHexString",
                &[ArgValue::from("369")]
            ),
            Ok(Command::SetNavBarColor("#336699".into()))
        );
    }

    #[test]
    fn unrecognized_action_falls_through() {
        assert_eq!(
            Command::decode("tint", &[]),
            Err(DecodeError::Unrecognized("tint".into()))
        );
    }

    #[test]
    fn boolean_action_rejects_bad_argument() {
        assert_eq!(
            Command::decode("overlaysWebView", &[]),
            Err(DecodeError::Command(ChromeError::InvalidArgument))
        );
        assert_eq!(
            Command::decode("overlaysWebView", &[ArgValue::from("yes")]),
            Err(DecodeError::Command(ChromeError::InvalidArgument))
        );
        assert_eq!(
            Command::decode("show", &[ArgValue::from("true")]),
            Err(DecodeError::Command(ChromeError::InvalidArgument))
        );
    }

    #[test]
    fn color_action_rejects_missing_argument() {
        assert_eq!(
            Command::decode("backgroundColorByHexString", &[]),
            Err(DecodeError::Command(ChromeError::InvalidFormat))
        );
        assert_eq!(
            Command::decode("backgroundColorByHexString", &[ArgValue::Bool(true)]),
            Err(DecodeError::Command(ChromeError::InvalidFormat))
        );
    }

    // --- Normalization ---

    #[test]
    fn normalize_inserts_hash() {
        assert_eq!(normalize_hex("FFFFFF"), "#FFFFFF");
        assert_eq!(normalize_hex("#FFFFFF"), "#FFFFFF");
    }

    #[test]
    fn normalize_expands_shorthand() {
        assert_eq!(normalize_hex("#1aF"), "#11aaFF");
        assert_eq!(normalize_hex("abc"), "#aabbcc");
    }

    #[test]
    fn normalize_leaves_invalid_input_for_the_parser() {
        assert_eq!(normalize_hex("notacolor"), "#notacolor");
        assert_eq!(normalize_hex("#zzz"), "#zzz");
        assert_eq!(normalize_hex(""), "#");
    }
}
