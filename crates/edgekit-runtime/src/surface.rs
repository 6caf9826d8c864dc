#![forbid(unsafe_code)]

//! The outbound seam between the chrome core and the hosting platform.
//!
//! The core never touches host window, activity, or view types directly.
//! Every effect it produces — bar fills, content styles, visibility flags,
//! content padding — goes through [`NativeSurface`], and every fact it needs
//! about the platform comes back through the same trait. One implementation
//! exists per host; the [`RecordingSurface`](crate::simulator::RecordingSurface)
//! test double is another.
//!
//! Layout-change notifications flow the other way: host glue wires the
//! platform's layout listener to
//! [`ChromeHandle::notify_layout_changed`](crate::program::ChromeHandle::notify_layout_changed),
//! so the core never registers callbacks on host types.

use edgekit_layout::{InsetRect, KeyboardState};
use edgekit_style::{BarStyle, Rgba};

/// Which system bar an effect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarKind {
    /// The status bar at the top edge.
    Status,
    /// The navigation bar at the bottom edge.
    Navigation,
}

impl BarKind {
    /// Short label for display and logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Navigation => "navigation",
        }
    }
}

impl std::fmt::Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Static capability facts about the host, determined once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformCapability {
    /// Whether the host can lay content out behind transparent system bars.
    pub edge_to_edge_supported: bool,
}

/// Host-side effects and queries consumed by the chrome core.
///
/// Implementations translate these calls to whatever the platform actually
/// needs (window flags, inset controllers, view padding) and are responsible
/// for unit conversion: every distance crossing this trait is in
/// density-independent units, with display-cutout contributions already
/// merged into the system-bar insets.
pub trait NativeSurface {
    /// Set the background fill of one bar.
    fn set_bar_color(&mut self, bar: BarKind, color: Rgba);

    /// Set the foreground content style of one bar.
    fn set_bar_style(&mut self, bar: BarKind, style: BarStyle);

    /// Show or hide both system bars.
    fn set_bars_visible(&mut self, visible: bool);

    /// Set the root-view background that shows through transparent bars.
    ///
    /// Only meaningful on edge-to-edge capable hosts; legacy hosts may treat
    /// this as a no-op.
    fn set_root_background(&mut self, color: Rgba);

    /// Apply content padding to the embedded view.
    fn set_content_padding(&mut self, insets: InsetRect);

    /// Report the host's static capability level.
    fn platform_capability(&self) -> PlatformCapability;

    /// Report the current system-bar insets (cutouts merged in) and the
    /// transient keyboard state.
    fn current_system_insets(&self) -> (InsetRect, KeyboardState);
}
