#![forbid(unsafe_code)]

//! The display-mode state machine and bar appearance controller.
//!
//! [`ChromeController`] owns every piece of mutable chrome state: the active
//! [`DisplayMode`], the last explicitly set bar colors and current content
//! styles, the visibility toggle, and the applied content padding. It turns
//! command operations into ordered effects against the [`NativeSurface`]:
//! visibility flags first, bar colors second, content padding last.
//!
//! The controller is single-threaded by construction; the program loop in
//! [`crate::program`] is the only caller and serializes commands with layout
//! events.

use edgekit_layout::{InsetRect, compute_insets};
use edgekit_style::{BarStyle, Rgba, parse_hex};
use tracing::{debug, info, trace};

use crate::error::ChromeError;
use crate::surface::{BarKind, NativeSurface, PlatformCapability};

/// Mutually exclusive display modes.
///
/// The mode space partitions by host capability: on an edge-to-edge capable
/// host `Normal` is unreachable after the first reconciliation, on a legacy
/// host `EdgeToEdge` is never entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Opaque bars reserve their own space; the core applies no padding.
    #[default]
    Normal,
    /// Content draws behind transparent bars and is padded clear of them.
    EdgeToEdge,
    /// Bars are transparent and content receives no padding at all.
    FullscreenOverlay,
}

impl DisplayMode {
    /// Short label for display and logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::EdgeToEdge => "edge-to-edge",
            Self::FullscreenOverlay => "fullscreen-overlay",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Last explicitly set bar colors plus the content styles currently applied.
///
/// Colors here are what the caller asked for; the mode's transparency rule
/// decides what actually reaches the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarAppearance {
    /// Requested status-bar fill.
    pub status_color: Rgba,
    /// Requested navigation-bar fill.
    pub nav_color: Rgba,
    /// Content style applied to the status bar.
    pub status_style: BarStyle,
    /// Content style applied to the navigation bar.
    pub nav_style: BarStyle,
}

impl BarAppearance {
    fn with_fill(color: Rgba) -> Self {
        let style = BarStyle::for_background(color);
        Self {
            status_color: color,
            nav_color: color,
            status_style: style,
            nav_style: style,
        }
    }
}

/// Startup configuration for the chrome controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeConfig {
    /// Fill applied to both bars at the first reconciliation.
    pub default_bar_color: Rgba,
    /// Whether the bars start out visible.
    pub start_visible: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            default_bar_color: Rgba::WHITE,
            start_visible: true,
        }
    }
}

/// Owner of all mutable chrome state and producer of surface effects.
pub struct ChromeController<S: NativeSurface> {
    surface: S,
    capability: PlatformCapability,
    mode: DisplayMode,
    appearance: BarAppearance,
    bars_visible: bool,
    /// Gate for reactive re-padding on layout events. Set when entering
    /// edge-to-edge, cleared by fullscreen/normal transitions and by
    /// `hide(keep_insets = false)`.
    insets_enabled: bool,
    applied_insets: InsetRect,
    attached: bool,
}

impl<S: NativeSurface> ChromeController<S> {
    /// Create a controller over a surface with the default configuration.
    ///
    /// The platform capability is queried exactly once, here.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, ChromeConfig::default())
    }

    /// Create a controller with an explicit configuration.
    pub fn with_config(surface: S, config: ChromeConfig) -> Self {
        let capability = surface.platform_capability();
        Self {
            surface,
            capability,
            mode: DisplayMode::Normal,
            appearance: BarAppearance::with_fill(config.default_bar_color),
            bars_visible: config.start_visible,
            insets_enabled: false,
            applied_insets: InsetRect::ZERO,
            attached: false,
        }
    }

    /// First reconciliation, run when the host view is attached and measured.
    ///
    /// Applies the configured default fill to both bars and settles into the
    /// non-overlay mode for this host: edge-to-edge when supported, normal
    /// otherwise. Commands arriving earlier fail with
    /// [`ChromeError::NotAttached`].
    pub fn attach(&mut self) {
        self.attached = true;
        info!(
            edge_to_edge = self.capability.edge_to_edge_supported,
            "host view attached"
        );
        self.transition_for_overlay(false);
    }

    /// Whether the first reconciliation has happened.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// The active display mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The host capability queried at construction.
    #[must_use]
    pub const fn capability(&self) -> PlatformCapability {
        self.capability
    }

    /// Requested colors and applied styles.
    #[must_use]
    pub const fn appearance(&self) -> BarAppearance {
        self.appearance
    }

    /// Whether the most recent toggle was `show` (initially true).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.bars_visible
    }

    /// The content padding currently applied to the embedded view.
    #[must_use]
    pub const fn current_insets(&self) -> InsetRect {
        self.applied_insets
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Borrow the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Answer the ready query: are the bars currently visible?
    pub fn ready(&self) -> Result<bool, ChromeError> {
        self.ensure_attached()?;
        Ok(self.bars_visible)
    }

    /// One-shot read of the applied safe-area insets.
    pub fn safe_area_insets(&self) -> Result<InsetRect, ChromeError> {
        self.ensure_attached()?;
        Ok(self.applied_insets)
    }

    /// Enter or leave the fullscreen-overlay mode.
    ///
    /// Disabling the overlay lands in edge-to-edge on capable hosts and in
    /// normal mode on legacy hosts, so an enable/disable pair restores the
    /// mode that was active before.
    pub fn set_overlay(&mut self, enabled: bool) -> Result<(), ChromeError> {
        self.ensure_attached()?;
        self.transition_for_overlay(enabled);
        Ok(())
    }

    /// Set the status-bar fill from a hex color string.
    ///
    /// The raw fill may be hidden by the mode's transparency rule, but the
    /// derived content style is always re-applied: icon contrast matters even
    /// when the fill itself does not show.
    pub fn set_status_bar_color(&mut self, input: &str) -> Result<(), ChromeError> {
        self.ensure_attached()?;
        let color = parse_hex(input)?;
        self.appearance.status_color = color;
        self.appearance.status_style = BarStyle::for_background(color);
        debug!(argb = color.to_argb(), style = %self.appearance.status_style, "status bar color set");
        self.surface
            .set_bar_color(BarKind::Status, self.effective_color(color));
        self.apply_root_background();
        self.surface
            .set_bar_style(BarKind::Status, self.appearance.status_style);
        Ok(())
    }

    /// Set the navigation-bar fill from a hex color string.
    pub fn set_nav_bar_color(&mut self, input: &str) -> Result<(), ChromeError> {
        self.ensure_attached()?;
        let color = parse_hex(input)?;
        self.appearance.nav_color = color;
        self.appearance.nav_style = BarStyle::for_background(color);
        debug!(argb = color.to_argb(), style = %self.appearance.nav_style, "navigation bar color set");
        self.surface
            .set_bar_color(BarKind::Navigation, self.effective_color(color));
        self.surface
            .set_bar_style(BarKind::Navigation, self.appearance.nav_style);
        Ok(())
    }

    /// Directly override the content style of one bar.
    ///
    /// Bypasses luminance derivation; the next color change derives again.
    pub fn set_style(&mut self, bar: BarKind, style: BarStyle) -> Result<(), ChromeError> {
        self.ensure_attached()?;
        match bar {
            BarKind::Status => self.appearance.status_style = style,
            BarKind::Navigation => self.appearance.nav_style = style,
        }
        debug!(bar = %bar, style = %style, "bar style overridden");
        self.surface.set_bar_style(bar, style);
        Ok(())
    }

    /// Show the system bars.
    ///
    /// With `keep_insets` false, edge-to-edge padding is restored when the
    /// mode calls for it and forced to zero otherwise. With `keep_insets`
    /// true, the applied padding and the re-padding gate stay untouched.
    /// Idempotent: showing already-shown bars re-issues the same effects.
    pub fn show(&mut self, keep_insets: bool) -> Result<(), ChromeError> {
        self.ensure_attached()?;
        self.bars_visible = true;
        debug!(keep_insets, "showing system bars");
        self.surface.set_bars_visible(true);
        if !keep_insets {
            if self.mode == DisplayMode::EdgeToEdge {
                self.insets_enabled = true;
                let insets = self.query_insets();
                self.apply_padding(insets);
            } else {
                self.insets_enabled = false;
                self.apply_padding(InsetRect::ZERO);
            }
        }
        Ok(())
    }

    /// Hide the system bars.
    ///
    /// With `keep_insets` false the padding is forced to zero and reactive
    /// re-padding is disabled until the bars are shown again.
    pub fn hide(&mut self, keep_insets: bool) -> Result<(), ChromeError> {
        self.ensure_attached()?;
        self.bars_visible = false;
        debug!(keep_insets, "hiding system bars");
        self.surface.set_bars_visible(false);
        if !keep_insets {
            self.insets_enabled = false;
            self.apply_padding(InsetRect::ZERO);
        }
        Ok(())
    }

    /// React to a layout pass reported by the surface.
    ///
    /// Recomputes and re-applies padding when the re-padding gate is open,
    /// then returns the current applied rect for subscriber delivery. An
    /// unchanged rect is a legitimate emission, not an error.
    pub fn handle_layout_changed(&mut self) -> InsetRect {
        if self.attached && self.insets_enabled {
            let insets = self.query_insets();
            trace!(?insets, "layout pass re-applied insets");
            self.apply_padding(insets);
        }
        self.applied_insets
    }

    const fn ensure_attached(&self) -> Result<(), ChromeError> {
        if self.attached {
            Ok(())
        } else {
            Err(ChromeError::NotAttached)
        }
    }

    /// Drive the mode transition for an overlay enable/disable, issuing
    /// effects in the fixed order: visibility flags, bar colors, padding.
    fn transition_for_overlay(&mut self, enabled: bool) {
        let mode = if enabled {
            DisplayMode::FullscreenOverlay
        } else if self.capability.edge_to_edge_supported {
            DisplayMode::EdgeToEdge
        } else {
            DisplayMode::Normal
        };
        debug!(from = %self.mode, to = %mode, "display mode transition");
        self.mode = mode;

        self.surface.set_bars_visible(self.bars_visible);

        self.surface.set_bar_color(
            BarKind::Status,
            self.effective_color(self.appearance.status_color),
        );
        self.surface.set_bar_color(
            BarKind::Navigation,
            self.effective_color(self.appearance.nav_color),
        );
        self.apply_root_background();
        self.surface
            .set_bar_style(BarKind::Status, self.appearance.status_style);
        self.surface
            .set_bar_style(BarKind::Navigation, self.appearance.nav_style);

        if mode == DisplayMode::EdgeToEdge {
            self.insets_enabled = true;
            let insets = self.query_insets();
            self.apply_padding(insets);
        } else {
            self.insets_enabled = false;
            self.apply_padding(InsetRect::ZERO);
        }
    }

    /// The fill that actually reaches the surface under the mode's
    /// transparency rule.
    const fn effective_color(&self, requested: Rgba) -> Rgba {
        match self.mode {
            DisplayMode::Normal => requested,
            DisplayMode::EdgeToEdge | DisplayMode::FullscreenOverlay => Rgba::TRANSPARENT,
        }
    }

    /// On capable hosts the root view shows the requested status fill behind
    /// the transparent bar; the overlay mode clears it entirely.
    fn apply_root_background(&mut self) {
        if !self.capability.edge_to_edge_supported {
            return;
        }
        let fill = if self.mode == DisplayMode::FullscreenOverlay {
            Rgba::TRANSPARENT
        } else {
            self.appearance.status_color
        };
        self.surface.set_root_background(fill);
    }

    fn query_insets(&self) -> InsetRect {
        let (bars, keyboard) = self.surface.current_system_insets();
        compute_insets(bars, keyboard)
    }

    fn apply_padding(&mut self, insets: InsetRect) {
        self.surface.set_content_padding(insets);
        self.applied_insets = insets;
    }
}
