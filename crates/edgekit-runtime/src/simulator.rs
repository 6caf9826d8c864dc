#![forbid(unsafe_code)]

//! Deterministic chrome simulator for testing.
//!
//! [`ChromeSimulator`] drives the program core synchronously on the calling
//! thread — no channels between threads, no host. Its [`RecordingSurface`]
//! logs every effect the core issues, so tests can assert on exact effect
//! ordering as well as final state.
//!
//! # Example
//!
//! ```ignore
//! let mut sim = ChromeSimulator::new();
//! sim.attach();
//! sim.invoke(Command::SetOverlay(true));
//! assert_eq!(sim.controller().current_insets(), InsetRect::ZERO);
//! ```

use std::sync::mpsc;

use edgekit_layout::{InsetRect, KeyboardState};
use edgekit_style::{BarStyle, Rgba};

use crate::chrome::{ChromeConfig, ChromeController};
use crate::command::Command;
use crate::program::{ChromeCore, CommandReply, Input};
use crate::surface::{BarKind, NativeSurface, PlatformCapability};

/// One recorded surface effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// `set_bar_color` was issued.
    BarColor(BarKind, Rgba),
    /// `set_bar_style` was issued.
    BarStyle(BarKind, BarStyle),
    /// `set_bars_visible` was issued.
    BarsVisible(bool),
    /// `set_root_background` was issued.
    RootBackground(Rgba),
    /// `set_content_padding` was issued.
    ContentPadding(InsetRect),
}

/// A surface double that records effects and serves configurable insets.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    capability: PlatformCapability,
    system_bars: InsetRect,
    keyboard: KeyboardState,
    effects: Vec<Effect>,
}

impl RecordingSurface {
    /// An edge-to-edge capable surface with no insets reported yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capability: PlatformCapability {
                edge_to_edge_supported: true,
            },
            system_bars: InsetRect::ZERO,
            keyboard: KeyboardState::HIDDEN,
            effects: Vec::new(),
        }
    }

    /// A legacy surface without edge-to-edge support.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            capability: PlatformCapability {
                edge_to_edge_supported: false,
            },
            ..Self::new()
        }
    }

    /// Builder: the system-bar insets (cutouts merged) this surface reports.
    #[must_use]
    pub fn with_system_bars(mut self, system_bars: InsetRect) -> Self {
        self.system_bars = system_bars;
        self
    }

    /// Builder: the keyboard state this surface reports.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: KeyboardState) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Change the reported system-bar insets mid-test.
    pub fn set_system_bars(&mut self, system_bars: InsetRect) {
        self.system_bars = system_bars;
    }

    /// Change the reported keyboard state mid-test.
    pub fn set_keyboard(&mut self, keyboard: KeyboardState) {
        self.keyboard = keyboard;
    }

    /// The recorded effects, oldest first.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Take the recorded effects, leaving the log empty.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Forget the recorded effects.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSurface for RecordingSurface {
    fn set_bar_color(&mut self, bar: BarKind, color: Rgba) {
        self.effects.push(Effect::BarColor(bar, color));
    }

    fn set_bar_style(&mut self, bar: BarKind, style: BarStyle) {
        self.effects.push(Effect::BarStyle(bar, style));
    }

    fn set_bars_visible(&mut self, visible: bool) {
        self.effects.push(Effect::BarsVisible(visible));
    }

    fn set_root_background(&mut self, color: Rgba) {
        self.effects.push(Effect::RootBackground(color));
    }

    fn set_content_padding(&mut self, insets: InsetRect) {
        self.effects.push(Effect::ContentPadding(insets));
    }

    fn platform_capability(&self) -> PlatformCapability {
        self.capability
    }

    fn current_system_insets(&self) -> (InsetRect, KeyboardState) {
        (self.system_bars, self.keyboard)
    }
}

/// Threadless driver for the chrome core.
pub struct ChromeSimulator {
    core: ChromeCore<RecordingSurface>,
}

impl ChromeSimulator {
    /// Simulate an edge-to-edge capable host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_surface(RecordingSurface::new())
    }

    /// Simulate a legacy host.
    #[must_use]
    pub fn legacy() -> Self {
        Self::with_surface(RecordingSurface::legacy())
    }

    /// Simulate a host backed by a prepared surface.
    #[must_use]
    pub fn with_surface(surface: RecordingSurface) -> Self {
        Self::with_config(surface, ChromeConfig::default())
    }

    /// Simulate with an explicit configuration.
    #[must_use]
    pub fn with_config(surface: RecordingSurface, config: ChromeConfig) -> Self {
        Self {
            core: ChromeCore::new(surface, config),
        }
    }

    /// Signal attach and run the first reconciliation.
    pub fn attach(&mut self) {
        self.core.process(Input::Attached);
    }

    /// Process one command synchronously and return its reply.
    pub fn invoke(&mut self, command: Command) -> CommandReply {
        let (tx, rx) = mpsc::channel();
        self.core.process(Input::Command(command, tx));
        rx.try_recv().expect("command processing always replies")
    }

    /// Deliver a layout-change notification.
    pub fn layout_changed(&mut self) {
        self.core.process(Input::LayoutChanged);
    }

    /// The controller's observable state.
    #[must_use]
    pub fn controller(&self) -> &ChromeController<RecordingSurface> {
        &self.core.controller
    }

    /// Borrow the surface double.
    #[must_use]
    pub fn surface(&self) -> &RecordingSurface {
        self.core.controller.surface()
    }

    /// Mutate the surface double (e.g. to change reported insets).
    pub fn surface_mut(&mut self) -> &mut RecordingSurface {
        self.core.controller.surface_mut()
    }

    /// Take the recorded effects, leaving the log empty.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.surface_mut().take_effects()
    }
}

impl Default for ChromeSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_logs_in_order() {
        let mut surface = RecordingSurface::new();
        surface.set_bars_visible(true);
        surface.set_bar_color(BarKind::Status, Rgba::WHITE);
        surface.set_content_padding(InsetRect::all(4));

        assert_eq!(
            surface.effects(),
            [
                Effect::BarsVisible(true),
                Effect::BarColor(BarKind::Status, Rgba::WHITE),
                Effect::ContentPadding(InsetRect::all(4)),
            ]
        );

        assert_eq!(surface.take_effects().len(), 3);
        assert!(surface.effects().is_empty());
    }

    #[test]
    fn simulator_reaches_edge_to_edge_after_attach() {
        let mut sim = ChromeSimulator::new();
        sim.attach();
        assert!(sim.controller().is_attached());
        assert!(matches!(
            sim.invoke(Command::Ready),
            CommandReply::Visible(true)
        ));
    }
}
