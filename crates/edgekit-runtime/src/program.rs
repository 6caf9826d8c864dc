#![forbid(unsafe_code)]

//! The chrome program loop — the single UI-affinity context.
//!
//! All mutable chrome state lives inside [`ChromeProgram`]; exactly one
//! thread runs it. Commands may originate anywhere: a [`ChromeHandle`]
//! marshals them onto the loop's queue, and their effects become observable
//! only once the loop processes them. The caller receives completion through
//! a [`CommandTicket`] — a notification, never a synchronous return.
//!
//! Layout-change notifications travel through the same queue, so command
//! processing and subscriber delivery share one serialization point and no
//! observer ever sees torn state.
//!
//! # Example
//!
//! ```ignore
//! let (handle, worker) = ChromeProgram::spawn(surface);
//! handle.notify_attached();
//! let ticket = handle.invoke(Command::SetOverlay(true));
//! match ticket.wait() {
//!     Some(CommandReply::Done) => {}
//!     other => eprintln!("overlay command failed: {other:?}"),
//! }
//! ```

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use edgekit_layout::InsetRect;
use edgekit_style::BarStyle;
use tracing::{debug, info};

use crate::chrome::{ChromeConfig, ChromeController};
use crate::command::Command;
use crate::error::ChromeError;
use crate::subscription::{InsetBroadcaster, InsetStream};
use crate::surface::{BarKind, NativeSurface};

/// Result of one processed command.
#[derive(Debug)]
pub enum CommandReply {
    /// The command succeeded with no payload.
    Done,
    /// The ready query's answer: whether the bars are visible.
    Visible(bool),
    /// The applied safe-area insets, in density-independent units.
    Insets(InsetRect),
    /// A keep-alive inset stream.
    Stream(InsetStream),
    /// The command failed; no state was mutated.
    Failed(ChromeError),
}

impl CommandReply {
    /// Whether this reply reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Completion notification for one marshalled command.
#[derive(Debug)]
pub struct CommandTicket {
    rx: mpsc::Receiver<CommandReply>,
}

impl CommandTicket {
    /// Block until the loop has processed the command.
    ///
    /// Returns `None` if the program went away before processing it.
    pub fn wait(self) -> Option<CommandReply> {
        self.rx.recv().ok()
    }

    /// Take the reply if the loop has already processed the command.
    pub fn try_reply(&self) -> Option<CommandReply> {
        self.rx.try_recv().ok()
    }
}

/// Queue entries consumed by the program loop.
pub(crate) enum Input {
    /// A marshalled command plus its reply channel.
    Command(Command, mpsc::Sender<CommandReply>),
    /// The host view is attached and measured; run the first reconciliation.
    Attached,
    /// The surface reported a layout pass.
    LayoutChanged,
    /// Stop the loop.
    Shutdown,
}

/// Cloneable, thread-safe entry point onto the program loop.
#[derive(Clone)]
pub struct ChromeHandle {
    tx: mpsc::Sender<Input>,
}

impl ChromeHandle {
    /// Marshal a command onto the loop.
    ///
    /// If the program has already shut down, the returned ticket resolves to
    /// `None`; there is no error to handle at the call site.
    pub fn invoke(&self, command: Command) -> CommandTicket {
        let (reply_tx, reply_rx) = mpsc::channel();
        let _ = self.tx.send(Input::Command(command, reply_tx));
        CommandTicket { rx: reply_rx }
    }

    /// Signal that the host view is attached and measured.
    pub fn notify_attached(&self) {
        let _ = self.tx.send(Input::Attached);
    }

    /// Forward a layout-change notification from the host's listener.
    pub fn notify_layout_changed(&self) {
        let _ = self.tx.send(Input::LayoutChanged);
    }

    /// Ask the loop to stop. Queued inputs ahead of this one still run.
    pub fn shutdown(&self) {
        let _ = self.tx.send(Input::Shutdown);
    }
}

/// Controller plus subscriber registry: everything one loop iteration needs.
pub(crate) struct ChromeCore<S: NativeSurface> {
    pub(crate) controller: ChromeController<S>,
    pub(crate) broadcaster: InsetBroadcaster,
}

impl<S: NativeSurface> ChromeCore<S> {
    pub(crate) fn new(surface: S, config: ChromeConfig) -> Self {
        Self {
            controller: ChromeController::with_config(surface, config),
            broadcaster: InsetBroadcaster::new(),
        }
    }

    /// Process one queue entry. `Shutdown` is the caller's business.
    pub(crate) fn process(&mut self, input: Input) {
        match input {
            Input::Command(command, reply) => {
                debug!(command = command.name(), "processing command");
                let outcome = self.execute(command);
                if let CommandReply::Failed(err) = &outcome {
                    debug!(error = %err, "command failed");
                }
                // A caller that dropped its ticket simply misses the reply.
                let _ = reply.send(outcome);
            }
            Input::Attached => self.controller.attach(),
            Input::LayoutChanged => {
                let insets = self.controller.handle_layout_changed();
                self.broadcaster.publish(insets);
            }
            Input::Shutdown => {}
        }
    }

    fn execute(&mut self, command: Command) -> CommandReply {
        match command {
            Command::Ready => match self.controller.ready() {
                Ok(visible) => CommandReply::Visible(visible),
                Err(err) => CommandReply::Failed(err),
            },
            Command::Show { keep_insets } => reply(self.controller.show(keep_insets)),
            Command::Hide { keep_insets } => reply(self.controller.hide(keep_insets)),
            Command::SetStatusBarColor(hex) => {
                reply(self.controller.set_status_bar_color(&hex))
            }
            Command::SetNavBarColor(hex) => reply(self.controller.set_nav_bar_color(&hex)),
            Command::SetOverlay(enabled) => reply(self.controller.set_overlay(enabled)),
            Command::SetStyleDefault => reply(self.set_both_styles(BarStyle::Default)),
            Command::SetStyleLightContent => {
                reply(self.set_both_styles(BarStyle::LightContent))
            }
            Command::GetSafeAreaInsets => match self.controller.safe_area_insets() {
                Ok(insets) => CommandReply::Insets(insets),
                Err(err) => CommandReply::Failed(err),
            },
            Command::SubscribeSafeAreaInsets => match self.controller.safe_area_insets() {
                Ok(current) => CommandReply::Stream(self.broadcaster.subscribe(current)),
                Err(err) => CommandReply::Failed(err),
            },
        }
    }

    fn set_both_styles(&mut self, style: BarStyle) -> Result<(), ChromeError> {
        self.controller.set_style(BarKind::Status, style)?;
        self.controller.set_style(BarKind::Navigation, style)
    }
}

fn reply(result: Result<(), ChromeError>) -> CommandReply {
    match result {
        Ok(()) => CommandReply::Done,
        Err(err) => CommandReply::Failed(err),
    }
}

/// The runnable chrome program.
pub struct ChromeProgram<S: NativeSurface> {
    core: ChromeCore<S>,
    rx: mpsc::Receiver<Input>,
    tx: mpsc::Sender<Input>,
}

impl<S: NativeSurface> ChromeProgram<S> {
    /// Create a program over a surface with the default configuration.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, ChromeConfig::default())
    }

    /// Create a program with an explicit configuration.
    pub fn with_config(surface: S, config: ChromeConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            core: ChromeCore::new(surface, config),
            rx,
            tx,
        }
    }

    /// Mint a handle for marshalling inputs onto this program.
    #[must_use]
    pub fn handle(&self) -> ChromeHandle {
        ChromeHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run the loop on the calling thread until shutdown or until every
    /// handle has been dropped (view teardown).
    pub fn run(self) {
        let Self { mut core, rx, tx } = self;
        // Dropping the mint lets full handle disconnection end the loop.
        drop(tx);
        info!("chrome program started");
        while let Ok(input) = rx.recv() {
            if matches!(input, Input::Shutdown) {
                break;
            }
            core.process(input);
        }
        info!("chrome program stopped");
    }

    /// Spawn the loop on a dedicated thread and return its handle.
    pub fn spawn(surface: S) -> (ChromeHandle, JoinHandle<()>)
    where
        S: Send + 'static,
    {
        let program = Self::new(surface);
        let handle = program.handle();
        let worker = thread::spawn(move || program.run());
        (handle, worker)
    }
}
