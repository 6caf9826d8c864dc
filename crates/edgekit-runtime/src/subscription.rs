#![forbid(unsafe_code)]

//! Push channel for safe-area inset updates.
//!
//! A subscriber receives the current applied [`InsetRect`] immediately, then
//! one value per layout pass the surface reports. The stream is unbounded and
//! never completes on its own; dropping the [`InsetStream`] is the
//! cancellation primitive. Because delivery happens from the program loop, a
//! drop may race one already-in-flight value — the broadcaster prunes the
//! dead sender on its next failed delivery.

use std::sync::mpsc;

use edgekit_layout::InsetRect;
use tracing::{debug, trace};

/// A unique identifier for an inset subscription.
pub type SubId = u64;

/// Receiving half of an inset subscription.
///
/// Dropping the stream unsubscribes; there is no other teardown to perform.
#[derive(Debug)]
pub struct InsetStream {
    id: SubId,
    rx: mpsc::Receiver<InsetRect>,
}

impl InsetStream {
    /// The subscription's identifier.
    #[must_use]
    pub const fn id(&self) -> SubId {
        self.id
    }

    /// Block until the next inset value arrives.
    ///
    /// Returns `None` once the producing program has gone away.
    pub fn recv(&self) -> Option<InsetRect> {
        self.rx.recv().ok()
    }

    /// Take the next inset value if one is already queued.
    pub fn try_recv(&self) -> Option<InsetRect> {
        self.rx.try_recv().ok()
    }

    /// Drain every value queued so far.
    pub fn drain(&self) -> Vec<InsetRect> {
        let mut values = Vec::new();
        while let Ok(value) = self.rx.try_recv() {
            values.push(value);
        }
        values
    }
}

/// Producer side: the program loop's registry of live subscribers.
pub(crate) struct InsetBroadcaster {
    next_id: SubId,
    senders: Vec<(SubId, mpsc::Sender<InsetRect>)>,
}

impl InsetBroadcaster {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            senders: Vec::new(),
        }
    }

    /// Register a new subscriber and deliver the current rect immediately,
    /// before any layout event has a chance to fire.
    pub(crate) fn subscribe(&mut self, current: InsetRect) -> InsetStream {
        let id = self.next_id;
        self.next_id += 1;
        let (tx, rx) = mpsc::channel();
        // The receiver is in hand, so the initial send cannot fail.
        let _ = tx.send(current);
        self.senders.push((id, tx));
        debug!(sub_id = id, active = self.senders.len(), "inset subscription opened");
        InsetStream { id, rx }
    }

    /// Deliver a value to every live subscriber, pruning dropped ones.
    pub(crate) fn publish(&mut self, insets: InsetRect) {
        let before = self.senders.len();
        self.senders.retain(|(id, tx)| {
            let alive = tx.send(insets).is_ok();
            if !alive {
                debug!(sub_id = id, "inset subscription dropped");
            }
            alive
        });
        trace!(
            ?insets,
            delivered = self.senders.len(),
            pruned = before - self.senders.len(),
            "insets published"
        );
    }

    /// Number of live subscribers (dead ones linger until the next publish).
    pub(crate) fn active_count(&self) -> usize {
        self.senders.len()
    }
}
