//! Viewport state publication.
//!
//! The embedder may hand the surface an externally owned reactive slot;
//! the publisher derives [`ViewportState`] from geometry and pushes it
//! there. The slot is write-only from this crate's perspective: nothing
//! here subscribes to it or assumes anything about its notification
//! timing beyond "holds the most recent value".

use super::types::{BreakpointProfile, ViewportState};
use std::rc::Rc;
use tracing::trace;

/// An externally owned reactive value holder for viewport state.
///
/// The single `set` capability is all the core requires; subscription
/// mechanics belong to the host framework.
pub trait ViewportSignal {
    /// Replaces the slot's value with the given state.
    fn set(&self, state: ViewportState);
}

/// Derives viewport state from geometry and pushes it into the signal.
///
/// Holds no mutable state; publication with no configured signal is a
/// no-op.
pub struct SignalPublisher {
    signal: Option<Rc<dyn ViewportSignal>>,
    profile: BreakpointProfile,
}

impl SignalPublisher {
    /// Creates a publisher for the given slot (if any) and profile.
    pub fn new(signal: Option<Rc<dyn ViewportSignal>>, profile: BreakpointProfile) -> Self {
        SignalPublisher { signal, profile }
    }

    /// Whether a signal was configured.
    pub fn is_configured(&self) -> bool {
        self.signal.is_some()
    }

    /// Derives and publishes the state for the given geometry.
    pub fn publish(&self, width: u32, height: u32) {
        let Some(signal) = &self.signal else {
            return;
        };
        let state = ViewportState::derive(width, height, &self.profile);
        trace!(
            "Publishing viewport state {}x{} ({} / {}).",
            state.width,
            state.height,
            state.breakpoint,
            state.orientation
        );
        signal.set(state);
    }
}
