//! Resize observation pipeline.
//!
//! [`ViewportObserver`] bridges the host's size-observation primitive to
//! the surface's geometry handling. Hosts deliver notifications in
//! batches; every entry of a batch is forwarded independently and in
//! arrival order, so consumers see each intermediate size even though
//! the last entry determines the recorded geometry.

use crate::surface::host::{HostElement, ResizeEntry, ResizeListener, ResizeSubscription};
use crate::types::SizeInt;
use tracing::debug;

/// Callback receiving rounded integer geometry, one call per batch entry.
pub type GeometryListener = Box<dyn FnMut(u32, u32)>;

/// Subscribes to host size notifications and forwards rounded geometry.
///
/// Observation degrades silently: a host without an observation
/// primitive simply never produces geometry updates. Detaching is
/// idempotent.
#[derive(Default)]
pub struct ViewportObserver {
    subscription: Option<Box<dyn ResizeSubscription>>,
}

impl ViewportObserver {
    /// Creates an observer with no active subscription.
    pub fn new() -> Self {
        ViewportObserver { subscription: None }
    }

    /// Whether a subscription is currently active.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Begins observation on `host`, forwarding every batch entry to
    /// `on_geometry` in arrival order with dimensions rounded to the
    /// nearest integer.
    ///
    /// A no-op if observation is already active, or if the host provides
    /// no size-observation primitive.
    pub fn attach(&mut self, host: &dyn HostElement, mut on_geometry: GeometryListener) {
        if self.subscription.is_some() {
            return;
        }
        let listener: ResizeListener = Box::new(move |entries: &[ResizeEntry]| {
            for entry in entries {
                let size = SizeInt::from_fractional(entry.width, entry.height);
                on_geometry(size.width, size.height);
            }
        });
        match host.observe_resize(listener) {
            Some(subscription) => {
                self.subscription = Some(subscription);
            }
            None => {
                debug!("Host element provides no size observation; surface geometry will not track resizes.");
            }
        }
    }

    /// Ends observation. Unsubscribes exactly once; further calls are
    /// no-ops.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
