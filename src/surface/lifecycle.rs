//! The surface lifecycle state machine.
//!
//! [`SurfaceLifecycle`] drives a surface through
//! `Idle → Created → Attached → Destroyed`, owning the [`SurfaceState`]
//! record exclusively. Capabilities are computed once at creation; the
//! created→attached transition is deferred to the next paint-frame
//! boundary and guarded at fire time; teardown follows a fixed order so
//! that no callback or mutation can occur after `Destroyed`.
//!
//! All transitions are infallible: guard conditions turn out-of-order
//! calls into silent no-ops, because racing teardown is an expected part
//! of host integration rather than an error.

use crate::capabilities::{detect, EnvironmentProbe, SurfaceCapabilities, SurfaceKind};
use crate::surface::host::{FrameScheduler, HostElement, ScheduledFrame};
use crate::surface::types::{
    MountIdSource, MountPoint, SurfaceHooks, SurfaceState, SurfaceStatus, UuidMountIdSource,
};
use crate::viewport::{
    BreakpointProfile, GeometryListener, SignalPublisher, ViewportObserver, ViewportSignal,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Host metadata key mirroring the surface kind.
pub const METADATA_KIND: &str = "surface-kind";
/// Host metadata key mirroring the lifecycle status.
pub const METADATA_STATUS: &str = "surface-status";

/// Optional construction inputs for a surface.
///
/// Everything here has a sensible default: no pre-existing mount point
/// (one is generated via `id_source`), a headless environment probe, the
/// default breakpoint profile, no signal, and empty hooks.
pub struct SurfaceOptions {
    /// Pre-existing mount identifier. Generated via `id_source` if absent.
    pub mount_point: Option<MountPoint>,
    /// Environment snapshot fed to capability detection at creation.
    pub probe: EnvironmentProbe,
    /// Breakpoint thresholds for derived viewport state.
    pub breakpoints: BreakpointProfile,
    /// Externally owned reactive slot receiving viewport state, if any.
    pub signal: Option<Rc<dyn ViewportSignal>>,
    /// Observer hooks invoked at transition points.
    pub hooks: SurfaceHooks,
    /// Source of generated mount identifiers.
    pub id_source: Rc<dyn MountIdSource>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        SurfaceOptions {
            mount_point: None,
            probe: EnvironmentProbe::default(),
            breakpoints: BreakpointProfile::default(),
            signal: None,
            hooks: SurfaceHooks::default(),
            id_source: Rc::new(UuidMountIdSource),
        }
    }
}

/// Handle to a surface's lifecycle controller.
///
/// Cloning yields another handle to the same surface. The controller is
/// single-threaded and cooperative: every transition and every host
/// notification runs to completion before the next begins, so the state
/// record needs no locking.
#[derive(Clone)]
pub struct SurfaceLifecycle {
    shared: Rc<SurfaceShared>,
}

struct SurfaceShared {
    host: Rc<dyn HostElement>,
    scheduler: Rc<dyn FrameScheduler>,
    probe: EnvironmentProbe,
    hooks: SurfaceHooks,
    publisher: SignalPublisher,
    state: RefCell<SurfaceState>,
    pending_attach: RefCell<Option<Box<dyn ScheduledFrame>>>,
    observer: RefCell<ViewportObserver>,
}

impl SurfaceLifecycle {
    /// Creates a controller for a surface of the given kind on the given
    /// already-mounted host element. The surface starts `Idle`.
    pub fn new(
        kind: SurfaceKind,
        host: Rc<dyn HostElement>,
        scheduler: Rc<dyn FrameScheduler>,
        options: SurfaceOptions,
    ) -> Self {
        let SurfaceOptions {
            mount_point,
            probe,
            breakpoints,
            signal,
            hooks,
            id_source,
        } = options;
        let mount_point = mount_point.unwrap_or_else(|| id_source.next_id());
        let state = SurfaceState {
            kind,
            status: SurfaceStatus::Idle,
            capabilities: SurfaceCapabilities::empty(),
            mount_point,
            width: 0,
            height: 0,
        };
        SurfaceLifecycle {
            shared: Rc::new(SurfaceShared {
                host,
                scheduler,
                probe,
                hooks,
                publisher: SignalPublisher::new(signal, breakpoints),
                state: RefCell::new(state),
                pending_attach: RefCell::new(None),
                observer: RefCell::new(ViewportObserver::new()),
            }),
        }
    }

    /// Transitions `Idle → Created`.
    ///
    /// Computes the capability set, reads initial geometry from the host
    /// (0×0 when unavailable), mirrors inspection metadata onto the host
    /// element, activates resize observation, invokes `on_created`
    /// exactly once, and schedules the deferred attach. A no-op in any
    /// status other than `Idle`.
    pub fn create(&self) {
        let initial_size = self.shared.host.current_size();
        {
            let mut state = self.shared.state.borrow_mut();
            if state.status != SurfaceStatus::Idle {
                debug!(
                    "Ignoring create() for surface '{}' in status '{}'.",
                    state.mount_point, state.status
                );
                return;
            }
            state.status = SurfaceStatus::Created;
            state.capabilities = detect(state.kind, &self.shared.probe);
            if let Some(size) = initial_size {
                state.width = size.width;
                state.height = size.height;
            }
        }
        self.shared.mirror_kind_and_status();

        let weak = Rc::downgrade(&self.shared);
        let on_geometry: GeometryListener = Box::new(move |width, height| {
            if let Some(shared) = weak.upgrade() {
                shared.geometry_changed(width, height);
            }
        });
        self.shared
            .observer
            .borrow_mut()
            .attach(self.shared.host.as_ref(), on_geometry);

        let snapshot = self.shared.state.borrow().clone();
        debug!(
            "Surface '{}' created as '{}' with capabilities {:?}.",
            snapshot.mount_point, snapshot.kind, snapshot.capabilities
        );
        if let Some(on_created) = &self.shared.hooks.on_created {
            on_created(&snapshot);
        }
        self.schedule_attach();
    }

    /// Schedules the deferred `Created → Attached` transition on the
    /// next paint-frame boundary.
    ///
    /// `create()` calls this itself; the method stays public and guarded
    /// so an out-of-order external call remains harmless. The scheduled
    /// task checks the status again when it fires, so a destroy that
    /// lands before the frame boundary wins regardless of cancellation
    /// timing. A no-op unless the status is `Created` and no attach is
    /// already pending.
    pub fn schedule_attach(&self) {
        if self.shared.state.borrow().status != SurfaceStatus::Created {
            return;
        }
        if self.shared.pending_attach.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.shared);
        let handle = self.shared.scheduler.schedule(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.complete_attach();
            }
        }));
        *self.shared.pending_attach.borrow_mut() = Some(handle);
    }

    /// Transitions any status to `Destroyed`. Idempotent.
    ///
    /// Teardown order is fixed: cancel the pending scheduled attach,
    /// detach the resize observer, mark the surface destroyed, then
    /// invoke `on_destroyed` exactly once. After this returns, no
    /// further mutation or callback can occur.
    pub fn destroy(&self) {
        if self.shared.state.borrow().status.is_terminal() {
            return;
        }
        if let Some(pending) = self.shared.pending_attach.borrow_mut().take() {
            pending.cancel();
        }
        self.shared.observer.borrow_mut().detach();
        {
            let mut state = self.shared.state.borrow_mut();
            state.status = SurfaceStatus::Destroyed;
            debug!("Surface '{}' destroyed.", state.mount_point);
        }
        self.shared.mirror_status();
        if let Some(on_destroyed) = &self.shared.hooks.on_destroyed {
            on_destroyed();
        }
    }

    /// A snapshot of the surface's current state.
    pub fn state(&self) -> SurfaceState {
        self.shared.state.borrow().clone()
    }

    /// The current lifecycle status.
    pub fn status(&self) -> SurfaceStatus {
        self.shared.state.borrow().status
    }
}

impl SurfaceShared {
    /// Fires when the scheduled paint-frame boundary arrives. Completes
    /// the attach only if the surface is still `Created`.
    fn complete_attach(&self) {
        self.pending_attach.borrow_mut().take();
        {
            let mut state = self.state.borrow_mut();
            if state.status != SurfaceStatus::Created {
                debug!(
                    "Skipping deferred attach for surface '{}' in status '{}'.",
                    state.mount_point, state.status
                );
                return;
            }
            state.status = SurfaceStatus::Attached;
            debug!("Surface '{}' attached.", state.mount_point);
        }
        self.mirror_status();
        let snapshot = self.state.borrow().clone();
        if let Some(on_attached) = &self.hooks.on_attached {
            on_attached(&snapshot);
        }
    }

    /// Handles one rounded resize entry: record geometry, then notify.
    fn geometry_changed(&self, width: u32, height: u32) {
        {
            let mut state = self.state.borrow_mut();
            if state.status.is_terminal() {
                return;
            }
            state.width = width;
            state.height = height;
        }
        if let Some(on_resize) = &self.hooks.on_resize {
            on_resize(width, height);
        }
        // The hook may have torn the surface down; teardown guarantees
        // that nothing observable happens afterwards.
        if self.state.borrow().status.is_terminal() {
            return;
        }
        self.publisher.publish(width, height);
    }

    fn mirror_kind_and_status(&self) {
        let (kind, status) = {
            let state = self.state.borrow();
            (state.kind, state.status)
        };
        self.host.set_metadata(METADATA_KIND, &kind.to_string());
        self.host.set_metadata(METADATA_STATUS, &status.to_string());
    }

    fn mirror_status(&self) {
        let status = self.state.borrow().status;
        self.host.set_metadata(METADATA_STATUS, &status.to_string());
    }
}
