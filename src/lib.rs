//! # NovaDE Surface Library (`novade-surface`)
//!
//! `novade-surface` manages the lifecycle of a mountable "surface": a
//! region of a host UI tree that a higher-level application attaches
//! content to. It tracks creation, attachment, resize, and teardown, and
//! exposes a live capability profile and geometry to external consumers.
//!
//! ## Purpose
//!
//! The crate covers three concerns:
//!
//! - **Capability detection**: a pure policy mapping a surface kind plus
//!   an environment probe to an immutable capability set
//!   ([`capabilities::detect`]).
//! - **Lifecycle**: the `Idle → Created → Attached → Destroyed` state
//!   machine driving a surface from creation through destruction
//!   ([`SurfaceLifecycle`]), with the created→attached transition
//!   deferred to the next paint-frame boundary.
//! - **Geometry propagation**: a resize-observation pipeline that keeps
//!   surface geometry and a published viewport state signal in sync
//!   ([`ViewportObserver`], [`SignalPublisher`]).
//!
//! The host framework's render/commit cycle, element mounting, and the
//! reactive signal's subscription mechanics stay outside: the crate
//! receives an already-mounted [`HostElement`], a [`FrameScheduler`],
//! and an optional write-only [`ViewportSignal`], all as injected trait
//! objects. The crate renders nothing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use novade_surface::{SurfaceKind, SurfaceLifecycle, SurfaceOptions, EnvironmentProbe};
//! use std::rc::Rc;
//!
//! let surface = SurfaceLifecycle::new(
//!     SurfaceKind::Interactive,
//!     host,      // Rc<dyn HostElement>, already mounted by the embedder
//!     scheduler, // Rc<dyn FrameScheduler>
//!     SurfaceOptions {
//!         probe: EnvironmentProbe::live(),
//!         ..Default::default()
//!     },
//! );
//! surface.create();
//! // ... the next paint frame attaches it; resizes flow from the host ...
//! surface.destroy();
//! ```
//!
//! Lifecycle transitions never fail: out-of-order calls under racing
//! teardown are silently guarded no-ops, and missing host capabilities
//! (no size observation, no initial geometry) degrade instead of
//! erroring. Errors exist only at the configuration boundary; see
//! [`error`].

pub mod capabilities;
pub mod error;
pub mod surface;
pub mod types;
pub mod viewport;

// Re-export key types for convenience
pub use capabilities::{detect, EnvironmentProbe, SurfaceCapabilities, SurfaceKind};
pub use error::{SurfaceError, ViewportConfigError};
pub use surface::{
    FrameScheduler, HostElement, MountIdSource, MountPoint, ResizeEntry, ResizeListener,
    ResizeSubscription, ScheduledFrame, SurfaceHooks, SurfaceLifecycle, SurfaceOptions,
    SurfaceState, SurfaceStatus, UuidMountIdSource, METADATA_KIND, METADATA_STATUS,
};
pub use types::{Orientation, SizeInt};
pub use viewport::{
    Breakpoint, BreakpointProfile, GeometryListener, SignalPublisher, ViewportObserver,
    ViewportSignal, ViewportState,
};
