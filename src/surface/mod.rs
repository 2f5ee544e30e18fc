// Surface lifecycle: state, host integration seams, and the controller.

pub mod host;
pub mod lifecycle;
pub mod types;

pub use host::{
    FrameScheduler, HostElement, ResizeEntry, ResizeListener, ResizeSubscription, ScheduledFrame,
};
pub use lifecycle::{SurfaceLifecycle, SurfaceOptions, METADATA_KIND, METADATA_STATUS};
pub use types::{
    MountIdSource, MountPoint, SurfaceHooks, SurfaceState, SurfaceStatus, UuidMountIdSource,
};
