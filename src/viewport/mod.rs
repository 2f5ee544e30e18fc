// Viewport classification, resize observation, and signal publication.

pub mod observer;
pub mod publisher;
pub mod types;

pub use observer::{GeometryListener, ViewportObserver};
pub use publisher::{SignalPublisher, ViewportSignal};
pub use types::{Breakpoint, BreakpointProfile, ViewportState};
