// Capability detection: what platform features a surface kind exposes
// in a given runtime environment.

pub mod detector;
pub mod types;

pub use detector::detect;
pub use types::{EnvironmentProbe, SurfaceCapabilities, SurfaceKind};
