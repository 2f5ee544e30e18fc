//! Capability detection policy.
//!
//! Maps a surface kind plus an environment probe to the immutable
//! capability set of the surface. Detection is a pure function: identical
//! inputs always produce identical sets, and no variant of the input can
//! make it fail.

use super::types::{EnvironmentProbe, SurfaceCapabilities, SurfaceKind};

/// Computes the capability set for a surface of the given kind in the
/// probed environment.
///
/// Every recognized kind carries the presentation baseline (structural +
/// styling). The interactive kind extends it with interaction,
/// observation, and animation; only when the probe confirms a live
/// runtime context does it also gain the input capabilities the probe
/// reports. Unrecognized kinds yield an empty set rather than an error.
pub fn detect(kind: SurfaceKind, probe: &EnvironmentProbe) -> SurfaceCapabilities {
    match kind {
        SurfaceKind::Static | SurfaceKind::ServerRendered => SurfaceCapabilities::PRESENTATION,
        SurfaceKind::Interactive => {
            let mut capabilities = SurfaceCapabilities::PRESENTATION
                | SurfaceCapabilities::INTERACTION
                | SurfaceCapabilities::OBSERVATION
                | SurfaceCapabilities::ANIMATION;
            if probe.live_runtime {
                if probe.touch_input {
                    capabilities |= SurfaceCapabilities::TOUCH_INPUT;
                }
                if probe.precise_pointer {
                    capabilities |= SurfaceCapabilities::PRECISE_POINTER;
                }
            }
            capabilities
        }
        SurfaceKind::Unknown => SurfaceCapabilities::empty(),
    }
}
