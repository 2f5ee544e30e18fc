//! Types for surface capability detection.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a surface, fixed at construction.
///
/// The kind selects the baseline capability set and, together with the
/// [`EnvironmentProbe`], the conditional capabilities of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceKind {
    /// A fully interactive surface backed by a live runtime.
    #[default]
    Interactive,
    /// A surface whose content was produced ahead of time by a server;
    /// structural and styling only, no interaction.
    ServerRendered,
    /// A static surface; structural and styling only.
    Static,
    /// A kind this build does not recognize. Unknown kinds get an empty
    /// capability set and a valid but minimal lifecycle instead of an
    /// error; forward-compatible inputs deserialize into this variant.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SurfaceKind {
    /// Formats the `SurfaceKind` as its kebab-case identifier.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Interactive => write!(f, "interactive"),
            SurfaceKind::ServerRendered => write!(f, "server-rendered"),
            SurfaceKind::Static => write!(f, "static"),
            SurfaceKind::Unknown => write!(f, "unknown"),
        }
    }
}

bitflags! {
    /// The set of platform features a surface exposes.
    ///
    /// The set is computed exactly once when a surface is created and is
    /// immutable afterwards. The flags declared here are the complete
    /// capability universe; [`detect`](crate::capabilities::detect) can
    /// never produce a bit outside them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SurfaceCapabilities: u32 {
        /// The surface can host structural content (element trees).
        const STRUCTURAL = 1 << 0;
        /// The surface participates in style composition.
        const STYLING = 1 << 1;
        /// The surface accepts user interaction.
        const INTERACTION = 1 << 2;
        /// The surface supports observation primitives (size, visibility).
        const OBSERVATION = 1 << 3;
        /// The surface can run animations.
        const ANIMATION = 1 << 4;
        /// The runtime reports a touch-capable input device.
        const TOUCH_INPUT = 1 << 5;
        /// The runtime reports a fine-grained pointing device.
        const PRECISE_POINTER = 1 << 6;
    }
}

impl SurfaceCapabilities {
    /// The baseline shared by every recognized kind: structure and styling.
    pub const PRESENTATION: SurfaceCapabilities =
        SurfaceCapabilities::STRUCTURAL.union(SurfaceCapabilities::STYLING);
}

/// A snapshot of the runtime environment, taken by the embedder and
/// handed to capability detection.
///
/// The probe is plain data: detection stays pure and deterministic, and
/// tests can fabricate any environment without touching global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EnvironmentProbe {
    /// Whether a live runtime context is present. Without one the
    /// conditional input capabilities are never granted.
    #[serde(default)]
    pub live_runtime: bool,
    /// Whether the runtime reports a touch-capable input device.
    #[serde(default)]
    pub touch_input: bool,
    /// Whether the runtime reports a fine-grained pointing device.
    #[serde(default)]
    pub precise_pointer: bool,
}

impl EnvironmentProbe {
    /// Creates a probe from explicit flags.
    pub const fn new(live_runtime: bool, touch_input: bool, precise_pointer: bool) -> Self {
        EnvironmentProbe {
            live_runtime,
            touch_input,
            precise_pointer,
        }
    }

    /// A probe for an environment without a live runtime context, e.g.
    /// ahead-of-time rendering. This is also the `Default`.
    pub const fn headless() -> Self {
        EnvironmentProbe::new(false, false, false)
    }

    /// A probe for a live runtime that reported no input devices.
    pub const fn live() -> Self {
        EnvironmentProbe::new(true, false, false)
    }
}
