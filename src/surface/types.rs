//! Surface state, identifiers, and observer hooks.

use crate::capabilities::{SurfaceCapabilities, SurfaceKind};
use crate::error::SurfaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of a surface.
///
/// Statuses are totally ordered and only ever advance:
/// `Idle < Created < Attached < Destroyed`. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceStatus {
    /// Constructed but not yet created.
    #[default]
    Idle,
    /// Capabilities computed, initial geometry read, attach pending.
    Created,
    /// Live in the host tree; geometry tracks resize notifications.
    Attached,
    /// Torn down. No further transitions or callbacks occur.
    Destroyed,
}

impl SurfaceStatus {
    /// Checks if this status is the terminal `Destroyed` state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SurfaceStatus::Destroyed)
    }
}

impl fmt::Display for SurfaceStatus {
    /// Formats the `SurfaceStatus` as its lowercase name (e.g., "created").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceStatus::Idle => write!(f, "idle"),
            SurfaceStatus::Created => write!(f, "created"),
            SurfaceStatus::Attached => write!(f, "attached"),
            SurfaceStatus::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// Opaque identifier of the spot a surface occupies in the host tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountPoint(String);

impl MountPoint {
    /// Creates a mount point from a caller-supplied identifier.
    ///
    /// The identifier must contain at least one non-whitespace character.
    pub fn new(id: impl Into<String>) -> Result<Self, SurfaceError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SurfaceError::InvalidMountPoint {
                reason: "identifier is blank".to_string(),
            });
        }
        Ok(MountPoint(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh mount identifiers for surfaces created without one.
///
/// Injected rather than global: distinct surfaces may use distinct
/// sources, and tests can supply a deterministic one. Implementations
/// must return a distinct identifier on every call.
pub trait MountIdSource {
    /// Produces the next unique mount identifier.
    fn next_id(&self) -> MountPoint;
}

/// The default [`MountIdSource`], backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidMountIdSource;

impl MountIdSource for UuidMountIdSource {
    fn next_id(&self) -> MountPoint {
        MountPoint(format!("surface-{}", Uuid::new_v4()))
    }
}

/// Snapshot of a surface's externally visible state.
///
/// Owned and mutated exclusively by the lifecycle controller; consumers
/// receive clones. `capabilities` is fixed at creation; `width`/`height`
/// follow the most recent processed resize entry and are `0` before any
/// geometry is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SurfaceState {
    /// The surface kind, fixed at construction.
    pub kind: SurfaceKind,
    /// Current lifecycle status.
    pub status: SurfaceStatus,
    /// Capability set computed at creation.
    pub capabilities: SurfaceCapabilities,
    /// Where the surface sits in the host tree.
    pub mount_point: MountPoint,
    /// Most recent width, in integer units.
    pub width: u32,
    /// Most recent height, in integer units.
    pub height: u32,
}

/// Named observer slots invoked synchronously at lifecycle transition
/// points.
///
/// This is deliberately a fixed set of slots rather than an open event
/// emitter. Callbacks run uncaught: a failure inside one propagates to
/// whatever execution context triggered the transition.
#[derive(Default)]
pub struct SurfaceHooks {
    /// Invoked exactly once when the surface reaches `Created`.
    pub on_created: Option<Box<dyn Fn(&SurfaceState)>>,
    /// Invoked exactly once when the deferred attach lands.
    pub on_attached: Option<Box<dyn Fn(&SurfaceState)>>,
    /// Invoked once per processed resize entry with rounded geometry.
    pub on_resize: Option<Box<dyn Fn(u32, u32)>>,
    /// Invoked exactly once after teardown completes.
    pub on_destroyed: Option<Box<dyn Fn()>>,
}

impl fmt::Debug for SurfaceHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHooks")
            .field("on_created", &self.on_created.is_some())
            .field("on_attached", &self.on_attached.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_destroyed", &self.on_destroyed.is_some())
            .finish()
    }
}
