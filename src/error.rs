//! Error handling for the surface lifecycle crate.
//!
//! This module defines the error types for `novade-surface` using the
//! `thiserror` crate. The lifecycle state machine itself never fails:
//! out-of-order transitions are silently guarded no-ops, and missing host
//! capabilities degrade rather than error. Failures therefore only exist
//! at the configuration boundary (invalid breakpoint threshold profiles,
//! invalid mount identifiers) and surface as [`SurfaceError`].

use thiserror::Error;

/// Top-level error type for the surface lifecycle crate.
///
/// Wraps the more specific configuration errors so callers can handle
/// everything behind a single type at the crate boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Errors in viewport-related configuration, such as an invalid
    /// breakpoint threshold profile. Wraps a [`ViewportConfigError`].
    #[error("Viewport configuration error: {0}")]
    Viewport(#[from] ViewportConfigError),

    /// A caller-supplied mount identifier was unusable.
    /// Contains a description of what made it invalid.
    #[error("Invalid mount point identifier: {reason}")]
    InvalidMountPoint { reason: String },
}

/// Error type for viewport configuration.
///
/// Produced when constructing a
/// [`BreakpointProfile`](crate::viewport::BreakpointProfile) from custom
/// thresholds that do not form a valid ascending band layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewportConfigError {
    /// The four band minimums were not strictly ascending, so at least
    /// one breakpoint band would be empty or unreachable.
    #[error("Breakpoint thresholds must be strictly ascending, got {thresholds:?}")]
    ThresholdsNotAscending { thresholds: [u32; 4] },

    /// The smallest band minimum was zero, which would leave no width
    /// for the base band below it.
    #[error("The smallest breakpoint threshold must be greater than zero")]
    ZeroThreshold,
}
