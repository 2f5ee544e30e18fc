//! Core data types shared across the surface pipeline.
//!
//! - **Geometry**: [`SizeInt`] for integer surface geometry.
//! - **Orientation**: the [`Orientation`] classification of a viewport.
//!
//! All types here are serializable with Serde.

pub mod geometry;
pub mod orientation;

pub use geometry::SizeInt;
pub use orientation::Orientation;
