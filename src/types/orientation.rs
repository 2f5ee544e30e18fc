//! Viewport Orientation Classification.
//!
//! This module provides the [`Orientation`] enum, a deterministic
//! classification of a width/height pair. It is part of the derived
//! viewport state published to reactive consumers.
//!
//! # Examples
//!
//! ```
//! use novade_surface::types::Orientation;
//!
//! let orientation = Orientation::from_dimensions(1920, 1080);
//! assert!(orientation.is_landscape());
//! assert_eq!(format!("{}", orientation), "landscape");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The orientation of a viewport, derived from its geometry.
///
/// Classification is purely a comparison of the two dimensions: wider
/// than tall is `Landscape`, taller than wide is `Portrait`, and exact
/// equality (including the 0×0 geometry of an unmeasured surface) is
/// `Square`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Width exceeds height.
    Landscape,
    /// Height exceeds width.
    Portrait,
    /// Width and height are equal.
    #[default]
    Square,
}

impl Orientation {
    /// Classifies a width/height pair.
    ///
    /// # Examples
    /// ```
    /// use novade_surface::types::Orientation;
    /// assert_eq!(Orientation::from_dimensions(800, 600), Orientation::Landscape);
    /// assert_eq!(Orientation::from_dimensions(375, 667), Orientation::Portrait);
    /// assert_eq!(Orientation::from_dimensions(512, 512), Orientation::Square);
    /// ```
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else if height > width {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }

    /// Checks if this orientation is `Landscape`.
    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    /// Checks if this orientation is `Portrait`.
    pub fn is_portrait(&self) -> bool {
        matches!(self, Orientation::Portrait)
    }

    /// Checks if this orientation is `Square`.
    pub fn is_square(&self) -> bool {
        matches!(self, Orientation::Square)
    }
}

impl fmt::Display for Orientation {
    /// Formats the `Orientation` as a lowercase string (e.g., "landscape").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Square => write!(f, "square"),
        }
    }
}
