//! Viewport classification types.
//!
//! A viewport's width maps onto one of five breakpoint bands via a
//! [`BreakpointProfile`] of ascending minimum widths. The default
//! profile uses the fixed thresholds 480 / 768 / 1024 / 1280; custom
//! profiles validate on construction. [`ViewportState`] bundles the
//! classifications with the raw geometry for publication to reactive
//! consumers.

use crate::error::ViewportConfigError;
use crate::types::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A breakpoint band, derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    /// Extra small: widths below the `sm` threshold.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large: widths at or above the `xl` threshold.
    Xl,
}

impl fmt::Display for Breakpoint {
    /// Formats the `Breakpoint` as its lowercase band name (e.g., "md").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakpoint::Xs => write!(f, "xs"),
            Breakpoint::Sm => write!(f, "sm"),
            Breakpoint::Md => write!(f, "md"),
            Breakpoint::Lg => write!(f, "lg"),
            Breakpoint::Xl => write!(f, "xl"),
        }
    }
}

/// The ascending minimum widths that delimit the breakpoint bands.
///
/// A profile holds the lower bound of each band above `Xs`; a width `w`
/// classifies into the highest band whose minimum is `<= w`. Profiles
/// are validated on construction: minimums must be strictly ascending
/// and the smallest must be non-zero (otherwise the `Xs` band would be
/// empty). A profile obtained through deserialization should be passed
/// through [`BreakpointProfile::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BreakpointProfile {
    /// Minimum width of the `Sm` band.
    #[serde(default = "default_sm_min")]
    pub sm_min: u32,
    /// Minimum width of the `Md` band.
    #[serde(default = "default_md_min")]
    pub md_min: u32,
    /// Minimum width of the `Lg` band.
    #[serde(default = "default_lg_min")]
    pub lg_min: u32,
    /// Minimum width of the `Xl` band.
    #[serde(default = "default_xl_min")]
    pub xl_min: u32,
}

const fn default_sm_min() -> u32 {
    480
}
const fn default_md_min() -> u32 {
    768
}
const fn default_lg_min() -> u32 {
    1024
}
const fn default_xl_min() -> u32 {
    1280
}

impl Default for BreakpointProfile {
    /// The fixed default thresholds: 480 / 768 / 1024 / 1280.
    fn default() -> Self {
        BreakpointProfile {
            sm_min: default_sm_min(),
            md_min: default_md_min(),
            lg_min: default_lg_min(),
            xl_min: default_xl_min(),
        }
    }
}

impl BreakpointProfile {
    /// Creates a validated profile from custom band minimums.
    pub fn new(sm_min: u32, md_min: u32, lg_min: u32, xl_min: u32) -> Result<Self, ViewportConfigError> {
        let profile = BreakpointProfile {
            sm_min,
            md_min,
            lg_min,
            xl_min,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the profile invariants: strictly ascending minimums with a
    /// non-zero lower bound.
    pub fn validate(&self) -> Result<(), ViewportConfigError> {
        if self.sm_min == 0 {
            return Err(ViewportConfigError::ZeroThreshold);
        }
        if !(self.sm_min < self.md_min && self.md_min < self.lg_min && self.lg_min < self.xl_min) {
            return Err(ViewportConfigError::ThresholdsNotAscending {
                thresholds: [self.sm_min, self.md_min, self.lg_min, self.xl_min],
            });
        }
        Ok(())
    }

    /// Classifies a width into its breakpoint band.
    pub fn classify(&self, width: u32) -> Breakpoint {
        if width >= self.xl_min {
            Breakpoint::Xl
        } else if width >= self.lg_min {
            Breakpoint::Lg
        } else if width >= self.md_min {
            Breakpoint::Md
        } else if width >= self.sm_min {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }
}

/// The derived viewport state published to reactive consumers.
///
/// Purely a function of width and height (plus the breakpoint profile);
/// it has no lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ViewportState {
    /// Viewport width in integer units.
    pub width: u32,
    /// Viewport height in integer units.
    pub height: u32,
    /// Breakpoint band the width falls into.
    pub breakpoint: Breakpoint,
    /// Orientation classification of the geometry.
    pub orientation: Orientation,
}

impl ViewportState {
    /// Derives the viewport state for the given geometry.
    pub fn derive(width: u32, height: u32, profile: &BreakpointProfile) -> Self {
        ViewportState {
            width,
            height,
            breakpoint: profile.classify(width),
            orientation: Orientation::from_dimensions(width, height),
        }
    }
}
