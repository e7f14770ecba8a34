//! Relative light transmission per canonical stop.
//!
//! # Formula
//!
//! Light gathered through an aperture goes with the inverse square of the
//! f-number:
//!
//! ```text
//! B(f) = (1/f)^2
//! normalized(f) = B(f) / B(reference) = (reference / f)^2
//! ```
//!
//! so the sample at the reference aperture is exactly 1.0. With a crop
//! factor `c`, the equivalent aperture is `f * c` and the effective
//! brightness is `normalized / c^2`.
//!
//! Model values keep full precision; display accessors round to 3 decimal
//! places.

use crate::crop::CropFactor;
use crate::math::round_to;
use crate::stops::CANONICAL_STOPS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of the normalized spread padded onto each end of the y-axis.
const Y_RANGE_MARGIN: f64 = 0.1;

/// Decimal places for display-rounded brightness values.
const DISPLAY_DECIMALS: u32 = 3;

/// Brightness at one canonical stop, relative to the reference aperture.
///
/// Derived data: regenerated whole whenever the reference, crop toggle, or
/// crop factor changes, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrightnessSample {
    /// Canonical f-number this sample was taken at.
    pub aperture: f64,
    /// Brightness relative to the reference, full precision.
    pub normalized: f64,
    /// Crop-equivalent aperture (`aperture * factor`), when crop mode is on.
    pub effective_aperture: Option<f64>,
    /// Crop-adjusted brightness (`normalized / factor^2`), when crop mode is on.
    pub effective: Option<f64>,
}

impl BrightnessSample {
    /// Normalized brightness rounded for display (3 decimal places).
    #[inline]
    pub fn display_normalized(&self) -> f64 {
        round_to(self.normalized, DISPLAY_DECIMALS)
    }

    /// Crop-adjusted brightness rounded for display, if crop mode is on.
    #[inline]
    pub fn display_effective(&self) -> Option<f64> {
        self.effective.map(|v| round_to(v, DISPLAY_DECIMALS))
    }
}

/// One full sweep of the canonical ladder plus the chart's y-axis bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSet {
    /// Samples in ascending canonical-stop order.
    pub samples: Vec<BrightnessSample>,
    /// Vertical axis bounds `(min, max)` for the chart.
    pub y_range: (f64, f64),
}

/// Computes brightness samples for every canonical stop.
///
/// Pure and deterministic: re-run whenever any input changes.
///
/// The y-range spans the *normalized* (non-crop-adjusted) values with a 10%
/// margin of their spread on each side, floored at zero.
///
/// # Example
///
/// ```rust
/// use fstop_optics::compute_samples;
///
/// let set = compute_samples(2.8, None);
/// let at_ref = set.samples.iter().find(|s| s.aperture == 2.8).unwrap();
/// assert_eq!(at_ref.normalized, 1.0);
/// ```
pub fn compute_samples(reference: f64, crop: Option<CropFactor>) -> SampleSet {
    debug_assert!(reference > 0.0, "reference aperture must be positive");

    let samples: Vec<BrightnessSample> = CANONICAL_STOPS
        .iter()
        .map(|&f| {
            let normalized = (reference / f) * (reference / f);
            let (effective_aperture, effective) = match crop {
                Some(cf) => {
                    let c = cf.factor();
                    (Some(f * c), Some(normalized / (c * c)))
                }
                None => (None, None),
            };
            BrightnessSample {
                aperture: f,
                normalized,
                effective_aperture,
                effective,
            }
        })
        .collect();

    // Ladder is ascending, brightness is decreasing: extremes sit at the ends.
    let max = samples[0].normalized;
    let min = samples[samples.len() - 1].normalized;
    let spread = max - min;
    let y_range = (
        (min - Y_RANGE_MARGIN * spread).max(0.0),
        max + Y_RANGE_MARGIN * spread,
    );

    SampleSet { samples, y_range }
}
