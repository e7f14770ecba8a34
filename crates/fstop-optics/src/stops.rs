//! Canonical f-stop table and the slider snap rule.
//!
//! The chart samples brightness at a fixed ladder of 13 stops from f/0.95
//! (fastest lens the widget cares about) to f/22. The same ladder doubles
//! as the set of snap targets for the reference-aperture slider.
//!
//! # Slider scale
//!
//! The slider runs on a logarithmic scale: position `p` maps to aperture
//! `2^(p/100)`. One hundred slider units therefore span one doubling of the
//! f-number (two stops of light).

use crate::math::round_to;

/// Canonical aperture ladder, ascending. Sample points and snap targets.
pub const CANONICAL_STOPS: [f64; 13] = [
    0.95, 1.2, 1.4, 1.8, 2.0, 2.8, 3.5, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0,
];

/// Relative snap window around a canonical stop (2%).
pub const SNAP_TOLERANCE: f64 = 0.02;

/// Maps a slider position to an aperture.
///
/// Computes the exact aperture `2^(position/100)`, then snaps to the
/// nearest canonical stop when within [`SNAP_TOLERANCE`] relative
/// difference. Outside the window the exact value is returned, rounded to
/// 2 decimal places.
///
/// Total function: always returns a positive aperture, never an error.
///
/// # Example
///
/// ```rust
/// use fstop_optics::resolve_aperture;
///
/// // 2^(100/100) = 2.0 exactly: canonical, snaps to itself.
/// assert_eq!(resolve_aperture(100.0), 2.0);
///
/// // 2^(132/100) ≈ 2.50: more than 2% from both f/2.8 and f/2.0.
/// assert_eq!(resolve_aperture(132.19), 2.5);
/// ```
pub fn resolve_aperture(position: f64) -> f64 {
    let exact = (position / 100.0).exp2();
    let nearest = nearest_stop(exact);
    if (exact - nearest).abs() / nearest < SNAP_TOLERANCE {
        nearest
    } else {
        round_to(exact, 2)
    }
}

/// Returns the canonical stop closest to `aperture`.
///
/// Scans the ladder in ascending order; on an exact distance tie the
/// earlier (smaller) stop wins.
pub fn nearest_stop(aperture: f64) -> f64 {
    let mut best = CANONICAL_STOPS[0];
    let mut best_dist = (aperture - best).abs();
    for &stop in &CANONICAL_STOPS[1..] {
        let dist = (aperture - stop).abs();
        // strict comparison keeps the first stop on exact ties
        if dist < best_dist {
            best = stop;
            best_dist = dist;
        }
    }
    best
}

/// Inverse of the slider mapping: the position whose exact aperture is `aperture`.
///
/// # Example
///
/// ```rust
/// use fstop_optics::{resolve_aperture, slider_position};
///
/// let pos = slider_position(5.6);
/// assert_eq!(resolve_aperture(pos), 5.6);
/// ```
#[inline]
pub fn slider_position(aperture: f64) -> f64 {
    100.0 * aperture.log2()
}
