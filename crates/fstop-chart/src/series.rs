//! Chart-series assembly.
//!
//! Turns a [`SampleSet`] into the exact shape the chart draws: canonical
//! apertures in descending numeric order (widest stop rightmost), `f/<value>`
//! tick labels, display-rounded brightness values, and the y-axis bounds.

use fstop_optics::{round_to, SampleSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One plotted point of the brightness curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartPoint {
    /// Canonical f-number.
    pub aperture: f64,
    /// Tick label, e.g. `"f/2.8"`.
    pub label: String,
    /// Normalized brightness, rounded for display (3 decimal places).
    pub brightness: f64,
    /// Crop-equivalent tick label, e.g. `"f/4.2"`, when crop mode is on.
    pub effective_label: Option<String>,
    /// Crop-adjusted brightness, rounded for display, when crop mode is on.
    pub effective_brightness: Option<f64>,
}

/// The full line series plus axis bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartSeries {
    /// Points in descending aperture order (f/22 first, f/0.95 last).
    pub points: Vec<ChartPoint>,
    /// Vertical axis bounds `(min, max)`.
    pub y_range: (f64, f64),
}

/// Formats an aperture as a tick label.
///
/// The value is rounded to 2 decimal places and printed without trailing
/// zeros.
///
/// # Example
///
/// ```rust
/// use fstop_chart::stop_label;
///
/// assert_eq!(stop_label(22.0), "f/22");
/// assert_eq!(stop_label(2.8), "f/2.8");
/// assert_eq!(stop_label(0.95), "f/0.95");
/// ```
pub fn stop_label(aperture: f64) -> String {
    format!("f/{}", round_to(aperture, 2))
}

/// Builds the plotted series from a sample set.
///
/// Samples arrive in ascending canonical order; the chart's x-axis runs
/// descending, so the order is reversed here.
pub fn build_series(set: &SampleSet) -> ChartSeries {
    let points = set
        .samples
        .iter()
        .rev()
        .map(|s| ChartPoint {
            aperture: s.aperture,
            label: stop_label(s.aperture),
            brightness: s.display_normalized(),
            effective_label: s.effective_aperture.map(stop_label),
            effective_brightness: s.display_effective(),
        })
        .collect();

    ChartSeries {
        points,
        y_range: set.y_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fstop_optics::{compute_samples, CropFactor, CANONICAL_STOPS};

    #[test]
    fn test_points_descend() {
        let series = build_series(&compute_samples(2.8, None));
        assert_eq!(series.points.len(), CANONICAL_STOPS.len());
        for pair in series.points.windows(2) {
            assert!(pair[0].aperture > pair[1].aperture);
        }
        assert_eq!(series.points.first().unwrap().label, "f/22");
        assert_eq!(series.points.last().unwrap().label, "f/0.95");
    }

    #[test]
    fn test_labels() {
        assert_eq!(stop_label(1.4), "f/1.4");
        assert_eq!(stop_label(8.0), "f/8");
        assert_eq!(stop_label(3.5), "f/3.5");
        // Crop-equivalent values get tidied up too: 2.8 * 1.5.
        assert_eq!(stop_label(2.8 * 1.5), "f/4.2");
    }

    #[test]
    fn test_brightness_is_display_rounded() {
        let series = build_series(&compute_samples(2.8, None));
        let at_56 = series
            .points
            .iter()
            .find(|p| p.aperture == 5.6)
            .unwrap();
        assert_eq!(at_56.brightness, 0.25);
    }

    #[test]
    fn test_crop_labels_present_only_when_enabled() {
        let plain = build_series(&compute_samples(2.8, None));
        assert!(plain.points.iter().all(|p| p.effective_label.is_none()));

        let cropped = build_series(&compute_samples(2.8, Some(CropFactor::ApsC)));
        let at_ref = cropped.points.iter().find(|p| p.aperture == 2.8).unwrap();
        assert_eq!(at_ref.effective_label.as_deref(), Some("f/4.2"));
        assert_eq!(at_ref.effective_brightness, Some(0.444));
    }

    #[test]
    fn test_y_range_passthrough() {
        let set = compute_samples(4.0, None);
        let series = build_series(&set);
        assert_eq!(series.y_range, set.y_range);
    }
}
