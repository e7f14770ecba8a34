//! Widget state and the update reducer.
//!
//! [`ChartState`] is an explicit, immutable-per-update record: every
//! interaction produces a new state value rather than mutating in place.
//! All work runs to completion inside [`ChartState::update`] before the
//! next message is processed; there is no background work to cancel.

use crate::messages::ChartMsg;
use crate::series::{build_series, ChartSeries};
use fstop_core::Image;
use fstop_optics::{compute_samples, resolve_aperture, CropFactor, SampleSet};
use fstop_ops::{apply_exposure, estimate_ev, EV_MAX, EV_MIN};
use tracing::debug;

/// Reference aperture the chart opens with.
pub const DEFAULT_REFERENCE: f64 = 2.8;

/// Complete widget state.
///
/// Holding the *source* bitmap (never an adjusted copy) is what keeps the
/// exposure preview deterministic: [`preview`](Self::preview) always
/// re-derives from the original decode, so successive slider moves never
/// compound rounding error. The clone stored here is cheap; [`Image`] is
/// copy-on-write.
#[derive(Debug, Clone)]
pub struct ChartState {
    /// Reference aperture the brightness curve is normalized against.
    pub reference: f64,
    /// Whether crop-effect mode is on.
    pub crop_enabled: bool,
    /// Selected sensor format (meaningful only while crop mode is on,
    /// but kept across toggles).
    pub crop_factor: CropFactor,
    /// Originally decoded source bitmap, if one has been loaded.
    pub source: Option<Image>,
    /// Current exposure adjustment (EV stops).
    pub ev: f32,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE,
            crop_enabled: false,
            crop_factor: CropFactor::default(),
            source: None,
            ev: 0.0,
        }
    }
}

impl ChartState {
    /// Applies one interaction, producing the next state.
    ///
    /// Pure apart from a `debug!` trace per transition: same state and
    /// message always yield the same result.
    #[must_use]
    pub fn update(&self, msg: ChartMsg) -> Self {
        let mut next = self.clone();
        match msg {
            ChartMsg::SetSliderPosition(position) => {
                next.reference = resolve_aperture(position);
                debug!(position, reference = next.reference, "slider moved");
            }
            ChartMsg::SetReference(aperture) => {
                debug_assert!(aperture > 0.0, "aperture must be positive");
                next.reference = aperture;
            }
            ChartMsg::SetCropEnabled(enabled) => {
                next.crop_enabled = enabled;
            }
            ChartMsg::SetCropFactor(factor) => {
                next.crop_factor = factor;
            }
            ChartMsg::ImageLoaded(image) => {
                // A zero-area decode has no usable average; start neutral.
                next.ev = estimate_ev(&image).unwrap_or(0.0);
                debug!(
                    width = image.width(),
                    height = image.height(),
                    ev = next.ev,
                    "image loaded"
                );
                next.source = Some(image);
            }
            ChartMsg::SetExposure(ev) => {
                next.ev = ev.clamp(EV_MIN, EV_MAX);
            }
            ChartMsg::ClearImage => {
                next.source = None;
                next.ev = 0.0;
            }
        }
        next
    }

    /// Crop factor to apply, or `None` while crop mode is off.
    #[inline]
    pub fn crop(&self) -> Option<CropFactor> {
        self.crop_enabled.then_some(self.crop_factor)
    }

    /// Brightness samples for the current reference and crop settings.
    pub fn samples(&self) -> SampleSet {
        compute_samples(self.reference, self.crop())
    }

    /// The plotted series: descending stops, labels, y-axis bounds.
    pub fn series(&self) -> ChartSeries {
        build_series(&self.samples())
    }

    /// Exposure-adjusted preview of the loaded image.
    ///
    /// `None` until an image is loaded. Always derived fresh from the
    /// original source at the current EV.
    pub fn preview(&self) -> Option<Image> {
        self.source
            .as_ref()
            .map(|source| apply_exposure(source, self.ev))
    }
}
