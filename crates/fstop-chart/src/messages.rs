//! Message types for UI -> state communication.
//!
//! One variant per user interaction the widget supports. The UI layer maps
//! its input events (slider drags, switch toggles, file selection) onto
//! these and feeds them to [`crate::ChartState::update`].

use fstop_core::Image;
use fstop_optics::CropFactor;

/// Messages from the UI layer to the chart state.
#[derive(Debug, Clone)]
pub enum ChartMsg {
    /// Reference-aperture slider moved to a raw position (log2 scale,
    /// 100 units per doubling). Routed through the snap rule.
    SetSliderPosition(f64),

    /// Reference aperture set directly (must be positive).
    SetReference(f64),

    /// Crop-effect mode toggled.
    SetCropEnabled(bool),

    /// Crop factor selected.
    SetCropFactor(CropFactor),

    /// A decoded image arrived from the host decoder. Seeds the EV slider
    /// from the image's average brightness.
    ImageLoaded(Image),

    /// Exposure slider moved (EV stops, clamped to the valid range).
    SetExposure(f32),

    /// Loaded image discarded; the preview section goes away.
    ClearImage,
}
