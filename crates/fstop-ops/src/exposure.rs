//! Exposure remapping for the image preview.
//!
//! # Formula
//!
//! Each color channel of every pixel is scaled by `2^EV` and clamped to the
//! 8-bit range; alpha passes through untouched:
//!
//! ```text
//! out = clamp(round(in * 2^ev), 0, 255)
//! ```
//!
//! The remap always derives from the supplied source bitmap. Holding on to
//! the original decode and re-running the remap per adjustment keeps edits
//! from compounding rounding error; the chart state does exactly that.
//!
//! # Gotchas
//!
//! Values that clip at 0 or 255 lose information, so a remap is only
//! approximately invertible away from the saturation boundaries.

use crate::{OpsError, OpsResult};
use fstop_core::{pixel_brightness, Image, CHANNELS};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Lowest exposure adjustment the widget accepts (stops).
pub const EV_MIN: f32 = -5.0;

/// Highest exposure adjustment the widget accepts (stops).
pub const EV_MAX: f32 = 5.0;

/// Parameters for an exposure remap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exposure {
    /// Exposure in stops (0 = no change, +1 = 2x brighter).
    pub ev: f32,
}

impl Default for Exposure {
    fn default() -> Self {
        Self { ev: 0.0 }
    }
}

impl Exposure {
    /// Creates an exposure op, clamping `ev` into [[`EV_MIN`], [`EV_MAX`]].
    pub fn new(ev: f32) -> Self {
        Self {
            ev: ev.clamp(EV_MIN, EV_MAX),
        }
    }

    /// Identity (no change).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Check if this is identity (no-op).
    pub fn is_identity(&self) -> bool {
        self.ev == 0.0
    }

    /// Linear gain applied to each color channel: `2^ev`.
    #[inline]
    pub fn gain(&self) -> f32 {
        self.ev.exp2()
    }

    /// Apply to one RGBA pixel. Alpha is unchanged.
    #[inline]
    pub fn apply(&self, rgba: [u8; CHANNELS]) -> [u8; CHANNELS] {
        let gain = self.gain();
        [
            scale_channel(rgba[0], gain),
            scale_channel(rgba[1], gain),
            scale_channel(rgba[2], gain),
            rgba[3],
        ]
    }
}

/// Scale one channel value, round to nearest, clamp to 8-bit range.
#[inline]
fn scale_channel(v: u8, gain: f32) -> u8 {
    (v as f32 * gain).round().clamp(0.0, 255.0) as u8
}

/// Remap one row of interleaved RGBA bytes in place.
fn remap_row(row: &mut [u8], gain: f32) {
    for chunk in row.chunks_exact_mut(CHANNELS) {
        chunk[0] = scale_channel(chunk[0], gain);
        chunk[1] = scale_channel(chunk[1], gain);
        chunk[2] = scale_channel(chunk[2], gain);
        // alpha unchanged
    }
}

/// Applies an exposure adjustment, producing a fresh bitmap.
///
/// The source is never modified; output dimensions match the source. `ev`
/// is clamped into [[`EV_MIN`], [`EV_MAX`]]. EV 0 returns a cheap
/// copy-on-write clone of the source.
///
/// With the `parallel` feature (default) rows are remapped on the rayon
/// thread pool.
///
/// # Example
///
/// ```rust
/// use fstop_core::Image;
/// use fstop_ops::apply_exposure;
///
/// let src = Image::filled(4, 4, [100, 150, 200, 255]);
/// let darker = apply_exposure(&src, -1.0);
/// assert_eq!(darker.pixel(0, 0), [50, 75, 100, 255]);
/// // Source untouched.
/// assert_eq!(src.pixel(0, 0), [100, 150, 200, 255]);
/// ```
pub fn apply_exposure(source: &Image, ev: f32) -> Image {
    let op = Exposure::new(ev);
    if op.is_identity() || source.is_empty() {
        return source.clone();
    }

    debug!(
        ev = op.ev,
        width = source.width(),
        height = source.height(),
        "applying exposure remap"
    );

    let gain = op.gain();
    let row_len = source.width() as usize * CHANNELS;
    let mut out = source.clone();
    let data = out.data_mut();

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(row_len)
        .for_each(|row| remap_row(row, gain));

    #[cfg(not(feature = "parallel"))]
    for row in data.chunks_mut(row_len) {
        remap_row(row, gain);
    }

    out
}

/// Estimates an initial EV for a freshly loaded image.
///
/// Autoexposure-style heuristic: `log2(255 / mean)` where `mean` is the
/// average of `(r + g + b) / 3` over all pixels. A mid-tone image lands
/// near 0; dark images suggest pushing exposure up. The result is clamped
/// into [[`EV_MIN`], [`EV_MAX`]], so an all-black image yields [`EV_MAX`]
/// rather than infinity.
///
/// # Errors
///
/// Returns [`OpsError::EmptyImage`] for a zero-area image.
///
/// # Example
///
/// ```rust
/// use fstop_core::Image;
/// use fstop_ops::estimate_ev;
///
/// // Mid-gray: 255 / 127 ≈ 2, about +1 stop.
/// let img = Image::filled(8, 8, [127, 127, 127, 255]);
/// let ev = estimate_ev(&img).unwrap();
/// assert!((ev - 1.0).abs() < 0.02);
/// ```
pub fn estimate_ev(image: &Image) -> OpsResult<f32> {
    if image.is_empty() {
        return Err(OpsError::EmptyImage);
    }

    let mut sum = 0.0f64;
    for chunk in image.data().chunks_exact(CHANNELS) {
        let mut px = [0u8; CHANNELS];
        px.copy_from_slice(chunk);
        sum += pixel_brightness(px) as f64;
    }
    let mean = sum / image.pixel_count() as f64;
    let ev = ((255.0 / mean).log2() as f32).clamp(EV_MIN, EV_MAX);

    debug!(mean, ev, "estimated exposure from image average");
    Ok(ev)
}

// ============================================================================
// Tests
// ============================================================================
