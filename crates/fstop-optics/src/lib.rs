//! # fstop-optics
//!
//! Aperture-domain math for the f-stop brightness chart.
//!
//! Everything in this crate is a pure function over plain numbers: no
//! state, no allocation beyond the returned sample vector, no dependency on
//! the image half of the workspace.
//!
//! # Modules
//!
//! - [`stops`] - Canonical f-stop table and the slider snap rule
//! - [`crop`] - Sensor crop factors
//! - [`brightness`] - Relative light transmission per stop
//!
//! # Terminology
//!
//! - **f-stop / aperture**: ratio describing a lens opening; smaller
//!   numbers admit more light.
//! - **Crop factor**: how much smaller a sensor is than full frame, used to
//!   compute "equivalent" apertures.
//! - **Normalized brightness**: light transmission relative to a chosen
//!   reference aperture, exactly 1.0 at that aperture.
//!
//! # Usage
//!
//! ```rust
//! use fstop_optics::{compute_samples, resolve_aperture};
//!
//! // Slider halfway along a log2 scale: 2^(150/100) ≈ f/2.83, snaps to f/2.8.
//! let reference = resolve_aperture(150.0);
//! assert_eq!(reference, 2.8);
//!
//! let set = compute_samples(reference, None);
//! assert_eq!(set.samples.len(), 13);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod brightness;
pub mod crop;
pub mod math;
pub mod stops;

pub use brightness::{compute_samples, BrightnessSample, SampleSet};
pub use crop::CropFactor;
pub use math::round_to;
pub use stops::{nearest_stop, resolve_aperture, slider_position, CANONICAL_STOPS, SNAP_TOLERANCE};
