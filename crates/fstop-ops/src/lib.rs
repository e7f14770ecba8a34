//! # fstop-ops
//!
//! Image operations for the f-stop brightness toolkit.
//!
//! The one operation this widget needs is the exposure remapper: scale the
//! color channels of a decoded bitmap by `2^EV` and clamp, leaving alpha
//! alone. Alongside it lives the autoexposure-style EV seed computed from a
//! freshly loaded image.
//!
//! # Example
//!
//! ```rust
//! use fstop_core::Image;
//! use fstop_ops::{apply_exposure, estimate_ev};
//!
//! let source = Image::filled(8, 8, [64, 64, 64, 255]);
//!
//! // One stop up doubles every color channel.
//! let brighter = apply_exposure(&source, 1.0);
//! assert_eq!(brighter.pixel(0, 0), [128, 128, 128, 255]);
//!
//! // Darker images get a positive EV suggestion.
//! let ev = estimate_ev(&source).unwrap();
//! assert!(ev > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod exposure;

pub use error::{OpsError, OpsResult};
pub use exposure::{apply_exposure, estimate_ev, Exposure, EV_MAX, EV_MIN};
