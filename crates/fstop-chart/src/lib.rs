//! # fstop-chart
//!
//! View-model for the f-stop brightness chart widget.
//!
//! The widget's global state (reference aperture, crop toggle, crop factor,
//! loaded bitmap, current EV) lives in an explicit [`ChartState`] record.
//! Each user interaction arrives as a [`ChartMsg`]; [`ChartState::update`]
//! is a pure reducer producing a new record, and the two outputs any UI
//! layer needs are derived on demand:
//!
//! - [`ChartState::series`] - the brightness curve, ready to plot
//! - [`ChartState::preview`] - the exposure-adjusted bitmap, if one is loaded
//!
//! No UI framework appears here; wiring sliders and file pickers to
//! messages is the embedding application's job.
//!
//! # Example
//!
//! ```rust
//! use fstop_chart::{ChartMsg, ChartState};
//!
//! let state = ChartState::default()
//!     .update(ChartMsg::SetSliderPosition(150.0)) // snaps to f/2.8
//!     .update(ChartMsg::SetCropEnabled(true));
//!
//! let series = state.series();
//! assert_eq!(series.points.first().unwrap().label, "f/22");
//! assert!(state.preview().is_none()); // nothing loaded yet
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod messages;
mod series;
mod state;

pub use messages::ChartMsg;
pub use series::{build_series, stop_label, ChartPoint, ChartSeries};
pub use state::{ChartState, DEFAULT_REFERENCE};
