//! # fstop-core
//!
//! Core types for the f-stop brightness toolkit.
//!
//! This crate provides the foundational types used throughout the FSTOP-RS
//! workspace:
//!
//! - [`Image`] - Owned RGBA bitmap buffer with copy-on-write semantics
//! - [`Error`], [`Result`] - Unified error handling
//! - Pixel helpers such as [`pixel_brightness`]
//!
//! ## Design Philosophy
//!
//! The widget this workspace serves handles exactly one pixel layout:
//! interleaved 8-bit RGBA, as produced by a host image decoder. [`Image`]
//! therefore fixes the layout instead of abstracting over it, and focuses on
//! making the common access pattern cheap: clone the decoded source, derive
//! a fresh adjusted copy from it on every edit.
//!
//! ```
//! use fstop_core::Image;
//!
//! let source = Image::filled(4, 4, [64, 64, 64, 255]);
//! let edit = source.clone(); // shares the buffer until first write
//! assert_eq!(edit.pixel(0, 0), [64, 64, 64, 255]);
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of FSTOP-RS and has no internal
//! dependencies. The other workspace crates build on it:
//!
//! ```text
//! fstop-core (this crate)
//!    ^
//!    |
//!    +-- fstop-ops (exposure remapping)
//!    +-- fstop-chart (widget state and chart series)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{pixel_brightness, CHANNELS, CHANNEL_A, CHANNEL_B, CHANNEL_G, CHANNEL_R};
