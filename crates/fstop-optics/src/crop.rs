//! Sensor crop factors.
//!
//! The widget offers a fixed set of sensor formats; invalid multipliers are
//! unrepresentable by construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensor crop factor relative to a full-frame reference.
///
/// With crop mode enabled, the chart reports the "equivalent" aperture
/// `f * factor` and scales brightness by `1 / factor²` (the smaller sensor
/// gathers proportionally less light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CropFactor {
    /// Full-frame sensor (1.0x), no adjustment.
    FullFrame,
    /// APS-C sensor (1.5x).
    #[default]
    ApsC,
    /// Canon APS-C sensor (1.6x).
    ApsCCanon,
    /// Micro Four Thirds sensor (2.0x).
    MicroFourThirds,
}

impl CropFactor {
    /// Numeric multiplier for this sensor format.
    pub const fn factor(self) -> f64 {
        match self {
            Self::FullFrame => 1.0,
            Self::ApsC => 1.5,
            Self::ApsCCanon => 1.6,
            Self::MicroFourThirds => 2.0,
        }
    }

    /// Display label for UI.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullFrame => "Full frame",
            Self::ApsC => "APS-C",
            Self::ApsCCanon => "APS-C (Canon)",
            Self::MicroFourThirds => "Micro Four Thirds",
        }
    }

    /// All available crop factors, in ascending multiplier order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::FullFrame,
            Self::ApsC,
            Self::ApsCCanon,
            Self::MicroFourThirds,
        ]
    }
}
