#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One rangefinder measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Angle in hundredths of a degree, in `[0, 36000)`.
    pub angle_centideg: u16,
    /// Distance in quarter millimeters. Zero means no echo was received.
    pub distance_q2: u16,
    /// Return strength of the laser pulse.
    pub quality: u8,
    /// Set on the first sample of a new rotation.
    pub sync: bool,
}

impl Sample {
    pub fn angle_degrees(&self) -> f64 {
        (self.angle_centideg as f64) / 100.
    }

    pub fn distance_mm(&self) -> f64 {
        (self.distance_q2 as f64) / 4.
    }

    /// Whether the sensor actually saw an echo for this sample.
    pub fn has_echo(&self) -> bool {
        self.distance_q2 != 0
    }
}
