use crate::sample::Sample;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on samples per rotation. A rotation may yield more or
/// fewer samples than the nominal per-degree count, so the buffer holds
/// two slots per degree.
pub const SCAN_CAPACITY: usize = 720;

/// One approximately-360-degree rotation of samples.
///
/// The buffer is allocated once and reused across rotations; `clear`
/// resets the count without releasing the allocation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    samples: Vec<Sample>,
}

impl Scan {
    pub fn new() -> Scan {
        Scan {
            samples: Vec::with_capacity(SCAN_CAPACITY),
        }
    }

    /// Appends a sample. Returns false once the buffer is full; the
    /// sample count never exceeds `SCAN_CAPACITY`.
    pub fn push(&mut self, sample: Sample) -> bool {
        if self.samples.len() >= SCAN_CAPACITY {
            return false;
        }
        self.samples.push(sample);
        true
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= SCAN_CAPACITY
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Reorders the samples into non-decreasing angle. The sort is
    /// stable so same-angle samples keep their acquisition order.
    pub fn sort_by_angle(&mut self) {
        self.samples.sort_by_key(|s| s.angle_centideg);
    }
}

impl Default for Scan {
    fn default() -> Scan {
        Scan::new()
    }
}
