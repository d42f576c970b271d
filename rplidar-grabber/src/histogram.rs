use rplidar_data::Scan;
use std::io::{self, Write};

/// Number of angular bins, roughly 4.8 degrees per bin.
pub const BAR_COUNT: usize = 75;
/// Chart height in character rows.
pub const MAX_BAR_HEIGHT: usize = 20;

const ANGLE_SCALE: f64 = 360.0 / BAR_COUNT as f64;

/// Renders one rotation as a fixed-width ASCII bar chart followed by a
/// separator row.
///
/// Each bin holds a running average of the distances that landed in it:
/// an empty bin takes the sample's distance outright, a non-empty bin
/// takes the mean of its current value and the new distance, which
/// biases the bin toward the most recent samples.
///
/// A scan with no samples renders fully filled: the maximum is zero, so
/// every threshold is zero and every cell passes it.
pub fn plot_histogram(scan: &Scan, out: &mut impl Write) -> io::Result<()> {
    let mut histogram = [0f64; BAR_COUNT];
    let mut max_val = 0f64;
    for sample in scan.iter() {
        let mut bin = (sample.angle_degrees() / ANGLE_SCALE) as usize;
        if bin >= BAR_COUNT {
            // out-of-range angles land in the first bin
            bin = 0;
        }
        let cached = histogram[bin];
        let value = if cached == 0.0 {
            sample.distance_mm()
        } else {
            (sample.distance_mm() + cached) / 2.0
        };
        if value > max_val {
            max_val = value;
        }
        histogram[bin] = value;
    }

    for height in 0..MAX_BAR_HEIGHT {
        let threshold = ((MAX_BAR_HEIGHT - height - 1) as f64) * (max_val / MAX_BAR_HEIGHT as f64);
        for value in &histogram {
            if *value >= threshold {
                write!(out, "*")?;
            } else {
                write!(out, " ")?;
            }
        }
        writeln!(out)?;
    }
    for _ in 0..BAR_COUNT {
        write!(out, "-")?;
    }
    writeln!(out)?;
    Ok(())
}
