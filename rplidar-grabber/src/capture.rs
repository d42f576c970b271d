use crate::histogram::plot_histogram;
use crate::lidar::Lidar;
use rplidar_data::Scan;
use rplidar_driver::RplidarError;
use std::io::{BufRead, Write};

/// Presentation selected per user command; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Continuous,
    OneCycle,
    Histogram,
}

/// Captures one rotation into the reused `scan` buffer and presents it
/// according to `mode`.
///
/// A timed-out grab is still presented: the samples that made it into
/// the buffer before the deadline are a usable partial rotation. Any
/// other grab failure reports the cause and yields no output for this
/// cycle.
pub fn capture_and_display<L: Lidar>(
    lidar: &mut L,
    scan: &mut Scan,
    mode: Mode,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), RplidarError> {
    if mode != Mode::Continuous {
        writeln!(out, "waiting for data...")?;
    }

    match lidar.grab_scan(scan) {
        Ok(()) => (),
        Err(e) if e.is_timeout() => (),
        Err(e) => {
            writeln!(out, "error: {}", e)?;
            return Err(e);
        }
    }

    scan.sort_by_angle();

    let mut show_table = mode != Mode::Histogram;
    if mode == Mode::Histogram {
        plot_histogram(scan, out)?;

        write!(out, "Do you want to see the data? (y/n) ")?;
        out.flush()?;
        let mut key = String::new();
        input.read_line(&mut key)?;
        let key = key.trim().to_lowercase();
        show_table = key == "y" || key == "yes";
    }

    if show_table {
        for sample in scan.iter() {
            writeln!(
                out,
                "{} theta: {:.2} Dist: {:08.2} Q: {}",
                if sample.sync { "S " } else { "  " },
                sample.angle_degrees(),
                sample.distance_mm(),
                sample.quality
            )?;
        }
    }

    Ok(())
}
