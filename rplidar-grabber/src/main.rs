//! Interactive RPLIDAR data grabber.
//!
//! Repeatedly pulls one rotation of distance/angle samples from the
//! sensor and renders it as raw per-sample text or as an ASCII
//! bar-chart histogram, driven by commands typed at a prompt.

mod capture;
mod device;
mod histogram;
mod interrupt;
mod lidar;
mod session;

use clap::{Arg, Command};
use rplidar_driver::RplidarDriver;
use session::{run_session, CliArgs};
use std::io;

fn parse_args() -> CliArgs {
    let matches = Command::new("rplidar_grabber")
        .about("Grabs rotations from an RPLIDAR and renders them as text or a histogram.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .required(false),
        )
        .arg(
            Arg::new("baudrate")
                .help("Baud rate as a decimal integer")
                .value_parser(clap::value_parser!(u32))
                .required(false),
        )
        .get_matches();

    CliArgs {
        port: matches.get_one::<String>("port").cloned(),
        baud_rate: matches.get_one::<u32>("baudrate").copied(),
    }
}

fn main() {
    let args = parse_args();
    let cancel = interrupt::install();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run_session(
        args,
        |config| RplidarDriver::connect(&config.port, config.baud_rate),
        &cancel,
        &mut input,
        &mut out,
    );
    if let Err(e) = result {
        eprintln!("{e}");
    }
    // the exit status stays 0 on every documented path
}
