use crate::capture::{capture_and_display, Mode};
use crate::device::{check_device_health, print_device_info};
use crate::interrupt::CancelToken;
use crate::lidar::Lidar;
use rplidar_data::Scan;
use rplidar_driver::RplidarError;
use std::io::{self, BufRead, Write};

#[cfg(windows)]
pub const DEFAULT_PORT: &str = "\\\\.\\com3";
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUD_RATE: u32 = 115200;

/// Connection parameters, fixed once a connection attempt starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub port: String,
    pub baud_rate: u32,
}

/// Command-line overrides, consumed on the first parameter-collection
/// pass. After a failed connect the prompts are always interactive, so
/// a bad argument cannot retry forever.
#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub port: Option<String>,
    pub baud_rate: Option<u32>,
}

enum State<L> {
    CollectParams,
    Connect(SessionConfig),
    Preflight(L),
    Scanning(L),
    Exit,
}

/// Runs the interactive session to completion.
///
/// `connect` is invoked once per `Connect` entry; a failure loops back
/// to parameter collection. The driver is dropped, releasing the
/// serial port, before the exit prompt is shown. The process exit code
/// stays 0 on every path, matching the original CLI.
pub fn run_session<L, C>(
    args: CliArgs,
    mut connect: C,
    cancel: &CancelToken,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()>
where
    L: Lidar,
    C: FnMut(&SessionConfig) -> Result<L, RplidarError>,
{
    let mut args = args;
    let mut state: State<L> = State::CollectParams;
    loop {
        state = match state {
            State::CollectParams => match collect_params(&mut args, input, out)? {
                Some(config) => State::Connect(config),
                None => State::Exit,
            },
            State::Connect(config) => match connect(&config) {
                Ok(lidar) => State::Preflight(lidar),
                Err(e) => {
                    eprintln!(
                        "Error, cannot bind to the specified serial port {}. ({})",
                        config.port, e
                    );
                    State::CollectParams
                }
            },
            State::Preflight(mut lidar) => {
                if print_device_info(&mut lidar, out).is_err()
                    || check_device_health(&mut lidar, out).is_err()
                {
                    State::Exit
                } else {
                    State::Scanning(lidar)
                }
            }
            State::Scanning(lidar) => scanning(lidar, cancel, input, out)?,
            State::Exit => {
                writeln!(out, "Press enter to exit.")?;
                out.flush()?;
                let mut line = String::new();
                input.read_line(&mut line)?;
                return Ok(());
            }
        };
    }
}

/// The inner command loop. Always transitions to `Exit`; the driver is
/// dropped on the way out.
fn scanning<L: Lidar>(
    mut lidar: L,
    cancel: &CancelToken,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<State<L>> {
    if lidar.start_scan(false).is_err() {
        eprintln!("Error, cannot start the scan operation.");
        return Ok(State::Exit);
    }

    let mut scan = Scan::new();
    writeln!(out)?;
    'menu: loop {
        writeln!(out, "What would you like? (continuous; one cycle; histogram; exit)")?;
        out.flush()?;
        loop {
            let Some(response) = read_trimmed_line(input)? else {
                break 'menu;
            };
            match response.to_lowercase().as_str() {
                "continuous" => {
                    loop {
                        if capture_and_display(&mut lidar, &mut scan, Mode::Continuous, input, out)
                            .is_err()
                        {
                            eprintln!("Error, cannot grab scan data.");
                            break 'menu;
                        }
                        if cancel.is_cancelled() {
                            cancel.reset();
                            break;
                        }
                    }
                    break;
                }
                "one cycle" => {
                    if capture_and_display(&mut lidar, &mut scan, Mode::OneCycle, input, out)
                        .is_err()
                    {
                        eprintln!("Error, cannot grab scan data.");
                        break 'menu;
                    }
                    break;
                }
                "histogram" => {
                    if capture_and_display(&mut lidar, &mut scan, Mode::Histogram, input, out)
                        .is_err()
                    {
                        eprintln!("Error, cannot grab scan data.");
                        break 'menu;
                    }
                    break;
                }
                "exit" => break 'menu,
                _ => {
                    writeln!(
                        out,
                        "Response not valid. Inputs are: continuous; one cycle; histogram; exit"
                    )?;
                    out.flush()?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(State::Exit)
}

fn collect_params(
    args: &mut CliArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<SessionConfig>> {
    let port = match args.port.take() {
        Some(port) => port,
        None => {
            writeln!(out, "Which com port? (default : {})", DEFAULT_PORT)?;
            out.flush()?;
            // end of input and an explicit "exit" both leave the session
            let Some(response) = read_trimmed_line(input)? else {
                return Ok(None);
            };
            if response.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }
            if response.is_empty() {
                writeln!(out, "Using default\n")?;
                DEFAULT_PORT.to_string()
            } else {
                writeln!(out, "Using {}\n", response)?;
                response
            }
        }
    };

    let baud_rate = match args.baud_rate.take() {
        Some(baud_rate) => baud_rate,
        None => loop {
            writeln!(out, "What baudrate? (default : {})", DEFAULT_BAUD_RATE)?;
            out.flush()?;
            let Some(response) = read_trimmed_line(input)? else {
                break DEFAULT_BAUD_RATE;
            };
            if response.is_empty() {
                writeln!(out, "Using default\n")?;
                break DEFAULT_BAUD_RATE;
            }
            match response.parse::<u32>() {
                Ok(baud_rate) => {
                    writeln!(out, "Using baudrate of {}\n", baud_rate)?;
                    break baud_rate;
                }
                Err(_) => writeln!(out, "Not a valid baudrate.")?,
            }
        },
    };

    Ok(Some(SessionConfig { port, baud_rate }))
}

/// Returns `None` at end of input.
fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
