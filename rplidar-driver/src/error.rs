use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum RplidarError {
    InvalidHeaderLength(usize),
    InvalidMagicNumber(String),
    InvalidResponseLength(usize, usize),
    InvalidTypeCode(usize, usize),
    InvalidHealthStatus(u8),
    DeviceHealthError(u16),
    SyncLost,
    Timeout,
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl RplidarError {
    /// A timed-out grab still carries whatever samples were read before
    /// the deadline, so callers treat it as a usable partial result.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RplidarError::Timeout)
    }
}

impl fmt::Display for RplidarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RplidarError::InvalidHeaderLength(len) => write!(
                f,
                "Response descriptor must be always seven bytes. Actually {} bytes.",
                len
            ),
            RplidarError::InvalidMagicNumber(magic) => write!(
                f,
                "Descriptor sign must start with 0xA5 0x5A. Observed = {}.",
                magic
            ),
            RplidarError::InvalidResponseLength(expected, actual) => write!(
                f,
                "Expected response length of {} bytes but found {} bytes.",
                expected, actual
            ),
            RplidarError::InvalidTypeCode(expected, actual) => {
                write!(f, "Expected type code {} but obtained {}.", expected, actual)
            }
            RplidarError::InvalidHealthStatus(status) => {
                write!(f, "Unknown health status value {}.", status)
            }
            RplidarError::DeviceHealthError(code) => {
                write!(f, "Device health error. Error code = {}.", code)
            }
            RplidarError::SyncLost => {
                write!(f, "Could not find a measurement node boundary in the byte stream.")
            }
            RplidarError::Timeout => write!(f, "Operation timed out"),
            RplidarError::IoError(err) => Display::fmt(&err, f),
            RplidarError::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for RplidarError {}

impl From<io::Error> for RplidarError {
    fn from(err: io::Error) -> Self {
        RplidarError::IoError(err)
    }
}

impl From<serialport::Error> for RplidarError {
    fn from(err: serialport::Error) -> Self {
        RplidarError::SerialError(err)
    }
}
