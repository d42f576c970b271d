//! Synchronous serial driver for RPLIDAR A-series rangefinders.
//!
//! All I/O blocks the calling thread; there is no background
//! acquisition. The port is owned exclusively by the driver and the
//! sensor is stopped when the driver is dropped.

mod constants;
mod error;
mod numeric;
mod packet;
mod serial;
mod time;

use crate::constants::{
    HEADER_SIZE, LIDAR_ANS_LENGTH_DEVHEALTH, LIDAR_ANS_LENGTH_DEVINFO, LIDAR_ANS_TYPE_DEVHEALTH,
    LIDAR_ANS_TYPE_DEVINFO, LIDAR_ANS_TYPE_MEASUREMENT, LIDAR_CMD_FORCE_SCAN,
    LIDAR_CMD_GET_DEVICE_HEALTH, LIDAR_CMD_GET_DEVICE_INFO, LIDAR_CMD_SCAN, MEASUREMENT_NODE_SIZE,
    N_RESYNC_TRIALS,
};
use crate::numeric::to_u16_le;
use crate::packet::{decode_node, is_well_formed_node, validate_response_header};
use crate::serial::{read, send_command, stop_scan, stop_scan_and_flush};
use crate::time::sleep_ms;
use serialport::SerialPort;

pub use crate::error::RplidarError;
pub use rplidar_data::{DeviceHealth, DeviceInfo, HealthStatus, Sample, Scan, SCAN_CAPACITY};

pub struct RplidarDriver {
    port: Box<dyn SerialPort>,
}

impl RplidarDriver {
    /// Opens the serial port and puts the sensor into a known idle state.
    ///
    /// # Arguments
    ///
    /// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
    /// * `baud_rate` - Line rate, 115200 for A-series devices.
    pub fn connect(port_name: &str, baud_rate: u32) -> Result<RplidarDriver, RplidarError> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(std::time::Duration::from_millis(10))
            .open()?;

        let mut driver = RplidarDriver { port };
        if !cfg!(test) {
            // In testing, disable flushing to receive preloaded signals
            stop_scan_and_flush(&mut driver.port)?;
            sleep_ms(10);
            stop_scan_and_flush(&mut driver.port)?;
        }
        Ok(driver)
    }

    pub fn device_info(&mut self) -> Result<DeviceInfo, RplidarError> {
        send_command(&mut self.port, LIDAR_CMD_GET_DEVICE_INFO)?;
        let header = read(&mut self.port, HEADER_SIZE)?;
        validate_response_header(
            &header,
            Some(LIDAR_ANS_LENGTH_DEVINFO),
            LIDAR_ANS_TYPE_DEVINFO,
        )?;
        let info = read(&mut self.port, LIDAR_ANS_LENGTH_DEVINFO.into())?;
        Ok(DeviceInfo {
            model_number: info[0],
            firmware_version: to_u16_le(info[1], info[2]),
            hardware_version: info[3],
            serial_number: info[4..20].try_into().unwrap(),
        })
    }

    pub fn health(&mut self) -> Result<DeviceHealth, RplidarError> {
        send_command(&mut self.port, LIDAR_CMD_GET_DEVICE_HEALTH)?;
        let header = read(&mut self.port, HEADER_SIZE)?;
        validate_response_header(
            &header,
            Some(LIDAR_ANS_LENGTH_DEVHEALTH),
            LIDAR_ANS_TYPE_DEVHEALTH,
        )?;
        let health = read(&mut self.port, LIDAR_ANS_LENGTH_DEVHEALTH.into())?;
        let status = match health[0] {
            0 => HealthStatus::Ok,
            1 => HealthStatus::Warning,
            2 => HealthStatus::Error,
            other => return Err(RplidarError::InvalidHealthStatus(other)),
        };
        Ok(DeviceHealth {
            status,
            error_code: to_u16_le(health[1], health[2]),
        })
    }

    /// Requests measurement streaming. `force` makes the sensor sample
    /// regardless of whether the motor has reached speed.
    pub fn start_scan(&mut self, force: bool) -> Result<(), RplidarError> {
        let command = if force {
            LIDAR_CMD_FORCE_SCAN
        } else {
            LIDAR_CMD_SCAN
        };
        send_command(&mut self.port, command)?;
        let header = read(&mut self.port, HEADER_SIZE)?;
        validate_response_header(&header, None, LIDAR_ANS_TYPE_MEASUREMENT)?;
        Ok(())
    }

    /// Grabs exactly one 0-360 degree rotation into `scan`, overwriting
    /// its previous contents.
    ///
    /// On `Err(Timeout)` the samples read before the deadline are left
    /// in `scan`; callers may still present the partial rotation.
    pub fn grab_scan(&mut self, scan: &mut Scan) -> Result<(), RplidarError> {
        scan.clear();
        // discard the tail of the rotation already in flight
        let first = loop {
            let sample = self.read_node()?;
            if sample.sync {
                break sample;
            }
        };
        scan.push(first);
        while !scan.is_full() {
            let sample = self.read_node()?;
            if sample.sync {
                // first node of the next rotation; each grab waits for a
                // fresh sync, so consuming it loses nothing
                break;
            }
            scan.push(sample);
        }
        Ok(())
    }

    fn read_node(&mut self) -> Result<Sample, RplidarError> {
        let mut raw = read(&mut self.port, MEASUREMENT_NODE_SIZE)?;
        for _ in 0..N_RESYNC_TRIALS {
            if is_well_formed_node(&raw) {
                return Ok(decode_node(&raw));
            }
            raw.remove(0);
            raw.extend(read(&mut self.port, 1)?);
        }
        Err(RplidarError::SyncLost)
    }
}

impl Drop for RplidarDriver {
    fn drop(&mut self) {
        let _ = stop_scan(&mut self.port);
    }
}
