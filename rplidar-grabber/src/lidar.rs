use rplidar_driver::{DeviceHealth, DeviceInfo, RplidarDriver, RplidarError, Scan};

/// Seam between the session logic and the sensor driver.
pub trait Lidar {
    fn device_info(&mut self) -> Result<DeviceInfo, RplidarError>;
    fn health(&mut self) -> Result<DeviceHealth, RplidarError>;
    fn start_scan(&mut self, force: bool) -> Result<(), RplidarError>;
    /// Overwrites `scan` with one rotation. `Err(Timeout)` leaves the
    /// samples read so far in `scan`.
    fn grab_scan(&mut self, scan: &mut Scan) -> Result<(), RplidarError>;
}

impl Lidar for RplidarDriver {
    fn device_info(&mut self) -> Result<DeviceInfo, RplidarError> {
        RplidarDriver::device_info(self)
    }

    fn health(&mut self) -> Result<DeviceHealth, RplidarError> {
        RplidarDriver::health(self)
    }

    fn start_scan(&mut self, force: bool) -> Result<(), RplidarError> {
        RplidarDriver::start_scan(self, force)
    }

    fn grab_scan(&mut self, scan: &mut Scan) -> Result<(), RplidarError> {
        RplidarDriver::grab_scan(self, scan)
    }
}
