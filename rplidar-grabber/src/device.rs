use crate::lidar::Lidar;
use rplidar_driver::{HealthStatus, RplidarError};
use std::io::Write;

fn report_query_failure(e: &RplidarError) {
    if e.is_timeout() {
        eprintln!("Error, operation time out.");
    } else {
        eprintln!("Error, unexpected error: {}", e);
    }
}

/// Prints the serial number, firmware version and hardware revision.
pub fn print_device_info<L: Lidar>(
    lidar: &mut L,
    out: &mut impl Write,
) -> Result<(), RplidarError> {
    let info = match lidar.device_info() {
        Ok(info) => info,
        Err(e) => {
            report_query_failure(&e);
            return Err(e);
        }
    };

    write!(out, "RPLIDAR S/N: ")?;
    for byte in info.serial_number {
        write!(out, "{:02X}", byte)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Firmware Ver: {}.{:02}",
        info.firmware_major(),
        info.firmware_minor()
    )?;
    writeln!(out, "Hardware Rev: {}", info.hardware_version)?;
    Ok(())
}

/// Prints the health block. An Error status is a fatal precondition:
/// the caller must not start acquisition.
pub fn check_device_health<L: Lidar>(
    lidar: &mut L,
    out: &mut impl Write,
) -> Result<(), RplidarError> {
    let health = match lidar.health() {
        Ok(health) => health,
        Err(e) => {
            report_query_failure(&e);
            return Err(e);
        }
    };

    writeln!(
        out,
        "RPLidar health status : {}. (errorcode: {})",
        health.status, health.error_code
    )?;

    if health.status == HealthStatus::Error {
        eprintln!("Error, rplidar internal error detected. Please reboot the device to retry.");
        return Err(RplidarError::DeviceHealthError(health.error_code));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lidar::mock::MockLidar;
    use rplidar_data::DeviceHealth;

    #[test]
    fn test_print_device_info() {
        let mut mock = MockLidar::healthy();
        let mut out = Vec::new();
        print_device_info(&mut mock, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(&format!("RPLIDAR S/N: {}", "AB".repeat(16))));
        assert!(output.contains("Firmware Ver: 1.24"));
        assert!(output.contains("Hardware Rev: 5"));
    }

    #[test]
    fn test_device_info_failure_is_escalated() {
        let mut mock = MockLidar::healthy();
        mock.info = None;
        let mut out = Vec::new();
        assert!(print_device_info(&mut mock, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_health_ok_and_warning_pass() {
        let mut mock = MockLidar::healthy();
        let mut out = Vec::new();
        check_device_health(&mut mock, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("RPLidar health status : OK. (errorcode: 0)"));

        let mut mock = MockLidar::healthy();
        mock.health = Some(DeviceHealth {
            status: HealthStatus::Warning,
            error_code: 2,
        });
        let mut out = Vec::new();
        check_device_health(&mut mock, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("RPLidar health status : Warning. (errorcode: 2)"));
    }

    #[test]
    fn test_health_error_is_fatal_after_printing() {
        let mut mock = MockLidar::healthy();
        mock.health = Some(DeviceHealth {
            status: HealthStatus::Error,
            error_code: 33,
        });
        let mut out = Vec::new();
        let result = check_device_health(&mut mock, &mut out);
        assert!(matches!(result, Err(RplidarError::DeviceHealthError(33))));
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("RPLidar health status : Error. (errorcode: 33)"));
    }
}
