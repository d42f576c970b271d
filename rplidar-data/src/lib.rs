pub mod device_info;
pub mod health;
pub mod sample;
pub mod scan;

pub use device_info::DeviceInfo;
pub use health::{DeviceHealth, HealthStatus};
pub use sample::Sample;
pub use scan::{Scan, SCAN_CAPACITY};
