pub(crate) const HEADER_SIZE: usize = 7;
pub(crate) const MEASUREMENT_NODE_SIZE: usize = 5;
pub(crate) const LIDAR_CMD_SYNC_BYTE: u8 = 0xA5;
pub(crate) const LIDAR_CMD_GET_DEVICE_INFO: u8 = 0x50;
pub(crate) const LIDAR_CMD_GET_DEVICE_HEALTH: u8 = 0x52;
pub(crate) const LIDAR_CMD_SCAN: u8 = 0x20;
pub(crate) const LIDAR_CMD_FORCE_SCAN: u8 = 0x21;
pub(crate) const LIDAR_CMD_STOP: u8 = 0x25;
pub(crate) const LIDAR_ANS_TYPE_DEVINFO: u8 = 0x04;
pub(crate) const LIDAR_ANS_LENGTH_DEVINFO: u8 = 20;
pub(crate) const LIDAR_ANS_TYPE_DEVHEALTH: u8 = 0x06;
pub(crate) const LIDAR_ANS_LENGTH_DEVHEALTH: u8 = 3;
pub(crate) const LIDAR_ANS_TYPE_MEASUREMENT: u8 = 0x81;
pub(crate) const N_READ_TRIALS: usize = 3;
// One byte shift per trial when hunting for a measurement node boundary.
pub(crate) const N_RESYNC_TRIALS: usize = 64;
