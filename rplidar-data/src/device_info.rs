#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceInfo {
    pub model_number: u8,
    /// Major version in the high byte, minor version in the low byte.
    pub firmware_version: u16,
    pub hardware_version: u8,
    pub serial_number: [u8; 16],
}

impl DeviceInfo {
    pub fn firmware_major(&self) -> u8 {
        (self.firmware_version >> 8) as u8
    }

    pub fn firmware_minor(&self) -> u8 {
        (self.firmware_version & 0xFF) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firmware_version_split() {
        let info = DeviceInfo {
            model_number: 0x18,
            firmware_version: 0x0118,
            hardware_version: 5,
            serial_number: [0; 16],
        };
        assert_eq!(info.firmware_major(), 1);
        assert_eq!(info.firmware_minor(), 24);
    }
}
