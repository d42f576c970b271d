use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Self-reported device condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HealthStatus {
    Ok,
    Warning,
    Error,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HealthStatus::Ok => write!(f, "OK"),
            HealthStatus::Warning => write!(f, "Warning"),
            HealthStatus::Error => write!(f, "Error"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceHealth {
    pub status: HealthStatus,
    pub error_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(HealthStatus::Ok.to_string(), "OK");
        assert_eq!(HealthStatus::Warning.to_string(), "Warning");
        assert_eq!(HealthStatus::Error.to_string(), "Error");
    }
}
