// Ceiling fan - a multi-level device with four discrete speeds
//
// The fan is the receiver that makes snapshot-based undo necessary: with more
// than two levels, the inverse of "set to high" depends on where the fan was,
// not on which operation ran.

use serde::{Deserialize, Serialize};

/// Discrete fan speed levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanSpeed {
    Off,
    Low,
    Medium,
    High,
}

impl Default for FanSpeed {
    fn default() -> Self {
        FanSpeed::Off
    }
}

impl FanSpeed {
    /// Check if the fan is turning at all
    pub fn is_running(self) -> bool {
        !matches!(self, FanSpeed::Off)
    }
}

/// A ceiling fan identified by its location, starting out off.
pub struct CeilingFan {
    location: String,
    speed: FanSpeed,
}

impl CeilingFan {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            speed: FanSpeed::Off,
        }
    }

    pub fn high(&mut self) {
        self.speed = FanSpeed::High;
    }

    pub fn medium(&mut self) {
        self.speed = FanSpeed::Medium;
    }

    pub fn low(&mut self) {
        self.speed = FanSpeed::Low;
    }

    pub fn off(&mut self) {
        self.speed = FanSpeed::Off;
    }

    /// Current speed, read by stateful commands before they mutate the fan
    pub fn speed(&self) -> FanSpeed {
        self.speed
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
