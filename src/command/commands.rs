// Concrete command implementations

use crate::command::trait_def::{Command, SharedCommand};
use crate::devices::ceiling_fan::{CeilingFan, FanSpeed};
use crate::devices::garage_door::GarageDoor;
use crate::devices::light::Light;
use std::sync::{Arc, Mutex};

/// Command to turn a light on
///
/// Undo applies the fixed inverse (off); no snapshot is needed because the
/// inverse is operation-determined, not state-determined.
pub struct LightOnCommand {
    light: Arc<Mutex<Light>>,
    label: String,
}

impl LightOnCommand {
    pub fn new(light: Arc<Mutex<Light>>) -> Self {
        let label = match light.lock() {
            Ok(light) => format!("{} light on", light.location()),
            Err(_) => "light on".to_string(),
        };
        Self { light, label }
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self) {
        if let Ok(mut light) = self.light.lock() {
            light.on();
        }
    }

    fn undo(&mut self) {
        if let Ok(mut light) = self.light.lock() {
            light.off();
        }
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// Command to turn a light off
pub struct LightOffCommand {
    light: Arc<Mutex<Light>>,
    label: String,
}

impl LightOffCommand {
    pub fn new(light: Arc<Mutex<Light>>) -> Self {
        let label = match light.lock() {
            Ok(light) => format!("{} light off", light.location()),
            Err(_) => "light off".to_string(),
        };
        Self { light, label }
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self) {
        if let Ok(mut light) = self.light.lock() {
            light.off();
        }
    }

    fn undo(&mut self) {
        if let Ok(mut light) = self.light.lock() {
            light.on();
        }
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// Command to raise the garage door
pub struct GarageDoorUpCommand {
    door: Arc<Mutex<GarageDoor>>,
    label: String,
}

impl GarageDoorUpCommand {
    pub fn new(door: Arc<Mutex<GarageDoor>>) -> Self {
        Self {
            door,
            label: "garage door up".to_string(),
        }
    }
}

impl Command for GarageDoorUpCommand {
    fn execute(&mut self) {
        if let Ok(mut door) = self.door.lock() {
            door.up();
        }
    }

    fn undo(&mut self) {
        if let Ok(mut door) = self.door.lock() {
            door.down();
        }
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// Command to lower the garage door
pub struct GarageDoorDownCommand {
    door: Arc<Mutex<GarageDoor>>,
    label: String,
}

impl GarageDoorDownCommand {
    pub fn new(door: Arc<Mutex<GarageDoor>>) -> Self {
        Self {
            door,
            label: "garage door down".to_string(),
        }
    }
}

impl Command for GarageDoorDownCommand {
    fn execute(&mut self) {
        if let Ok(mut door) = self.door.lock() {
            door.down();
        }
    }

    fn undo(&mut self) {
        if let Ok(mut door) = self.door.lock() {
            door.up();
        }
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// Command to drive a ceiling fan to a target speed
///
/// execute() reads the fan's current speed into `prev_speed` before setting
/// the target, so undo() can restore the exact prior level on a receiver with
/// four discrete states. The snapshot is rewritten on every execute: undo
/// always reverses the most recent execute, and an earlier snapshot is lost
/// if the same instance runs twice in a row.
pub struct SetFanSpeedCommand {
    fan: Arc<Mutex<CeilingFan>>,
    target: FanSpeed,
    prev_speed: Option<FanSpeed>,
    label: String,
}

impl SetFanSpeedCommand {
    pub fn new(fan: Arc<Mutex<CeilingFan>>, target: FanSpeed) -> Self {
        let label = match fan.lock() {
            Ok(fan) => format!("{} fan {:?}", fan.location(), target),
            Err(_) => format!("fan {:?}", target),
        };
        Self {
            fan,
            target,
            prev_speed: None,
            label,
        }
    }

    pub fn high(fan: Arc<Mutex<CeilingFan>>) -> Self {
        Self::new(fan, FanSpeed::High)
    }

    pub fn medium(fan: Arc<Mutex<CeilingFan>>) -> Self {
        Self::new(fan, FanSpeed::Medium)
    }

    pub fn low(fan: Arc<Mutex<CeilingFan>>) -> Self {
        Self::new(fan, FanSpeed::Low)
    }

    pub fn off(fan: Arc<Mutex<CeilingFan>>) -> Self {
        Self::new(fan, FanSpeed::Off)
    }

    /// Drive the fan to a level through its named operation.
    /// This is a level-to-operation mapping, never a stored closure.
    fn apply(fan: &mut CeilingFan, speed: FanSpeed) {
        match speed {
            FanSpeed::Off => fan.off(),
            FanSpeed::Low => fan.low(),
            FanSpeed::Medium => fan.medium(),
            FanSpeed::High => fan.high(),
        }
    }
}

impl Command for SetFanSpeedCommand {
    fn execute(&mut self) {
        if let Ok(mut fan) = self.fan.lock() {
            self.prev_speed = Some(fan.speed());
            Self::apply(&mut fan, self.target);
        }
    }

    fn undo(&mut self) {
        // No snapshot means execute() never ran: nothing to reverse
        if let Some(prev) = self.prev_speed {
            if let Ok(mut fan) = self.fan.lock() {
                Self::apply(&mut fan, prev);
            }
        }
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// Composite command executing a fixed sequence of sub-commands
///
/// Sub-commands run in construction order on execute() and in strict reverse
/// order on undo(): later sub-commands may depend on the effects of earlier
/// ones, so unwinding is LIFO. The macro holds no snapshot of its own;
/// correctness is delegated entirely to the sub-commands' own undo contracts.
pub struct MacroCommand {
    label: String,
    commands: Vec<SharedCommand>,
}

impl MacroCommand {
    /// Create a macro over an ordered command sequence.
    /// The order is caller-supplied and significant.
    pub fn new(label: impl Into<String>, commands: Vec<SharedCommand>) -> Self {
        Self {
            label: label.into(),
            commands,
        }
    }
}

impl Command for MacroCommand {
    fn execute(&mut self) {
        for command in &self.commands {
            if let Ok(mut command) = command.lock() {
                command.execute();
            }
        }
    }

    fn undo(&mut self) {
        for command in self.commands.iter().rev() {
            if let Ok(mut command) = command.lock() {
                command.undo();
            }
        }
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// No-op command pre-filling every unconfigured slot and the undo register
///
/// Keeps the invoker free of absent-command checks: every slot is always
/// bound to something satisfying the contract.
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&mut self) {}

    fn undo(&mut self) {}

    fn description(&self) -> String {
        "---".to_string()
    }
}
