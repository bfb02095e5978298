// Layout manager for saving, loading and applying remote layouts

use crate::command::commands::{
    GarageDoorDownCommand, GarageDoorUpCommand, LightOffCommand, LightOnCommand, MacroCommand,
    NoCommand, SetFanSpeedCommand,
};
use crate::command::trait_def::{SharedCommand, shared};
use crate::devices::ceiling_fan::CeilingFan;
use crate::devices::garage_door::GarageDoor;
use crate::devices::light::Light;
use crate::layout::serialization::{deserialize_from_ron, serialize_to_ron};
use crate::layout::types::{CommandSpec, Layout};
use crate::remote::control::{RemoteControl, RemoteError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Layout error types
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    InvalidSlot(#[from] RemoteError),
}

/// Registry of wired devices, addressed by name when a layout is applied
///
/// The wiring layer registers every constructed device here; layouts refer to
/// devices only by these names.
#[derive(Default)]
pub struct DeviceRegistry {
    lights: HashMap<String, Arc<Mutex<Light>>>,
    fans: HashMap<String, Arc<Mutex<CeilingFan>>>,
    doors: HashMap<String, Arc<Mutex<GarageDoor>>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(&mut self, name: impl Into<String>, light: Arc<Mutex<Light>>) {
        self.lights.insert(name.into(), light);
    }

    pub fn add_fan(&mut self, name: impl Into<String>, fan: Arc<Mutex<CeilingFan>>) {
        self.fans.insert(name.into(), fan);
    }

    pub fn add_door(&mut self, name: impl Into<String>, door: Arc<Mutex<GarageDoor>>) {
        self.doors.insert(name.into(), door);
    }

    fn light(&self, name: &str) -> Result<Arc<Mutex<Light>>, LayoutError> {
        self.lights
            .get(name)
            .cloned()
            .ok_or_else(|| LayoutError::UnknownDevice(name.to_string()))
    }

    fn fan(&self, name: &str) -> Result<Arc<Mutex<CeilingFan>>, LayoutError> {
        self.fans
            .get(name)
            .cloned()
            .ok_or_else(|| LayoutError::UnknownDevice(name.to_string()))
    }

    fn door(&self, name: &str) -> Result<Arc<Mutex<GarageDoor>>, LayoutError> {
        self.doors
            .get(name)
            .cloned()
            .ok_or_else(|| LayoutError::UnknownDevice(name.to_string()))
    }
}

/// Handles saving and loading layouts and rebinding a remote from one
pub struct LayoutManager {
    layouts_dir: PathBuf,
}

impl LayoutManager {
    pub fn new(layouts_dir: impl Into<PathBuf>) -> Self {
        Self {
            layouts_dir: layouts_dir.into(),
        }
    }

    /// Default layouts directory under the user's config dir
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("myhome_remote")
            .join("layouts")
    }

    /// On-disk path for a layout name
    pub fn layout_path(&self, name: &str) -> PathBuf {
        self.layouts_dir.join(format!("{name}.ron"))
    }

    /// Save a layout as RON, creating the layouts directory if needed
    pub fn save_layout(&self, layout: &Layout) -> Result<PathBuf, LayoutError> {
        fs::create_dir_all(&self.layouts_dir)?;
        let path = self.layout_path(&layout.metadata.name);
        let contents = serialize_to_ron(layout)?;
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Load a layout from a RON file
    pub fn load_layout<P: AsRef<Path>>(&self, path: P) -> Result<Layout, LayoutError> {
        let contents = fs::read_to_string(path)?;
        deserialize_from_ron(&contents)
    }

    /// Rebind a remote from a layout, resolving device names via the registry
    ///
    /// Every binding is resolved before the remote is touched, so a layout
    /// with an unknown device or out-of-range slot leaves the remote exactly
    /// as it was.
    pub fn apply(
        &self,
        layout: &Layout,
        registry: &DeviceRegistry,
        remote: &mut RemoteControl,
    ) -> Result<(), LayoutError> {
        let mut resolved = Vec::with_capacity(layout.bindings.len());
        for binding in &layout.bindings {
            if binding.slot >= remote.slot_count() {
                return Err(RemoteError::InvalidSlot {
                    slot: binding.slot,
                    slots: remote.slot_count(),
                }
                .into());
            }
            let on = build_command(&binding.on, registry)?;
            let off = build_command(&binding.off, registry)?;
            resolved.push((binding.slot, on, off));
        }

        for (slot, on, off) in resolved {
            remote.set_command(slot, on, off)?;
        }
        Ok(())
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

/// Build a live command from its declarative spec
fn build_command(
    spec: &CommandSpec,
    registry: &DeviceRegistry,
) -> Result<SharedCommand, LayoutError> {
    let command = match spec {
        CommandSpec::Empty => shared(NoCommand),
        CommandSpec::LightOn { device } => shared(LightOnCommand::new(registry.light(device)?)),
        CommandSpec::LightOff { device } => shared(LightOffCommand::new(registry.light(device)?)),
        CommandSpec::GarageUp { device } => {
            shared(GarageDoorUpCommand::new(registry.door(device)?))
        }
        CommandSpec::GarageDown { device } => {
            shared(GarageDoorDownCommand::new(registry.door(device)?))
        }
        CommandSpec::Fan { device, speed } => {
            shared(SetFanSpeedCommand::new(registry.fan(device)?, *speed))
        }
        CommandSpec::Macro { label, steps } => {
            let mut commands = Vec::with_capacity(steps.len());
            for step in steps {
                commands.push(build_command(step, registry)?);
            }
            shared(MacroCommand::new(label.clone(), commands))
        }
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::ceiling_fan::FanSpeed;

    fn test_registry() -> (
        DeviceRegistry,
        Arc<Mutex<Light>>,
        Arc<Mutex<CeilingFan>>,
        Arc<Mutex<GarageDoor>>,
    ) {
        let light = Arc::new(Mutex::new(Light::new("living room")));
        let fan = Arc::new(Mutex::new(CeilingFan::new("living room")));
        let door = Arc::new(Mutex::new(GarageDoor::new()));

        let mut registry = DeviceRegistry::new();
        registry.add_light("living room", Arc::clone(&light));
        registry.add_fan("living room", Arc::clone(&fan));
        registry.add_door("garage", Arc::clone(&door));

        (registry, light, fan, door)
    }

    fn party_layout() -> Layout {
        let mut layout = Layout::new("evening");
        layout.bind(
            0,
            CommandSpec::LightOn {
                device: "living room".to_string(),
            },
            CommandSpec::LightOff {
                device: "living room".to_string(),
            },
        );
        layout.bind(
            2,
            CommandSpec::Fan {
                device: "living room".to_string(),
                speed: FanSpeed::High,
            },
            CommandSpec::Fan {
                device: "living room".to_string(),
                speed: FanSpeed::Off,
            },
        );
        layout.bind(
            6,
            CommandSpec::Macro {
                label: "party mode on".to_string(),
                steps: vec![
                    CommandSpec::LightOn {
                        device: "living room".to_string(),
                    },
                    CommandSpec::Fan {
                        device: "living room".to_string(),
                        speed: FanSpeed::High,
                    },
                ],
            },
            CommandSpec::Macro {
                label: "party mode off".to_string(),
                steps: vec![
                    CommandSpec::Fan {
                        device: "living room".to_string(),
                        speed: FanSpeed::Off,
                    },
                    CommandSpec::LightOff {
                        device: "living room".to_string(),
                    },
                ],
            },
        );
        layout
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = LayoutManager::new(dir.path());
        let layout = party_layout();

        let path = manager.save_layout(&layout).unwrap();
        assert_eq!(path, dir.path().join("evening.ron"));

        let restored = manager.load_layout(&path).unwrap();
        assert_eq!(restored.metadata.id, layout.metadata.id);
        assert_eq!(restored.bindings, layout.bindings);
    }

    #[test]
    fn test_apply_rebinds_remote() {
        let (registry, light, fan, _door) = test_registry();
        let manager = LayoutManager::new(".");
        let mut remote = RemoteControl::new();

        manager.apply(&party_layout(), &registry, &mut remote).unwrap();

        assert_eq!(remote.on_description(0).unwrap(), "living room light on");
        assert_eq!(remote.on_description(6).unwrap(), "party mode on");

        remote.press_on(6).unwrap();
        assert!(light.lock().unwrap().is_on());
        assert_eq!(fan.lock().unwrap().speed(), FanSpeed::High);

        remote.press_undo();
        assert!(!light.lock().unwrap().is_on());
        assert_eq!(fan.lock().unwrap().speed(), FanSpeed::Off);
    }

    #[test]
    fn test_apply_unknown_device_leaves_remote_untouched() {
        let (registry, _light, _fan, _door) = test_registry();
        let manager = LayoutManager::new(".");
        let mut remote = RemoteControl::new();

        let mut layout = party_layout();
        layout.bind(
            1,
            CommandSpec::LightOn {
                device: "attic".to_string(),
            },
            CommandSpec::LightOff {
                device: "attic".to_string(),
            },
        );

        let result = manager.apply(&layout, &registry, &mut remote);
        assert!(matches!(result, Err(LayoutError::UnknownDevice(name)) if name == "attic"));

        for slot in 0..remote.slot_count() {
            assert_eq!(remote.on_description(slot).unwrap(), "---");
        }
    }

    #[test]
    fn test_apply_out_of_range_slot_is_rejected() {
        let (registry, _light, _fan, _door) = test_registry();
        let manager = LayoutManager::new(".");
        let mut remote = RemoteControl::new();

        let mut layout = Layout::new("bad");
        layout.bind(99, CommandSpec::Empty, CommandSpec::Empty);

        let result = manager.apply(&layout, &registry, &mut remote);
        assert!(matches!(result, Err(LayoutError::InvalidSlot(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = LayoutManager::new(dir.path());

        let result = manager.load_layout(dir.path().join("nope.ron"));
        assert!(matches!(result, Err(LayoutError::Io(_))));
    }
}
