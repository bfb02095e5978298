// MyHome Remote - Library exports for tests and the demo binary

pub mod command;
pub mod devices;
pub mod layout;
pub mod messaging;
pub mod remote;

// Re-export commonly used types for convenience
pub use command::{
    Command, GarageDoorDownCommand, GarageDoorUpCommand, LightOffCommand, LightOnCommand,
    MacroCommand, NoCommand, SetFanSpeedCommand, SharedCommand, shared,
};
pub use devices::{CeilingFan, FanSpeed, GarageDoor, Light};
pub use layout::{CommandSpec, DeviceRegistry, Layout, LayoutManager};
pub use messaging::{
    ButtonEvent, Dispatcher, Notification, create_event_channel, create_notification_channel,
};
pub use remote::{RemoteControl, RemoteError, SLOT_COUNT};
