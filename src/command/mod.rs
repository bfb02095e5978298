// Command pattern core - reversible remote-control commands
//
// Every schedulable unit of work implements the Command trait: execute(),
// undo(), description().
//
// Architecture:
// - Command trait: the contract slots and the undo register dispatch through
// - Simple commands (light, garage door): undo is the fixed inverse operation
// - SetFanSpeedCommand: snapshots the fan's level on execute so undo can
//   restore a multi-level receiver
// - MacroCommand: executes a sequence forward, undoes it in reverse
// - NoCommand: no-op filling every unconfigured slot and the undo register
//
// Commands are shared as Arc<Mutex<dyn Command>> because a slot, the undo
// register and a macro may all point at the same instance; the snapshot
// written by execute() has to be the one undo() reads.

pub mod commands;
pub mod trait_def;

pub use commands::{
    GarageDoorDownCommand, GarageDoorUpCommand, LightOffCommand, LightOnCommand, MacroCommand,
    NoCommand, SetFanSpeedCommand,
};
pub use trait_def::{Command, SharedCommand, shared};
