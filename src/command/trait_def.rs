// Command trait definition

use std::sync::{Arc, Mutex};

/// Shared handle to a command.
///
/// Slots, the undo register and macro sub-commands may all alias the same
/// command instance; the snapshot a stateful command writes during execute()
/// must be the one its undo() later reads, so commands are shared rather
/// than owned by any single holder.
pub type SharedCommand = Arc<Mutex<dyn Command>>;

/// Wrap a command into a [`SharedCommand`] handle.
pub fn shared<C: Command + 'static>(command: C) -> SharedCommand {
    Arc::new(Mutex::new(command))
}

/// Trait for reversible remote-control commands
///
/// execute() and undo() are total: commands have no failure mode, and undo()
/// before any execute() must be a safe no-op. The only error in the core
/// belongs to the invoker (slot validation), not to commands.
///
/// # Example
/// ```
/// use myhome_remote::command::trait_def::Command;
///
/// struct Chime {
///     rung: bool,
/// }
///
/// impl Command for Chime {
///     fn execute(&mut self) {
///         self.rung = true;
///     }
///
///     fn undo(&mut self) {
///         self.rung = false;
///     }
///
///     fn description(&self) -> String {
///         "door chime".to_string()
///     }
/// }
/// ```
pub trait Command: Send {
    /// Perform the forward action on the bound device(s).
    ///
    /// Stateful commands snapshot the device's current state here, before
    /// mutating it, so undo() can restore the exact prior level.
    fn execute(&mut self);

    /// Reverse the most recent execute().
    ///
    /// Uses the stored snapshot (stateful commands) or the fixed inverse
    /// operation (simple commands). Calling undo() with no preceding
    /// execute() is permitted and must not misbehave.
    fn undo(&mut self);

    /// Human-readable label for this command
    ///
    /// Attached as a field at construction time and read generically through
    /// this trait; callers never inspect a command's concrete type to name it.
    fn description(&self) -> String;
}
