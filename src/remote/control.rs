// RemoteControl - slot bank and single-level undo register

use crate::command::commands::NoCommand;
use crate::command::trait_def::{SharedCommand, shared};
use std::fmt;
use std::sync::Arc;

/// Default number of addressable slots
pub const SLOT_COUNT: usize = 7;

/// Errors reported by the slot bank
///
/// Out-of-range slots are recoverable: the bank's state is left unchanged and
/// subsequent valid presses behave normally.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("invalid slot {slot}: this remote has {slots} slots")]
    InvalidSlot { slot: usize, slots: usize },
}

/// Slot bank dispatching button presses to bound commands
///
/// Each slot holds an on-command and an off-command, both defaulting to
/// NoCommand until configured. Pressing a button executes the bound command
/// and records it in the undo register; pressing undo reverses whatever was
/// recorded last. The register holds exactly one command and is only
/// rewritten by presses, never by undo itself.
pub struct RemoteControl {
    on_commands: Vec<SharedCommand>,
    off_commands: Vec<SharedCommand>,
    undo_command: SharedCommand,
}

impl RemoteControl {
    /// Create a remote with the default slot count
    pub fn new() -> Self {
        Self::with_slots(SLOT_COUNT)
    }

    /// Create a remote with a custom slot count
    pub fn with_slots(slots: usize) -> Self {
        // A single NoCommand instance backs every empty binding
        let no_command = shared(NoCommand);
        Self {
            on_commands: (0..slots).map(|_| Arc::clone(&no_command)).collect(),
            off_commands: (0..slots).map(|_| Arc::clone(&no_command)).collect(),
            undo_command: no_command,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.on_commands.len()
    }

    fn check_slot(&self, slot: usize) -> Result<(), RemoteError> {
        if slot >= self.slot_count() {
            return Err(RemoteError::InvalidSlot {
                slot,
                slots: self.slot_count(),
            });
        }
        Ok(())
    }

    /// Bind a command pair to a slot, replacing any previous binding
    ///
    /// The displaced pair is simply dropped; nothing else is cleaned up.
    ///
    /// # Errors
    /// Returns `InvalidSlot` without mutating anything if `slot` is out of
    /// range.
    pub fn set_command(
        &mut self,
        slot: usize,
        on_command: SharedCommand,
        off_command: SharedCommand,
    ) -> Result<(), RemoteError> {
        self.check_slot(slot)?;
        self.on_commands[slot] = on_command;
        self.off_commands[slot] = off_command;
        Ok(())
    }

    /// Execute the slot's on-command and make it the undo target
    pub fn press_on(&mut self, slot: usize) -> Result<(), RemoteError> {
        self.check_slot(slot)?;
        let command = Arc::clone(&self.on_commands[slot]);
        if let Ok(mut command) = command.lock() {
            command.execute();
        }
        self.undo_command = command;
        Ok(())
    }

    /// Execute the slot's off-command and make it the undo target
    pub fn press_off(&mut self, slot: usize) -> Result<(), RemoteError> {
        self.check_slot(slot)?;
        let command = Arc::clone(&self.off_commands[slot]);
        if let Ok(mut command) = command.lock() {
            command.execute();
        }
        self.undo_command = command;
        Ok(())
    }

    /// Undo the most recently executed command
    ///
    /// Never fails: the register always holds at least NoCommand. The
    /// register is not rewritten here, so pressing undo repeatedly re-invokes
    /// undo() on the same command each time; idempotence is that command's
    /// responsibility.
    pub fn press_undo(&mut self) {
        if let Ok(mut command) = self.undo_command.lock() {
            command.undo();
        }
    }

    /// Label of the command the undo button would reverse
    pub fn undo_description(&self) -> String {
        describe(&self.undo_command)
    }

    /// Label of a slot's bound on-command
    pub fn on_description(&self, slot: usize) -> Result<String, RemoteError> {
        self.check_slot(slot)?;
        Ok(describe(&self.on_commands[slot]))
    }

    /// Label of a slot's bound off-command
    pub fn off_description(&self, slot: usize) -> Result<String, RemoteError> {
        self.check_slot(slot)?;
        Ok(describe(&self.off_commands[slot]))
    }
}

fn describe(command: &SharedCommand) -> String {
    match command.lock() {
        Ok(command) => command.description(),
        Err(_) => String::new(),
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RemoteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ Remote Control -------")?;
        for slot in 0..self.slot_count() {
            writeln!(
                f,
                "[slot {}] {:<24} {:<24}",
                slot,
                describe(&self.on_commands[slot]),
                describe(&self.off_commands[slot]),
            )?;
        }
        writeln!(f, "[undo  ] {}", self.undo_description())?;
        write!(f, "-----------------------------")
    }
}
