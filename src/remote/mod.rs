// Remote control invoker - slot bank with single-level undo

pub mod control;

pub use control::{RemoteControl, RemoteError, SLOT_COUNT};
