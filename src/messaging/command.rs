// Button events - messages fed to the dispatcher

/// A single press on the remote's face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The "on" button of a slot
    On(usize),
    /// The "off" button of a slot
    Off(usize),
    /// The single-level undo button
    Undo,
    /// Stop the dispatch loop
    Quit,
}
