// Garage door - a two-state door

/// A garage door, initially closed.
pub struct GarageDoor {
    open: bool,
}

impl GarageDoor {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn up(&mut self) {
        self.open = true;
    }

    pub fn down(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for GarageDoor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_starts_closed() {
        let door = GarageDoor::new();
        assert!(!door.is_open());
    }

    #[test]
    fn test_door_up_down() {
        let mut door = GarageDoor::new();

        door.up();
        assert!(door.is_open());

        door.down();
        assert!(!door.is_open());
    }
}
