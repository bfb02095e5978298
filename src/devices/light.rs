// Light - a named two-state device

/// A simple on/off light identified by its location (e.g. "living room").
pub struct Light {
    location: String,
    on: bool,
}

impl Light {
    /// Create a new light, initially off
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            on: false,
        }
    }

    pub fn on(&mut self) {
        self.on = true;
    }

    pub fn off(&mut self) {
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
