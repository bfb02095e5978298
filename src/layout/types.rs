// Types for layout persistence

use crate::devices::ceiling_fan::FanSpeed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Layout format version information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutVersion {
    pub major: u32,
    pub minor: u32,
}

impl LayoutVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn current() -> Self {
        Self::new(1, 0)
    }
}

impl std::fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Layout metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    /// Layout identifier
    pub id: Uuid,
    /// Layout name; also the file stem on disk
    pub name: String,
    /// Version of the layout format
    pub version: LayoutVersion,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
    /// Optional free-form description
    pub description: Option<String>,
}

impl LayoutMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            version: LayoutVersion::current(),
            created: now,
            modified: now,
            description: None,
        }
    }

    /// Bump the modification timestamp
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// Declarative description of a command
///
/// Layouts store these instead of live commands; a live command is rebuilt
/// against the device registry when the layout is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CommandSpec {
    /// Empty binding (NoCommand)
    Empty,
    LightOn { device: String },
    LightOff { device: String },
    GarageUp { device: String },
    GarageDown { device: String },
    Fan { device: String, speed: FanSpeed },
    Macro { label: String, steps: Vec<CommandSpec> },
}

/// One slot's bound command pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotBinding {
    pub slot: usize,
    pub on: CommandSpec,
    pub off: CommandSpec,
}

/// A complete saved remote configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub metadata: LayoutMetadata,
    pub bindings: Vec<SlotBinding>,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: LayoutMetadata::new(name),
            bindings: Vec::new(),
        }
    }

    /// Add a slot binding, replacing any existing binding for that slot
    pub fn bind(&mut self, slot: usize, on: CommandSpec, off: CommandSpec) {
        self.bindings.retain(|b| b.slot != slot);
        self.bindings.push(SlotBinding { slot, on, off });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        assert_eq!(LayoutVersion::current().to_string(), "1.0");
        assert_eq!(LayoutVersion::new(2, 3).to_string(), "2.3");
    }

    #[test]
    fn test_metadata_new() {
        let metadata = LayoutMetadata::new("evening");

        assert_eq!(metadata.name, "evening");
        assert_eq!(metadata.version, LayoutVersion::current());
        assert_eq!(metadata.created, metadata.modified);
        assert!(metadata.description.is_none());
    }

    #[test]
    fn test_bind_replaces_existing_slot() {
        let mut layout = Layout::new("test");

        layout.bind(
            0,
            CommandSpec::LightOn {
                device: "living room".to_string(),
            },
            CommandSpec::LightOff {
                device: "living room".to_string(),
            },
        );
        layout.bind(0, CommandSpec::Empty, CommandSpec::Empty);

        assert_eq!(layout.bindings.len(), 1);
        assert_eq!(layout.bindings[0].on, CommandSpec::Empty);
    }
}
