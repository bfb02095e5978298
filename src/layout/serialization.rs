// Serialization utilities for layout persistence

use crate::layout::manager::LayoutError;
use crate::layout::types::Layout;
use ron::{from_str as ron_from_str, ser::to_string_pretty as ron_to_string_pretty};

/// Serialize a layout to RON format
pub fn serialize_to_ron(layout: &Layout) -> Result<String, LayoutError> {
    ron_to_string_pretty(layout, ron::ser::PrettyConfig::default()).map_err(|e| {
        LayoutError::SerializationError(format!("Failed to serialize to RON: {}", e))
    })
}

/// Deserialize a layout from RON format
pub fn deserialize_from_ron(ron_data: &str) -> Result<Layout, LayoutError> {
    ron_from_str(ron_data).map_err(|e| {
        LayoutError::SerializationError(format!("Failed to deserialize from RON: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::ceiling_fan::FanSpeed;
    use crate::layout::types::CommandSpec;

    #[test]
    fn test_ron_round_trip() {
        let mut layout = Layout::new("party");
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

        let ron_data = serialize_to_ron(&layout).unwrap();
        let restored = deserialize_from_ron(&ron_data).unwrap();

        assert_eq!(restored.metadata.name, "party");
        assert_eq!(restored.metadata.id, layout.metadata.id);
        assert_eq!(restored.bindings, layout.bindings);
    }

    #[test]
    fn test_invalid_ron_is_rejected() {
        let result = deserialize_from_ron("not a layout at all (");
        assert!(matches!(result, Err(LayoutError::SerializationError(_))));
    }
}
