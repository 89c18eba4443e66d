use cosmic_config::{CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

pub const ID: &str = "dev.ailearn.CosmicCoPilot";

/// Screen edge the co-pilot surface is anchored to
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
    Right,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, CosmicConfigEntry)]
#[version = 1]
pub struct CopilotConfig {
    /// Suppress the card surface entirely while the learner asked not to be coached
    pub do_not_disturb: bool,
    pub anchor: Anchor,
    /// The maximum number of co-pilot cards rendered at once.
    pub max_cards: u32,

    /// Whether action buttons are offered on cards that carry one (default: true)
    #[serde(default = "default_true")]
    pub show_actions: bool,
    /// Whether card entry/exit animations are enabled (default: true)
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            do_not_disturb: false,
            anchor: Anchor::default(),
            max_cards: 3,
            show_actions: default_true(),
            enable_animations: default_true(),
        }
    }
}

// Default value helpers for serde
const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CopilotConfig::default();

        assert!(!config.do_not_disturb);
        assert_eq!(config.anchor, Anchor::Top);
        assert_eq!(config.max_cards, 3);
        assert!(config.show_actions);
        assert!(config.enable_animations);
    }

    #[test]
    fn test_config_serialization() {
        let config = CopilotConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("do_not_disturb"));
        assert!(json.contains("anchor"));
        assert!(json.contains("max_cards"));
        assert!(json.contains("show_actions"));
        assert!(json.contains("enable_animations"));
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        // A config file written before the presentation options existed
        let old_config_json = r#"{
            "do_not_disturb": true,
            "anchor": "Bottom",
            "max_cards": 5
        }"#;

        let config: CopilotConfig = serde_json::from_str(old_config_json).unwrap();

        assert!(config.do_not_disturb);
        assert_eq!(config.anchor, Anchor::Bottom);
        assert_eq!(config.max_cards, 5);

        // Late-added fields fall back to their defaults
        assert!(config.show_actions);
        assert!(config.enable_animations);
    }

    #[test]
    fn test_config_deserialization_full() {
        let full_config_json = r#"{
            "do_not_disturb": false,
            "anchor": "TopRight",
            "max_cards": 1,
            "show_actions": false,
            "enable_animations": false
        }"#;

        let config: CopilotConfig = serde_json::from_str(full_config_json).unwrap();

        assert_eq!(config.anchor, Anchor::TopRight);
        assert_eq!(config.max_cards, 1);
        assert!(!config.show_actions);
        assert!(!config.enable_animations);
    }

    #[test]
    fn test_default_helpers() {
        assert!(default_true());
    }
}
