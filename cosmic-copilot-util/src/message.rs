use crate::CopilotCategory;
use serde::{Deserialize, Serialize};

/// A co-pilot message supplied by the host application.
///
/// The message is immutable once created; the applet never edits it, only
/// decides how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CopilotMessage {
    /// Determines the visual treatment of the card
    pub category: CopilotCategory,
    /// Body text, rendered in full
    pub text: String,
    /// Label for the optional secondary action
    pub action_label: Option<String>,
}

impl CopilotMessage {
    pub fn new(category: CopilotCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
            action_label: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Whether the action control should be rendered.
    ///
    /// True only when the message carries an action label AND the caller
    /// supplied a handler for it. Either one missing suppresses the control
    /// entirely.
    pub fn shows_action(&self, action_supplied: bool) -> bool {
        self.action_label.is_some() && action_supplied
    }

    /// Rough heap size of the message, for history memory budgeting
    pub fn estimated_size(&self) -> usize {
        let mut size = std::mem::size_of::<Self>();
        size += self.text.len();
        if let Some(label) = &self.action_label {
            size += label.len();
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let message = CopilotMessage::new(CopilotCategory::Warning, "You are behind schedule");

        assert_eq!(message.category, CopilotCategory::Warning);
        assert_eq!(message.text, "You are behind schedule");
        assert_eq!(message.action_label, None);
    }

    #[test]
    fn test_message_with_action() {
        let message =
            CopilotMessage::new(CopilotCategory::Suggestion, "Try flashcards").with_action("Try now");

        assert_eq!(message.action_label.as_deref(), Some("Try now"));
    }

    #[test]
    fn test_shows_action_requires_both() {
        let with_label =
            CopilotMessage::new(CopilotCategory::Suggestion, "Try flashcards").with_action("Try now");
        let without_label = CopilotMessage::new(CopilotCategory::Suggestion, "Try flashcards");

        assert!(with_label.shows_action(true));
        assert!(!with_label.shows_action(false));
        assert!(!without_label.shows_action(true));
        assert!(!without_label.shows_action(false));
    }

    #[test]
    fn test_message_clone_and_equality() {
        let message =
            CopilotMessage::new(CopilotCategory::Encouragement, "Great job!").with_action("Continue");
        let cloned = message.clone();
        assert_eq!(message, cloned);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let message =
            CopilotMessage::new(CopilotCategory::Suggestion, "Review chapter 3").with_action("Open");

        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: CopilotMessage = serde_json::from_str(&serialized).unwrap();

        assert_eq!(message, deserialized);
    }

    #[test]
    fn test_message_deserialization_rejects_unknown_category() {
        let json = r#"{"category": "urgent", "text": "hello", "action_label": null}"#;
        assert!(serde_json::from_str::<CopilotMessage>(json).is_err());
    }

    #[test]
    fn test_message_accepts_empty_text() {
        // Text content is not validated; an empty body is the caller's choice.
        let message = CopilotMessage::new(CopilotCategory::Suggestion, "");
        assert_eq!(message.text, "");
    }

    #[test]
    fn test_estimated_size_grows_with_content() {
        let short = CopilotMessage::new(CopilotCategory::Suggestion, "a");
        let long = CopilotMessage::new(CopilotCategory::Suggestion, "a".repeat(1024));

        assert!(long.estimated_size() > short.estimated_size());
        assert!(long.estimated_size() >= 1024);

        let with_action = short.clone().with_action("Continue");
        assert!(with_action.estimated_size() > short.estimated_size());
    }
}
