//! Contract tests for the co-pilot card data model.
//!
//! These follow the display contract end to end at the data level: the
//! category set is closed, every category maps to a distinct style, and the
//! action control only exists when both the label and a handler are present.

use cosmic_copilot_util::{
    CopilotCategory, CopilotMessage, category_icon, category_style,
};

#[test]
fn warning_card_without_callbacks() {
    // {category: "warning", text: "You are behind schedule"}, no callbacks
    let message: CopilotMessage = serde_json::from_str(
        r#"{"category": "warning", "text": "You are behind schedule", "action_label": null}"#,
    )
    .unwrap();

    assert_eq!(message.category, CopilotCategory::Warning);
    // No action control in any handler configuration
    assert!(!message.shows_action(false));
    assert!(!message.shows_action(true));

    let style = category_style(message.category);
    assert_ne!(style, category_style(CopilotCategory::Suggestion));
    assert_ne!(style, category_style(CopilotCategory::Encouragement));
}

#[test]
fn suggestion_card_with_action_and_handler() {
    // {category: "suggestion", text: "Try flashcards", actionLabel: "Try now"}
    let message =
        CopilotMessage::new(CopilotCategory::Suggestion, "Try flashcards").with_action("Try now");

    assert!(message.shows_action(true));
    assert_eq!(message.action_label.as_deref(), Some("Try now"));
}

#[test]
fn encouragement_card_with_label_but_no_handler() {
    // actionLabel set, no onAction supplied: the control stays hidden
    let message =
        CopilotMessage::new(CopilotCategory::Encouragement, "Great job!").with_action("Continue");

    assert!(!message.shows_action(false));
}

#[test]
fn every_category_has_a_style_and_an_icon() {
    for category in CopilotCategory::ALL {
        let style = category_style(category);
        assert!(style.background.a > 0.0);
        assert!(!category_icon(category).is_empty());
    }
}

#[test]
fn category_set_is_closed_at_every_boundary() {
    for name in ["info", "error", "URGENT", "warning "] {
        assert!(name.parse::<CopilotCategory>().is_err());

        let json = format!(r#"{{"category": "{name}", "text": "x", "action_label": null}}"#);
        assert!(serde_json::from_str::<CopilotMessage>(&json).is_err());
    }
}

#[test]
fn wire_names_roundtrip_through_serde() {
    for category in CopilotCategory::ALL {
        let message = CopilotMessage::new(category, "body").with_action("go");
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains(category.as_str()));

        let back: CopilotMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
