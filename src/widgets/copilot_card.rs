use super::{category_badge, tone};
use crate::constants::*;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Length};
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, icon, text};
use cosmic_copilot_config::CopilotConfig;
use cosmic_copilot_util::{CategoryStyle, CopilotMessage, category_style};

/// Configuration for the co-pilot card
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Width of the card in pixels
    pub width: f32,
    /// Whether the action control may be offered at all
    pub show_actions: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: CARD_WIDTH,
            show_actions: true,
        }
    }
}

impl CardConfig {
    /// Create a CardConfig from CopilotConfig
    pub fn from_copilot_config(config: &CopilotConfig) -> Self {
        Self {
            width: CARD_WIDTH,
            show_actions: config.show_actions,
        }
    }
}

/// Creates a co-pilot card widget
///
/// This card has the following structure:
/// ```text
/// ┌──────────────────────────────────────────┐
/// │ ┌──────┐  AI CO-PILOT              [X]   │ Header
/// │ │Badge │  Message text, shown in full    │ Body
/// │ └──────┘  [Action]                       │ Action (conditional)
/// └──────────────────────────────────────────┘
/// ```
///
/// The dismiss button is always present. The action button exists only
/// when the message carries a label AND `on_action` is supplied; either
/// one missing suppresses it entirely. Pressing the action never affects
/// visibility; hiding the card is the owner's job after `on_dismiss`.
pub fn copilot_card<Message: 'static + Clone>(
    message: &CopilotMessage,
    config: &CardConfig,
    on_dismiss: Message,
    on_action: Option<Message>,
) -> Element<'static, Message> {
    let style = category_style(message.category);

    let header_label = text::caption(fl!("copilot-header")).width(Length::Fill);

    let close_button = button::custom(
        icon::from_name("window-close-symbolic")
            .size(ICON_SIZE_SMALL)
            .symbolic(true),
    )
    .on_press(on_dismiss)
    .class(cosmic::theme::Button::Text);

    let header = row![header_label, close_button]
        .spacing(8)
        .align_y(Alignment::Center);

    // The full body text; truncation would hide coaching content
    let body = text::body(message.text.clone())
        .width(Length::Fill)
        .class(cosmic::theme::Text::Color(tone(style.text)));

    let mut content = column![header, body].spacing(4);

    if message.shows_action(on_action.is_some()) {
        if let (Some(label), Some(on_action)) = (message.action_label.clone(), on_action) {
            let action_button: Element<'static, Message> = button::text(label)
                .on_press(on_action)
                .class(cosmic::theme::Button::Link)
                .padding([6, 12])
                .into();
            content = content.push(action_button);
        }
    }

    let layout = row![category_badge(message.category), content]
        .spacing(12)
        .align_y(Alignment::Start);

    container(layout)
        .padding(CARD_PADDING)
        .width(Length::Fixed(config.width))
        .class(card_container_class(style))
        .into()
}

/// Card container styling from the category tones
fn card_container_class(style: CategoryStyle) -> cosmic::theme::Container<'static> {
    cosmic::theme::Container::custom(move |_theme| cosmic::iced_widget::container::Style {
        background: Some(Background::Color(tone(style.background))),
        border: Border {
            color: tone(style.border),
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_copilot_util::CopilotCategory;

    #[test]
    fn test_card_config_follows_copilot_config() {
        let mut config = CopilotConfig::default();
        assert!(CardConfig::from_copilot_config(&config).show_actions);

        config.show_actions = false;
        let card_config = CardConfig::from_copilot_config(&config);
        assert!(!card_config.show_actions);
        assert_eq!(card_config.width, CARD_WIDTH);
    }

    #[test]
    fn test_card_builds_without_callbacks() {
        // Warning card, no action: only the dismiss control applies
        let message = CopilotMessage::new(CopilotCategory::Warning, "You are behind schedule");
        let _ = copilot_card::<()>(&message, &CardConfig::default(), (), None);
    }

    #[test]
    fn test_card_builds_with_action() {
        let message =
            CopilotMessage::new(CopilotCategory::Suggestion, "Try flashcards").with_action("Try now");
        let _ = copilot_card::<()>(&message, &CardConfig::default(), (), Some(()));
    }

    #[test]
    fn test_card_builds_with_label_but_no_handler() {
        // actionLabel set, no handler supplied: the control is suppressed
        let message =
            CopilotMessage::new(CopilotCategory::Encouragement, "Great job!").with_action("Continue");
        assert!(!message.shows_action(false));
        let _ = copilot_card::<()>(&message, &CardConfig::default(), (), None);
    }
}
