use crate::handlers::Message;
use crate::state::CardStack;
use crate::widgets::{CardConfig, copilot_card};
use cosmic::Element;
use cosmic_copilot_config::CopilotConfig;

/// Build the card elements for the surface, newest first
///
/// At most `max_cards` visible cards are rendered; hidden cards produce no
/// element at all, so a dismissed card leaves the layout and the
/// accessibility tree entirely.
///
/// `show_actions = false` withholds the action handler, which suppresses
/// the action control the same way an owner that supplied no handler would.
pub fn view_cards(stack: &CardStack, config: &CopilotConfig) -> Vec<Element<'static, Message>> {
    let card_config = CardConfig::from_copilot_config(config);

    stack
        .visible()
        .iter()
        .rev()
        .take(config.max_cards as usize)
        .map(|card| {
            let on_action = card_config
                .show_actions
                .then(|| Message::ActionClicked(card.id));

            copilot_card(
                &card.message,
                &card_config,
                Message::Dismissed(card.id),
                on_action,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CopilotCard;
    use cosmic_copilot_util::{CopilotCategory, CopilotMessage};

    fn stack_of(n: u32) -> CardStack {
        let mut stack = CardStack::new();
        for id in 1..=n {
            stack.push(CopilotCard::new(
                id,
                CopilotMessage::new(CopilotCategory::Suggestion, format!("card {id}")),
            ));
        }
        stack
    }

    #[test]
    fn test_renders_at_most_max_cards() {
        let stack = stack_of(5);
        let config = CopilotConfig {
            max_cards: 3,
            ..Default::default()
        };

        assert_eq!(view_cards(&stack, &config).len(), 3);
    }

    #[test]
    fn test_dismissed_cards_produce_no_elements() {
        let mut stack = stack_of(2);
        stack.dismiss(1);
        stack.dismiss(2);

        assert!(view_cards(&stack, &CopilotConfig::default()).is_empty());
    }
}
