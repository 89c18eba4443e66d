use crate::subscriptions::copilot;
use cosmic::surface;
use cosmic_copilot_config::CopilotConfig;
use cosmic_time::Instant;

/// Application message types
#[derive(Debug, Clone)]
pub enum Message {
    /// Feed event from the session-bus subscription
    Copilot(copilot::Event),
    /// Card dismissed by the learner
    Dismissed(u32),
    /// Action button pressed on a card
    ActionClicked(u32),
    /// Configuration updated
    Config(CopilotConfig),
    /// Animation frame update
    Frame(Instant),
    /// No-op message
    Ignore,
    /// Surface action
    #[allow(dead_code)]
    Surface(surface::Action),
}
