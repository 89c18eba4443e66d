pub mod category_badge;
pub mod copilot_card;

pub use category_badge::*;
pub use copilot_card::*;

/// Convert a palette tone into an iced color
pub(crate) fn tone(color: cosmic_copilot_util::Color) -> cosmic::iced::Color {
    cosmic::iced::Color::from_rgba(color.r, color.g, color.b, color.a)
}
