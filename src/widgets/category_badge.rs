use super::tone;
use crate::constants::{BADGE_ICON_SIZE, BADGE_RADIUS, BADGE_SIZE};
use cosmic::Element;
use cosmic::iced::{Background, Border, Length};
use cosmic::widget::{container, icon};
use cosmic_copilot_util::{CopilotCategory, category_icon, category_style};

/// Create the tinted icon badge shown in the card header
///
/// The badge fill is the opaque category accent, with the symbolic icon
/// drawn on top of it.
pub fn category_badge<Message: 'static>(category: CopilotCategory) -> Element<'static, Message> {
    let style = category_style(category);

    let glyph = icon::from_name(category_icon(category))
        .size(BADGE_ICON_SIZE)
        .symbolic(true)
        .icon();

    container(glyph)
        .width(Length::Fixed(BADGE_SIZE))
        .height(Length::Fixed(BADGE_SIZE))
        .center_x(Length::Fixed(BADGE_SIZE))
        .center_y(Length::Fixed(BADGE_SIZE))
        .class(cosmic::theme::Container::custom(move |_theme| {
            cosmic::iced_widget::container::Style {
                background: Some(Background::Color(tone(style.icon_badge))),
                border: Border {
                    radius: BADGE_RADIUS.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }))
        .into()
}
