use crate::CopilotCategory;

/// RGBA color (values 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Visual tones a card derives from its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStyle {
    /// Translucent card background wash
    pub background: Color,
    /// Translucent card outline
    pub border: Color,
    /// Body text tone
    pub text: Color,
    /// Opaque fill behind the header icon
    pub icon_badge: Color,
}

/// Accent colors for each category
pub mod category_colors {
    use super::Color;

    /// Suggestion - accent blue
    pub const SUGGESTION: Color = Color::rgb(0.20, 0.47, 1.0);

    /// Warning - amber
    pub const WARNING: Color = Color::rgb(0.96, 0.62, 0.04);

    /// Encouragement - emerald green
    pub const ENCOURAGEMENT: Color = Color::rgb(0.06, 0.73, 0.51);
}

/// Deeper text tone used on the amber wash, where the accent itself is too
/// light to read
const WARNING_TEXT: Color = Color::rgb(0.71, 0.33, 0.04);

/// Get the style tones for a category.
///
/// The match is exhaustive over the closed category set; there is no
/// fallback arm, so a new category cannot ship without a style.
pub fn category_style(category: CopilotCategory) -> CategoryStyle {
    match category {
        CopilotCategory::Suggestion => CategoryStyle {
            background: category_colors::SUGGESTION.with_alpha(0.10),
            border: category_colors::SUGGESTION.with_alpha(0.20),
            text: category_colors::SUGGESTION,
            icon_badge: category_colors::SUGGESTION,
        },
        CopilotCategory::Warning => CategoryStyle {
            background: category_colors::WARNING.with_alpha(0.10),
            border: category_colors::WARNING.with_alpha(0.20),
            text: WARNING_TEXT,
            icon_badge: category_colors::WARNING,
        },
        CopilotCategory::Encouragement => CategoryStyle {
            background: category_colors::ENCOURAGEMENT.with_alpha(0.10),
            border: category_colors::ENCOURAGEMENT.with_alpha(0.20),
            text: category_colors::ENCOURAGEMENT,
            icon_badge: category_colors::ENCOURAGEMENT,
        },
    }
}

/// Get the symbolic icon name shown in the header badge for a category
pub fn category_icon(category: CopilotCategory) -> &'static str {
    match category {
        CopilotCategory::Suggestion => "dialog-information-symbolic",
        CopilotCategory::Warning => "dialog-warning-symbolic",
        CopilotCategory::Encouragement => "emblem-favorite-symbolic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_are_pairwise_distinct() {
        let styles: Vec<_> = CopilotCategory::ALL
            .iter()
            .map(|c| category_style(*c))
            .collect();

        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b, "two categories must not render identically");
            }
        }
    }

    #[test]
    fn test_no_tone_is_fully_transparent() {
        for category in CopilotCategory::ALL {
            let style = category_style(category);
            for tone in [style.background, style.border, style.text, style.icon_badge] {
                assert!(tone.a > 0.0, "{category} has an invisible tone");
            }
        }
    }

    #[test]
    fn test_wash_is_translucent_and_badge_opaque() {
        for category in CopilotCategory::ALL {
            let style = category_style(category);
            assert!(style.background.a < 1.0);
            assert!(style.border.a < 1.0);
            assert!(style.background.a < style.border.a);
            assert!((style.icon_badge.a - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_warning_text_is_readable_on_wash() {
        // Warning body text uses the deeper tone, not the raw accent.
        let style = category_style(CopilotCategory::Warning);
        assert_ne!(style.text, category_colors::WARNING);
        assert!(style.text.r < category_colors::WARNING.r);
    }

    #[test]
    fn test_icons_are_distinct_and_symbolic() {
        let icons: Vec<_> = CopilotCategory::ALL
            .iter()
            .map(|c| category_icon(*c))
            .collect();

        for (i, a) in icons.iter().enumerate() {
            assert!(a.ends_with("-symbolic"));
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_color_constructors() {
        let rgba = Color::new(1.0, 0.5, 0.0, 0.8);
        assert_eq!(rgba.a, 0.8);

        let rgb = Color::rgb(1.0, 0.5, 0.0);
        assert_eq!(rgb.a, 1.0);

        let washed = rgb.with_alpha(0.25);
        assert_eq!(washed.a, 0.25);
        assert_eq!(washed.r, rgb.r);
    }
}
