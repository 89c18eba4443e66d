// Constants module for cosmic-copilot
// Centralizes magic numbers for better maintainability

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// UI Layout Constants
// ============================================================================

/// Width of co-pilot cards in pixels
pub(crate) const CARD_WIDTH: f32 = 380.0;

/// Minimum width for co-pilot cards
pub(crate) const CARD_MIN_WIDTH: f32 = 300.0;

/// Maximum height for the card surface
pub(crate) const CARD_MAX_HEIGHT: f32 = 1920.0;

/// Margin around the card surface (pixels)
pub(crate) const SURFACE_MARGIN: i32 = 8;

/// Minimum width for autosize mode
pub(crate) const AUTOSIZE_MIN_WIDTH: f32 = 200.0;

/// Minimum height for autosize mode
pub(crate) const AUTOSIZE_MIN_HEIGHT: f32 = 100.0;

/// Padding inside co-pilot cards
pub(crate) const CARD_PADDING: u16 = 12;

/// Corner radius of co-pilot cards
pub(crate) const CARD_RADIUS: f32 = 12.0;

// ============================================================================
// Icon Size Constants
// ============================================================================

/// Small icon size (dismiss button)
pub(crate) const ICON_SIZE_SMALL: u16 = 16;

/// Side length of the category icon badge
pub(crate) const BADGE_SIZE: f32 = 40.0;

/// Icon size inside the badge
pub(crate) const BADGE_ICON_SIZE: u16 = 20;

/// Corner radius of the badge
pub(crate) const BADGE_RADIUS: f32 = 8.0;

// ============================================================================
// Card Queue Constants
// ============================================================================

/// Maximum memory budget for hidden cards; text-only cards are tiny, so
/// this keeps a long history without unbounded growth
pub(crate) const MAX_HIDDEN_MEMORY: usize = 1024 * 1024;

/// Initial capacity for the visible card vector
pub(crate) const INITIAL_CARDS_CAPACITY: usize = 8;

// ============================================================================
// Channel and Rate Limiting Constants
// ============================================================================

/// Buffer size for the co-pilot feed channel
pub(crate) const CHANNEL_BUFFER_SIZE: usize = 100;

/// Maximum Show calls accepted per minute
pub(crate) const SHOW_LIMIT_PER_MINUTE: u32 = 30;
