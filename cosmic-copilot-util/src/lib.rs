pub mod category;
pub mod message;
pub mod style;

pub use category::{CopilotCategory, UnrecognizedCategory};
pub use message::CopilotMessage;
pub use style::{CategoryStyle, Color, category_icon, category_style};
