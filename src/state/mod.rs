pub mod cards;

pub use cards::{CardStack, CopilotCard};
