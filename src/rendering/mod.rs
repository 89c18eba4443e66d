pub mod cards;

pub use cards::view_cards;
