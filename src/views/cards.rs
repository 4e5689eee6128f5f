pub mod items;
mod render;

pub use render::{draw_cover, media_card, CARD_WIDTH};
