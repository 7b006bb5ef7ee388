// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, StarRating, ...)
// - header.rs: Site header with the live search box
// - hero.rs: Landing banner
// - media_card.rs: Media cards for grids and the search dropdown
// - comments.rs: Comment list and interactive rating

pub mod comments;
pub mod common;
pub mod header;
pub mod hero;
pub mod media_card;

// Re-export commonly used components for convenience
pub use comments::*;
pub use common::*;
pub use header::*;
pub use hero::*;
pub use media_card::*;
