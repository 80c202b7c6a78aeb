//! Aggregate ratings for bundles and circuits limited by their weakest member.

pub mod item;
pub mod table;

pub use item::RatingItem;
pub use table::RatingTable;
