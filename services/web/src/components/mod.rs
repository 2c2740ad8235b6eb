//! Reusable text views

pub mod navbar;
pub mod recipe_card;
pub mod tag_filter;

pub use navbar::Navbar;
pub use recipe_card::RecipeCard;
pub use tag_filter::TagFilter;
