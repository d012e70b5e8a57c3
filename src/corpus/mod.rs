pub mod loader;
pub mod models;

pub use loader::load_corpus;
pub use models::{DietClass, RecipeDetails, RecipeRecord};
