pub mod cache;
pub mod engine;
pub mod models;
pub mod tfidf;

pub use cache::{CacheStats, SearchCache};
pub use engine::RecipeRanker;
pub use models::{Candidate, SearchResponse};
pub use tfidf::TfidfIndex;
