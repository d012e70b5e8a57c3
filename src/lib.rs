pub mod core;
pub mod corpus;
pub mod dialogue;
pub mod nlu;
pub mod search;
pub mod utils;

pub use crate::core::config::SousChefConfig;
pub use crate::core::error::{Result, SousChefError};
pub use crate::corpus::{DietClass, RecipeDetails, RecipeRecord, load_corpus};
pub use crate::dialogue::{DialogueState, SessionMemory, TurnOutcome, next_turn};
pub use crate::nlu::{QueryKey, StructuredQuery, parse};
pub use crate::search::{Candidate, RecipeRanker, SearchResponse};

/// How many candidates a search returns by default.
pub const DEFAULT_TOP_K: usize = 5;

/// Similarity cutoff for fuzzy dish-name selection.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.6;

/// Query substituted when an utterance carries no ingredients, diet or cuisine.
pub const DEFAULT_FALLBACK_QUERY: &str = "easy quick dinner";

/// Weight of the cosine similarity in the blended score.
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.85;

/// Weight of the ingredient-overlap boost in the blended score.
pub const DEFAULT_OVERLAP_WEIGHT: f64 = 0.15;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
