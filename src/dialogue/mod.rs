pub mod engine;
pub mod models;
pub mod replies;
pub mod selection;

pub use engine::next_turn;
pub use models::{DialogueState, SessionMemory, TurnOutcome};
pub use selection::{best_fuzzy_match, pick_from_candidates};
