use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::nlu::QueryKey;
use crate::search::Candidate;

/// Where a session stands in the search / selection / confirmation loop.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// Waiting for a search request.
    #[default]
    Idle,
    /// A candidate list was just shown; waiting for a pick.
    AwaitSelection,
    /// A recipe card was shown; waiting for yes/no.
    Confirm,
    /// Terminal; only reachable from Confirm on an affirmative.
    Closed,
}

/// Per-session carry-over state. Owned by the caller's session layer and
/// passed through every turn by value; the engine never mutates shared
/// structures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMemory {
    /// Comparable subset of the last searched query.
    pub last_query: Option<QueryKey>,
    /// Candidates from the last successful search, in ranked order.
    pub last_candidates: Vec<Candidate>,
    /// Title the user most recently selected, if any.
    pub chosen_title: Option<String>,
}

/// Everything one turn produces.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub state: DialogueState,
    pub memory: SessionMemory,
    pub reply: String,
}
