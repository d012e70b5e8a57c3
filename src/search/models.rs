use serde::{Deserialize, Serialize};

/// A recipe summary shown to the user for selection.
///
/// `diet` is the corpus row's raw label, not the normalized category; the
/// raw spelling is what the user sees. `time` is absent when the corpus
/// field is not a clean integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub time: Option<u32>,
    pub cuisine: String,
    pub diet: String,
}

/// Ranked candidates plus a human-readable summary of the query fields
/// that were actually used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub candidates: Vec<Candidate>,
    pub rationale: String,
}
