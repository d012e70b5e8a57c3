use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::corpus::DietClass;

/// Normalized representation of one user utterance's intent and entities.
///
/// Every field is independently optional; any combination (including
/// all-absent) is valid and the dialogue engine must tolerate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredQuery {
    /// Original text as typed.
    pub raw: String,

    pub is_greeting: bool,
    pub is_affirmative: bool,
    pub is_negative: bool,

    /// 1-based list position, set only when the utterance is purely one or
    /// two digits.
    pub selection_index: Option<usize>,
    /// Short free-text dish name; fuzzy matching is deferred to the
    /// dialogue engine.
    pub selection_name: Option<String>,

    pub diet: Option<DietClass>,
    pub cuisine: Option<String>,
    pub time_limit_minutes: Option<u32>,

    /// Normalized ingredient tokens, deduplicated, first-seen order.
    pub ingredients: Vec<String>,
    pub excluded: BTreeSet<String>,
}

impl StructuredQuery {
    pub fn empty(raw: &str) -> Self {
        Self { raw: raw.to_string(), ..Self::default() }
    }

    /// The active search constraints in display order: ingredients, diet,
    /// time limit, cuisine. Used for both the ranker's rationale and the
    /// dialogue's result header.
    pub fn constraint_bits(&self) -> Vec<String> {
        let mut bits = Vec::new();
        if !self.ingredients.is_empty() {
            bits.push(self.ingredients.join(", "));
        }
        if let Some(diet) = self.diet {
            bits.push(diet.to_string());
        }
        if let Some(limit) = self.time_limit_minutes {
            bits.push(format!("≤ {limit} min"));
        }
        if let Some(cuisine) = &self.cuisine {
            bits.push(cuisine.clone());
        }
        bits
    }
}

/// The comparable subset of a query, remembered per session to decide
/// whether a new utterance actually changes the search. Ingredient order
/// and duplicates are irrelevant here, so both sides collapse to sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKey {
    pub ingredients: BTreeSet<String>,
    pub excluded: BTreeSet<String>,
    pub diet: Option<DietClass>,
    pub cuisine: Option<String>,
    pub time_limit_minutes: Option<u32>,
}

impl From<&StructuredQuery> for QueryKey {
    fn from(query: &StructuredQuery) -> Self {
        Self {
            ingredients: query.ingredients.iter().cloned().collect(),
            excluded: query.excluded.clone(),
            diet: query.diet,
            cuisine: query.cuisine.clone(),
            time_limit_minutes: query.time_limit_minutes,
        }
    }
}
