use tracing::debug;

use crate::DEFAULT_FUZZY_CUTOFF;
use crate::corpus::RecipeDetails;
use crate::dialogue::models::{DialogueState, SessionMemory, TurnOutcome};
use crate::dialogue::replies;
use crate::dialogue::selection::pick_from_candidates;
use crate::nlu::models::{QueryKey, StructuredQuery};
use crate::search::models::SearchResponse;

/// Advance a session by one turn.
///
/// Pure transition function: all state comes in and goes out by value, the
/// ranking engine is reached only through the injected `search` and
/// `details` capabilities, and every input — however malformed — yields a
/// valid (state, memory, reply) outcome.
pub fn next_turn<S, D>(
    state: DialogueState,
    memory: SessionMemory,
    query: &StructuredQuery,
    search: S,
    details: D,
) -> TurnOutcome
where
    S: Fn(&StructuredQuery) -> SearchResponse,
    D: Fn(&str) -> RecipeDetails,
{
    match state {
        // Terminal and absorbing.
        DialogueState::Closed => TurnOutcome {
            state: DialogueState::Closed,
            memory,
            reply: replies::chat_closed(),
        },

        DialogueState::Idle | DialogueState::AwaitSelection => {
            if query.is_greeting && state == DialogueState::Idle {
                return TurnOutcome { state: DialogueState::Idle, memory, reply: replies::welcome() };
            }

            if state == DialogueState::AwaitSelection {
                if let Some(chosen) = pick_from_candidates(
                    &memory.last_candidates,
                    query.selection_index,
                    query.selection_name.as_deref(),
                    DEFAULT_FUZZY_CUTOFF,
                ) {
                    let title = chosen.title.clone();
                    debug!("selected candidate: {title}");
                    let reply = replies::recipe_card(&title, &details(&title));
                    let mut memory = memory;
                    memory.chosen_title = Some(title);
                    return TurnOutcome { state: DialogueState::Confirm, memory, reply };
                }

                // Same constraints as last time and a list is still on the
                // table: nudge instead of re-searching.
                if memory.last_query.as_ref() == Some(&QueryKey::from(query))
                    && !memory.last_candidates.is_empty()
                {
                    debug!("query unchanged, keeping current candidate list");
                    return TurnOutcome {
                        state: DialogueState::AwaitSelection,
                        memory,
                        reply: replies::pick_nudge(),
                    };
                }
            }

            run_search(memory, query, &search)
        }

        DialogueState::Confirm => {
            // Negative wins when an utterance trips both lexicons
            // ("not helpful" contains the yes-word "helpful").
            if query.is_negative {
                let mut memory = memory;
                memory.chosen_title = None;
                return TurnOutcome {
                    state: DialogueState::Idle,
                    memory,
                    reply: replies::try_other_dishes(),
                };
            }

            if query.is_affirmative {
                let title =
                    memory.chosen_title.clone().unwrap_or_else(|| "the recipe".to_string());
                debug!("recommendation confirmed: {title}");
                return TurnOutcome {
                    state: DialogueState::Closed,
                    memory: SessionMemory::default(),
                    reply: replies::closing(&title),
                };
            }

            // Maybe the user picked a different dish from the same list.
            if let Some(chosen) = pick_from_candidates(
                &memory.last_candidates,
                query.selection_index,
                query.selection_name.as_deref(),
                DEFAULT_FUZZY_CUTOFF,
            ) {
                let title = chosen.title.clone();
                let reply = replies::recipe_card(&title, &details(&title));
                let mut memory = memory;
                memory.chosen_title = Some(title);
                return TurnOutcome { state: DialogueState::Confirm, memory, reply };
            }

            TurnOutcome {
                state: DialogueState::Idle,
                memory,
                reply: replies::ask_updated_constraints(),
            }
        }
    }
}

fn run_search<S>(memory: SessionMemory, query: &StructuredQuery, search: &S) -> TurnOutcome
where
    S: Fn(&StructuredQuery) -> SearchResponse,
{
    let response = search(query);
    if response.candidates.is_empty() {
        // Keep whatever list the session had before; an empty result must
        // not wipe it.
        return TurnOutcome { state: DialogueState::Idle, memory, reply: replies::no_match() };
    }

    let reply = replies::search_results(&query.constraint_bits(), &response.candidates);
    let mut memory = memory;
    memory.last_query = Some(QueryKey::from(query));
    memory.last_candidates = response.candidates;

    TurnOutcome { state: DialogueState::AwaitSelection, memory, reply }
}
