use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::corpus::DietClass;
use crate::nlu::models::StructuredQuery;
use crate::nlu::patterns::{
    BARE_TIME_RE, COMMON_FIXES, CUISINES, GREETINGS, NONVEG_RE, NO_RE, NO_WORDS, SELECTION_RE,
    STOPWORDS, TIME_LIMIT_RE, VEGAN_RE, VEG_RE, WITHOUT_RE, YES_WORDS,
};
use crate::utils::{collapse_whitespace, contains_word, safe_truncate_ellipsis};

/// Lowercase, fix common typos, strip everything outside `[a-z0-9 -]` and
/// collapse whitespace. Hyphens survive so "non-veg" stays one unit until
/// diet stripping has run.
fn clean_text(raw: &str) -> String {
    let mut s = raw.to_lowercase();
    for (typo, fix) in COMMON_FIXES {
        s = s.replace(typo, fix);
    }
    let kept: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' { c } else { ' ' }
        })
        .collect();
    collapse_whitespace(&kept)
}

/// Vegan wins over non-veg, non-veg over veg; at most one diet per utterance.
fn detect_diet(s: &str) -> Option<DietClass> {
    if VEGAN_RE.is_match(s) {
        Some(DietClass::Vegan)
    } else if NONVEG_RE.is_match(s) {
        Some(DietClass::NonVeg)
    } else if VEG_RE.is_match(s) {
        Some(DietClass::Veg)
    } else {
        None
    }
}

/// Remove diet phrases so they never split into ingredient tokens.
fn strip_diet_terms(s: &str) -> String {
    let s = VEGAN_RE.replace_all(s, " ");
    let s = NONVEG_RE.replace_all(&s, " ");
    let s = VEG_RE.replace_all(&s, " ");
    collapse_whitespace(&s)
}

fn extract_time(s: &str) -> Option<u32> {
    if let Some(caps) = TIME_LIMIT_RE.captures(s) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = BARE_TIME_RE.captures(s) {
        return caps[1].parse().ok();
    }
    if s.contains("half an hour") || s.contains("half hour") {
        return Some(30);
    }
    None
}

fn is_ingredient_token(token: &str) -> bool {
    token.chars().count() > 1
        && !token.chars().all(|c| c.is_ascii_digit())
        && !STOPWORDS.contains(&token)
}

/// Turn a raw utterance into a [`StructuredQuery`].
///
/// Pure and deterministic; never fails. Garbage input degrades to a query
/// with mostly-absent fields.
pub fn parse(raw: &str) -> StructuredQuery {
    let normalized = clean_text(raw);
    if normalized.is_empty() {
        return StructuredQuery::empty(raw);
    }

    // Diet first, so "non veg" is stripped before tokenization instead of
    // splitting into ingredient tokens "non" and "veg".
    let diet = detect_diet(&normalized);
    let stripped = strip_diet_terms(&normalized);

    let words: HashSet<&str> = stripped.split_whitespace().collect();
    let is_greeting = words.iter().any(|w| GREETINGS.contains(w)) && words.len() <= 3;
    let is_affirmative = words.iter().any(|w| YES_WORDS.contains(w))
        || normalized.contains("go ahead")
        || normalized.contains("looks good");
    let is_negative = words.iter().any(|w| NO_WORDS.contains(w))
        || normalized.contains("not helpful")
        || normalized.contains("other options")
        || normalized.contains("see other");

    let selection_index =
        SELECTION_RE.captures(&stripped).and_then(|caps| caps[1].parse::<usize>().ok());

    let token_count = stripped.split_whitespace().count();
    let selection_name = if !is_greeting && !is_affirmative && !is_negative {
        ((1..=6).contains(&token_count)).then(|| raw.trim().to_string())
    } else {
        None
    };

    let cuisine =
        CUISINES.iter().find(|c| contains_word(&normalized, c)).map(|c| (*c).to_string());

    let time_limit_minutes = extract_time(&normalized);

    let mut excluded: BTreeSet<String> = BTreeSet::new();
    for caps in WITHOUT_RE.captures_iter(&stripped) {
        for token in caps[1].split_whitespace() {
            if is_ingredient_token(token) {
                excluded.insert(token.to_string());
            }
        }
    }
    for caps in NO_RE.captures_iter(&stripped) {
        let token = &caps[1];
        if is_ingredient_token(token) {
            excluded.insert(token.to_string());
        }
    }

    // Whatever is left, minus exclusions, is the ingredient list.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ingredients = Vec::new();
    for token in stripped.split_whitespace() {
        if is_ingredient_token(token) && !excluded.contains(token) && seen.insert(token) {
            ingredients.push(token.to_string());
        }
    }

    debug!(
        "parsed {:?}: diet={:?} cuisine={:?} time={:?} ingredients={:?} excluded={:?}",
        safe_truncate_ellipsis(raw, 80),
        diet,
        cuisine,
        time_limit_minutes,
        ingredients,
        excluded
    );

    StructuredQuery {
        raw: raw.to_string(),
        is_greeting,
        is_affirmative,
        is_negative,
        selection_index,
        selection_name,
        diet,
        cuisine,
        time_limit_minutes,
        ingredients,
        excluded,
    }
}
