use similar::TextDiff;

use crate::search::Candidate;

/// Index of the name in `names` most similar to `query`, if its similarity
/// ratio reaches `cutoff`. Comparison is case-insensitive; ties keep the
/// first name.
pub fn best_fuzzy_match(names: &[String], query: &str, cutoff: f64) -> Option<usize> {
    let wanted = query.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, name) in names.iter().enumerate() {
        let lowered = name.to_lowercase();
        let ratio = f64::from(TextDiff::from_chars(lowered.as_str(), wanted.as_str()).ratio());
        if ratio >= cutoff && best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((i, ratio));
        }
    }
    best.map(|(i, _)| i)
}

/// Resolve a user's pick against the remembered candidate list.
///
/// A 1-based index takes priority over a name; the index is bounds-checked
/// and a name falls back to fuzzy title matching.
pub fn pick_from_candidates<'a>(
    candidates: &'a [Candidate],
    index: Option<usize>,
    name: Option<&str>,
    cutoff: f64,
) -> Option<&'a Candidate> {
    if candidates.is_empty() {
        return None;
    }

    if let Some(number) = index {
        if let Some(candidate) = number.checked_sub(1).and_then(|i| candidates.get(i)) {
            return Some(candidate);
        }
    }

    if let Some(name) = name {
        let titles: Vec<String> = candidates.iter().map(|c| c.title.clone()).collect();
        if let Some(i) = best_fuzzy_match(&titles, name, cutoff) {
            return Some(&candidates[i]);
        }
    }

    None
}
