use tracing::{debug, info};

use crate::core::config::SousChefConfig;
use crate::corpus::models::{RecipeDetails, RecipeRecord};
use crate::nlu::models::StructuredQuery;
use crate::search::cache::SearchCache;
use crate::search::models::{Candidate, SearchResponse};
use crate::search::tfidf::TfidfIndex;
use crate::utils::contains_word;

/// Score assigned to recipes knocked out by a hard filter; below any valid
/// similarity so they can never re-enter the ranking.
const MASKED_SCORE: f64 = -1.0;

/// Scores and filters the recipe corpus against structured queries.
///
/// The corpus and its derived text index are built once at construction and
/// never mutated, so concurrent reads are safe without locking.
pub struct RecipeRanker {
    recipes: Vec<RecipeRecord>,
    ingredients_lower: Vec<String>,
    index: TfidfIndex,
    cache: SearchCache<SearchResponse>,
    similarity_weight: f64,
    overlap_weight: f64,
    fallback_query: String,
}

impl RecipeRanker {
    pub fn new(recipes: Vec<RecipeRecord>, config: &SousChefConfig) -> Self {
        let combined: Vec<String> = recipes.iter().map(RecipeRecord::combined_text).collect();
        let index = TfidfIndex::fit(&combined);
        info!("indexed {} recipes over {} terms", recipes.len(), index.vocabulary_len());

        let ingredients_lower = recipes.iter().map(|r| r.ingredients.to_lowercase()).collect();

        Self {
            recipes,
            ingredients_lower,
            index,
            cache: SearchCache::new(config.cache_capacity, config.cache_ttl_secs),
            similarity_weight: config.similarity_weight,
            overlap_weight: config.overlap_weight,
            fallback_query: config.fallback_query.clone(),
        }
    }

    /// Rank the corpus against `query` and return the top `top_k` candidates
    /// plus a rationale naming the constraints that were used.
    ///
    /// Deterministic for a given corpus and query; results are served
    /// through the cache transparently.
    pub fn search(&self, query: &StructuredQuery, top_k: usize) -> SearchResponse {
        let cache_key = SearchCache::<SearchResponse>::make_key(&canonical_query(query, top_k));
        if let Some(hit) = self.cache.get(&cache_key) {
            debug!("search cache hit");
            return hit;
        }

        let response = self.rank(query, top_k);
        self.cache.set(&cache_key, response.clone());
        response
    }

    /// Case-insensitive exact title lookup. Never fails; a miss yields the
    /// `"N/A"` sentinel in both fields.
    pub fn details(&self, title: &str) -> RecipeDetails {
        let wanted = title.to_lowercase();
        self.recipes
            .iter()
            .find(|r| r.title.to_lowercase() == wanted)
            .map(|r| RecipeDetails { ingredients: r.ingredients.clone(), steps: r.steps.clone() })
            .unwrap_or_else(RecipeDetails::not_available)
    }

    fn rank(&self, query: &StructuredQuery, top_k: usize) -> SearchResponse {
        let diet_str = query.diet.map(|d| d.to_string());
        let mut parts: Vec<&str> = query.ingredients.iter().map(String::as_str).collect();
        if let Some(diet) = &diet_str {
            parts.push(diet);
        }
        if let Some(cuisine) = &query.cuisine {
            parts.push(cuisine);
        }
        // An all-absent query still ranks: fall back to a generic phrase
        // instead of degenerating to an empty vector.
        let query_text =
            if parts.is_empty() { self.fallback_query.clone() } else { parts.join(" ") };

        let query_vector = self.index.transform(&query_text.to_lowercase());
        let mut scores = self.index.scores(&query_vector);

        // Soft ingredient-overlap boost, normalized by its corpus maximum.
        if !query.ingredients.is_empty() {
            let overlap: Vec<f64> = self
                .ingredients_lower
                .iter()
                .map(|text| {
                    query.ingredients.iter().filter(|ing| text.contains(ing.as_str())).count()
                        as f64
                })
                .collect();
            let max = overlap.iter().cloned().fold(0.0, f64::max);
            if max > 0.0 {
                for (score, count) in scores.iter_mut().zip(&overlap) {
                    *score = self.similarity_weight * *score
                        + self.overlap_weight * (count / max);
                }
            }
        }

        // Hard filters mask rows outright; no score can bring them back.
        for (i, recipe) in self.recipes.iter().enumerate() {
            if !passes_filters(recipe, &self.ingredients_lower[i], query) {
                scores[i] = MASKED_SCORE;
            }
        }

        let mut order: Vec<usize> = (0..self.recipes.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });

        let candidates: Vec<Candidate> = order
            .into_iter()
            .take(top_k)
            .filter(|&i| scores[i] > 0.0)
            .map(|i| {
                let recipe = &self.recipes[i];
                Candidate {
                    title: recipe.title.clone(),
                    time: recipe.time_minutes(),
                    cuisine: recipe.cuisine.clone(),
                    diet: recipe.diet.clone(),
                }
            })
            .collect();

        let rationale = query.constraint_bits().join(", ");
        debug!("search returned {} candidates for [{}]", candidates.len(), rationale);

        SearchResponse { candidates, rationale }
    }
}

fn passes_filters(recipe: &RecipeRecord, ingredients_lower: &str, query: &StructuredQuery) -> bool {
    // Diet is an exact category match; Unknown never satisfies a request.
    if let Some(diet) = query.diet {
        if recipe.diet_class != diet {
            return false;
        }
    }

    // A non-numeric time field fails any time constraint.
    if let Some(limit) = query.time_limit_minutes {
        match recipe.time_minutes() {
            Some(minutes) if minutes <= limit => {}
            _ => return false,
        }
    }

    if query.excluded.iter().any(|excluded| ingredients_lower.contains(excluded.as_str())) {
        return false;
    }

    if let Some(cuisine) = &query.cuisine {
        if !contains_word(&recipe.cuisine.to_lowercase(), cuisine) {
            return false;
        }
    }

    true
}

fn canonical_query(query: &StructuredQuery, top_k: usize) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        query.ingredients.join(","),
        query.diet.map(|d| d.to_string()).unwrap_or_default(),
        query.cuisine.clone().unwrap_or_default(),
        query.time_limit_minutes.map(|t| t.to_string()).unwrap_or_default(),
        query.excluded.iter().cloned().collect::<Vec<_>>().join(","),
        top_k
    )
}
