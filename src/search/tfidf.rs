use std::collections::{BTreeMap, HashMap};

/// Common English words excluded from the vector-space vocabulary.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "never", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

fn is_stopword(token: &str) -> bool {
    ENGLISH_STOPWORDS.binary_search(&token).is_ok()
}

/// Alphanumeric runs of length >= 2, lowercased, stopwords removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.chars().count() >= 2 && !is_stopword(t))
        .map(|t| t.to_string())
        .collect()
}

/// Unigrams plus bigrams of the surviving tokens.
fn terms(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut out = tokens.clone();
    out.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    out
}

/// Term-frequency / inverse-document-frequency index over a fixed document
/// set. Built once, immutable afterwards; all vectors are L2-normalized so
/// cosine similarity reduces to a sparse dot product.
#[derive(Debug)]
pub struct TfidfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    doc_vectors: Vec<Vec<(usize, f64)>>,
}

impl TfidfIndex {
    pub fn fit(documents: &[String]) -> Self {
        let doc_terms: Vec<Vec<String>> = documents.iter().map(|d| terms(d)).collect();

        // Document frequency per term; BTreeMap keeps term ids deterministic.
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &doc_terms {
            let mut seen: Vec<&str> = doc.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());
        for (term_id, (term, count)) in df.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), term_id);
            // Smoothed idf, never zero.
            idf.push(((1.0 + n_docs) / (1.0 + count as f64)).ln() + 1.0);
        }

        let doc_vectors = doc_terms
            .iter()
            .map(|doc| Self::weigh(doc, &vocabulary, &idf))
            .collect();

        Self { vocabulary, idf, doc_vectors }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn doc_count(&self) -> usize {
        self.doc_vectors.len()
    }

    /// Project free text into the fitted vocabulary as an L2-normalized
    /// sparse vector. Out-of-vocabulary terms are dropped.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        Self::weigh(&terms(text), &self.vocabulary, &self.idf)
    }

    /// Cosine similarity of a transformed query against every document,
    /// in document order.
    pub fn scores(&self, query_vector: &[(usize, f64)]) -> Vec<f64> {
        self.doc_vectors.iter().map(|doc| sparse_dot(query_vector, doc)).collect()
    }

    fn weigh(
        doc: &[String],
        vocabulary: &HashMap<String, usize>,
        idf: &[f64],
    ) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in doc {
            if let Some(&term_id) = vocabulary.get(term) {
                *counts.entry(term_id).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: Vec<(usize, f64)> =
            counts.into_iter().map(|(term_id, tf)| (term_id, tf * idf[term_id])).collect();
        vector.sort_unstable_by_key(|&(term_id, _)| term_id);

        let norm = vector.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for entry in &mut vector {
                entry.1 /= norm;
            }
        }
        vector
    }
}

/// Dot product of two sparse vectors sorted by term id.
fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut total = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                total += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stopword_list_is_sorted() {
        let mut sorted = ENGLISH_STOPWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ENGLISH_STOPWORDS);
    }

    #[test]
    fn test_identical_documents_score_one() {
        let index = TfidfIndex::fit(&docs(&["paneer tomato curry", "noodle soup"]));
        let query = index.transform("paneer tomato curry");
        let scores = index.scores(&query);
        assert!((scores[0] - 1.0).abs() < 1e-9);
        assert!(scores[1] < scores[0]);
    }

    #[test]
    fn test_stopwords_never_enter_vocabulary() {
        let index = TfidfIndex::fit(&docs(&["the curry with the rice"]));
        // "the" and "with" are gone; "curry", "rice" and the bigram remain.
        assert_eq!(index.vocabulary_len(), 3);
        assert!(index.transform("the with of").is_empty());
    }

    #[test]
    fn test_bigrams_of_surviving_tokens() {
        let index = TfidfIndex::fit(&docs(&["spicy chicken", "mild chicken"]));
        let query = index.transform("spicy chicken");
        let scores = index.scores(&query);
        // The matching bigram pushes doc 0 above doc 1 even though both
        // share the unigram "chicken".
        assert!(scores[0] > scores[1]);
        assert!(scores[1] > 0.0);
    }

    #[test]
    fn test_out_of_vocabulary_query_scores_zero() {
        let index = TfidfIndex::fit(&docs(&["paneer curry"]));
        let query = index.transform("quinoa bowl");
        assert!(query.is_empty());
        assert_eq!(index.scores(&query), vec![0.0]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let index = TfidfIndex::fit(&docs(&["a b c paneer"]));
        assert_eq!(index.vocabulary_len(), 1);
    }
}
