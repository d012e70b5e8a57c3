use lazy_static::lazy_static;
use regex::Regex;

/// Words that open a chat. Checked against the whole word set, and only on
/// short utterances so "hi" inside a real query does not derail it.
pub const GREETINGS: &[&str] = &["hi", "hello", "hey", "hola", "namaste", "yo", "hii", "helo"];

pub const YES_WORDS: &[&str] = &[
    "yes", "y", "yeah", "yep", "sure", "ok", "okay", "ya", "proceed", "confirm", "go", "goahead",
    "looks", "good", "helpful",
];

pub const NO_WORDS: &[&str] = &[
    "no", "n", "nope", "nah", "cancel", "back", "another", "different", "unhelpful", "not",
];

/// Whole-substring typo fixes applied before any other normalization.
pub const COMMON_FIXES: &[(&str, &str)] = &[
    ("tomatos", "tomato"),
    ("spinch", "spinach"),
    ("chillies", "chili"),
    ("chilli", "chili"),
    ("pototo", "potato"),
    ("paneeer", "paneer"),
    ("tamoto", "tomato"),
];

/// Cuisine vocabulary. Scan order is the declaration order, which keeps the
/// first-match rule deterministic.
pub const CUISINES: &[&str] = &[
    "indian",
    "italian",
    "chinese",
    "thai",
    "mexican",
    "american",
    "mediterranean",
    "japanese",
    "korean",
];

/// Words that never count as ingredients.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "for", "in", "on", "with", "is", "are", "be", "it",
    "this", "that", "i", "you", "me", "my", "your", "please", "some", "make", "do", "like", "want",
    "show", "give", "need", "have", "got", "something", "dish", "recipe", "recipes", "find",
    "cook", "prepare", "under", "within", "less", "more", "than", "time", "minutes", "minute",
    "mins", "min", "without", "no", "not", "can", "quick", "easy", "fast", "hi", "hello", "hey",
];

lazy_static! {
    // Diet detectors. Non-veg must cover hyphenated, spaced and abbreviated
    // spellings so it wins over the plain veg pattern.
    pub static ref VEGAN_RE: Regex = Regex::new(r"\bvegan\b").unwrap();
    pub static ref NONVEG_RE: Regex =
        Regex::new(r"\b(?:non[-\s]?veg(?:etarian)?|nonvegetarian|n\s*veg|nv)\b").unwrap();
    pub static ref VEG_RE: Regex = Regex::new(r"\bveg(?:etarian)?\b").unwrap();

    pub static ref TIME_LIMIT_RE: Regex =
        Regex::new(r"(?:under|within|less\s+than)\s*(\d{1,3})\s*(?:min|mins|minutes?)\b").unwrap();
    pub static ref BARE_TIME_RE: Regex =
        Regex::new(r"\b(\d{1,3})\s*(?:min|mins|minutes?)\b").unwrap();

    pub static ref SELECTION_RE: Regex = Regex::new(r"^\s*(\d{1,2})\s*$").unwrap();

    pub static ref WITHOUT_RE: Regex = Regex::new(r"\bwithout\s+([a-z\s]+)").unwrap();
    pub static ref NO_RE: Regex = Regex::new(r"\bno\s+([a-z]+)\b").unwrap();
}
