use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::core::error::Result;
use crate::corpus::models::{DietClass, RecipeRecord};

/// One row as it appears on disk. Every field is optional; missing ones are
/// repaired here so per-query code never sees a partial record.
#[derive(Debug, Deserialize)]
struct RawRecipeRow {
    #[serde(default)]
    title: String,
    #[serde(default)]
    ingredients: String,
    #[serde(default)]
    steps: String,
    #[serde(default)]
    time: Value,
    #[serde(default)]
    cuisine: String,
    #[serde(default)]
    diet: String,
}

fn time_field_to_string(value: Value) -> String {
    match value {
        Value::Null => "0".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        _ => "0".to_string(),
    }
}

/// Load the recipe corpus from a JSON array file.
///
/// This is the crate's only fallible path: it runs once at startup, repairs
/// missing fields and derives each record's diet category. Everything
/// downstream treats the returned records as immutable.
pub fn load_corpus(path: &Path) -> Result<Vec<RecipeRecord>> {
    let text = fs::read_to_string(path)?;
    let rows: Vec<RawRecipeRow> = serde_json::from_str(&text)?;

    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let title_key = row.title.trim().to_lowercase();
        if !title_key.is_empty() && !seen_titles.insert(title_key) {
            warn!("duplicate recipe title in corpus: {}", row.title);
        }

        let diet_class = DietClass::classify(&row.diet);
        records.push(RecipeRecord {
            title: row.title,
            ingredients: row.ingredients,
            steps: row.steps,
            cuisine: row.cuisine,
            time: time_field_to_string(row.time),
            diet: row.diet,
            diet_class,
        });
    }

    if records.is_empty() {
        warn!("recipe corpus at {} is empty", path.display());
    } else {
        info!("loaded {} recipes from {}", records.len(), path.display());
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_repairs_missing_fields() {
        let file = write_corpus(r#"[{"title": "Plain Rice"}]"#);
        let records = load_corpus(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.title, "Plain Rice");
        assert_eq!(r.ingredients, "");
        assert_eq!(r.steps, "");
        assert_eq!(r.cuisine, "");
        assert_eq!(r.time, "0");
        assert_eq!(r.diet, "");
        assert_eq!(r.diet_class, DietClass::Unknown);
    }

    #[test]
    fn test_load_derives_diet_class_and_numeric_time() {
        let file = write_corpus(
            r#"[
                {"title": "Butter Chicken", "diet": "Non-Veg", "time": 40},
                {"title": "Chana Salad", "diet": "vegan", "time": "15"}
            ]"#,
        );
        let records = load_corpus(file.path()).unwrap();

        assert_eq!(records[0].diet_class, DietClass::NonVeg);
        assert_eq!(records[0].diet, "Non-Veg");
        assert_eq!(records[0].time_minutes(), Some(40));
        assert_eq!(records[1].diet_class, DietClass::Vegan);
        assert_eq!(records[1].time_minutes(), Some(15));
    }

    #[test]
    fn test_load_tolerates_duplicates_and_empty() {
        let file = write_corpus(
            r#"[{"title": "Dal"}, {"title": "dal"}]"#,
        );
        let records = load_corpus(file.path()).unwrap();
        assert_eq!(records.len(), 2);

        let empty = write_corpus("[]");
        assert!(load_corpus(empty.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_corpus("{not json");
        assert!(load_corpus(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(load_corpus(Path::new("/nonexistent/recipes.json")).is_err());
    }
}
