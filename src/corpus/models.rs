use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Normalized diet category derived from a recipe's free-text diet label.
///
/// Filtering compares categories exactly; `Unknown` never matches a query.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DietClass {
    Veg,
    NonVeg,
    Vegan,
    Unknown,
}

impl DietClass {
    /// Classify a raw diet label: lowercase, drop spaces/hyphens/underscores,
    /// then match the known spellings.
    pub fn classify(raw: &str) -> Self {
        let folded: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match folded.as_str() {
            "veg" | "vegetarian" | "veggie" => Self::Veg,
            "nonveg" | "nonvegetarian" | "egg" | "eggetarian" | "chicken" | "fish" | "mutton"
            | "prawn" => Self::NonVeg,
            "vegan" => Self::Vegan,
            _ => Self::Unknown,
        }
    }
}

/// One row of the recipe corpus. Loaded once, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub cuisine: String,
    /// Raw time field as loaded; not guaranteed numeric.
    pub time: String,
    /// Raw diet label; this is what gets shown to the user.
    pub diet: String,
    pub diet_class: DietClass,
}

impl RecipeRecord {
    /// The recipe's time as minutes, if the raw field is a clean integer.
    pub fn time_minutes(&self) -> Option<u32> {
        let t = self.time.trim();
        if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        t.parse().ok()
    }

    /// Unified lowercase text used for vector indexing.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title, self.ingredients, self.steps, self.cuisine, self.diet
        )
        .to_lowercase()
    }
}

/// Ingredients/steps payload for a selected recipe.
///
/// Lookups never fail; a miss yields the `"N/A"` sentinel in both fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub ingredients: String,
    pub steps: String,
}

impl RecipeDetails {
    pub fn not_available() -> Self {
        Self { ingredients: "N/A".to_string(), steps: "N/A".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_veg_spellings() {
        assert_eq!(DietClass::classify("veg"), DietClass::Veg);
        assert_eq!(DietClass::classify("Vegetarian"), DietClass::Veg);
        assert_eq!(DietClass::classify("veggie"), DietClass::Veg);
    }

    #[test]
    fn test_classify_non_veg_never_veg() {
        for label in ["non-veg", "non veg", "Non_Veg", "nonvegetarian", "chicken", "fish", "egg"] {
            assert_eq!(DietClass::classify(label), DietClass::NonVeg, "label: {label}");
        }
    }

    #[test]
    fn test_classify_vegan_and_unknown() {
        assert_eq!(DietClass::classify("VEGAN"), DietClass::Vegan);
        assert_eq!(DietClass::classify("pescatarian"), DietClass::Unknown);
        assert_eq!(DietClass::classify(""), DietClass::Unknown);
    }

    #[test]
    fn test_diet_class_string_forms() {
        assert_eq!(DietClass::NonVeg.to_string(), "non-veg");
        assert_eq!(DietClass::Veg.to_string(), "veg");
        assert_eq!("vegan".parse::<DietClass>().unwrap(), DietClass::Vegan);
    }

    #[test]
    fn test_time_minutes() {
        let mut r = RecipeRecord {
            title: "Dal".into(),
            ingredients: "lentils".into(),
            steps: "boil".into(),
            cuisine: "indian".into(),
            time: "25".into(),
            diet: "veg".into(),
            diet_class: DietClass::Veg,
        };
        assert_eq!(r.time_minutes(), Some(25));

        r.time = "about 25".into();
        assert_eq!(r.time_minutes(), None);

        r.time = "".into();
        assert_eq!(r.time_minutes(), None);
    }

    #[test]
    fn test_combined_text_is_lowercase() {
        let r = RecipeRecord {
            title: "Pad Thai".into(),
            ingredients: "Noodles, Peanuts".into(),
            steps: "Stir-fry".into(),
            cuisine: "Thai".into(),
            time: "30".into(),
            diet: "Non-Veg".into(),
            diet_class: DietClass::NonVeg,
        };
        let text = r.combined_text();
        assert!(text.contains("pad thai"));
        assert!(text.contains("non-veg"));
        assert_eq!(text, text.to_lowercase());
    }
}
