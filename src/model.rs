use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A lightweight recipe list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

/// A full recipe record with normalized instructions and ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    /// Numbered paragraphs, or `None` when the API had no instructions
    pub instructions: Option<String>,
    /// Capitalized ingredient name to measure
    pub ingredients: HashMap<String, String>,
    pub image_url: String,
}

/// One row of a sorted ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientEntry {
    pub ingredient: String,
    pub measure: String,
}

impl RecipeDetail {
    /// Ingredients ordered case-insensitively by name.
    pub fn sorted_ingredients(&self, ascending: bool) -> Vec<IngredientEntry> {
        sort_ingredients(&self.ingredients, ascending)
    }
}

/// Project an ingredient mapping into a list ordered by ingredient name,
/// ignoring case.
pub fn sort_ingredients(
    ingredients: &HashMap<String, String>,
    ascending: bool,
) -> Vec<IngredientEntry> {
    let mut entries: Vec<IngredientEntry> = ingredients
        .iter()
        .map(|(ingredient, measure)| IngredientEntry {
            ingredient: ingredient.clone(),
            measure: measure.clone(),
        })
        .collect();

    entries.sort_by(|a, b| {
        let ordering = compare_names(&a.ingredient, &b.ingredient);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    entries
}

// HashMap iteration order is arbitrary, so fall back to the exact key when
// two names differ only by case
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_with(ingredients: &[(&str, &str)]) -> RecipeDetail {
        RecipeDetail {
            id: "1".to_string(),
            name: "Mock Dessert".to_string(),
            instructions: None,
            ingredients: ingredients
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image_url: String::new(),
        }
    }

    fn names(entries: &[IngredientEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.ingredient.as_str()).collect()
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let detail = detail_with(&[("Sugar", "1 cup"), ("Flour", "2 cups"), ("Eggs", "2 large")]);

        assert_eq!(
            names(&detail.sorted_ingredients(true)),
            vec!["Eggs", "Flour", "Sugar"]
        );
        assert_eq!(
            names(&detail.sorted_ingredients(false)),
            vec!["Sugar", "Flour", "Eggs"]
        );
    }

    #[test]
    fn test_sort_ignores_case() {
        let detail = detail_with(&[("butter", "1"), ("Apples", "2"), ("cinnamon", "3")]);
        assert_eq!(
            names(&detail.sorted_ingredients(true)),
            vec!["Apples", "butter", "cinnamon"]
        );
    }

    #[test]
    fn test_sort_keeps_measures_paired() {
        let detail = detail_with(&[("Sugar", "1 cup"), ("Eggs", "2 large")]);
        let sorted = detail.sorted_ingredients(true);
        assert_eq!(
            sorted[0],
            IngredientEntry {
                ingredient: "Eggs".to_string(),
                measure: "2 large".to_string(),
            }
        );
    }

    #[test]
    fn test_summary_wire_names() {
        let summary: RecipeSummary = serde_json::from_str(
            r#"{"idMeal": "52768", "strMeal": "Apple Frangipan Tart", "strMealThumb": "https://example.com/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(summary.id, "52768");
        assert_eq!(summary.name, "Apple Frangipan Tart");
        assert_eq!(summary.thumbnail_url, "https://example.com/a.jpg");
    }
}
