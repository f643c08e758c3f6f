use super::FieldSource;
use log::debug;
use std::collections::HashMap;

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Collect ingredient/measure pairs stored as `strIngredient1`/`strMeasure1`,
/// `strIngredient2`/`strMeasure2`, and so on.
///
/// Scanning stops at the first index where the ingredient is missing or
/// blank, or the measure is missing or empty, so a valid pair after a gap is
/// never read. Measures are stored exactly as sent. Ingredient names are
/// capitalized word by word; a repeated name keeps the last measure.
pub fn parse_ingredients<S: FieldSource + ?Sized>(source: &S) -> HashMap<String, String> {
    let mut ingredients = HashMap::new();

    for index in 1.. {
        let ingredient = source
            .field(&format!("{INGREDIENT_PREFIX}{index}"))
            .map(str::trim)
            .filter(|value| !value.is_empty());
        // Measures are kept verbatim; only a truly empty one ends the scan
        let measure = source
            .field(&format!("{MEASURE_PREFIX}{index}"))
            .filter(|value| !value.is_empty());

        let (Some(ingredient), Some(measure)) = (ingredient, measure) else {
            debug!("Ingredient scan stopped at index {}", index);
            break;
        };

        ingredients.insert(capitalize_words(ingredient), measure.to_string());
    }

    ingredients
}

/// Uppercase the first character of every whitespace-delimited word and
/// lowercase the rest.
///
/// ```
/// use dessertly::decoders::capitalize_words;
///
/// assert_eq!(capitalize_words("plain FLOUR"), "Plain Flour");
/// assert_eq!(capitalize_words("self-raising flour"), "Self-raising Flour");
/// ```
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}
