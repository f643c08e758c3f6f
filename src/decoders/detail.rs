use super::{parse_ingredients, reformat_instructions, FieldSource};
use crate::error::ServiceError;
use crate::model::RecipeDetail;
use log::debug;
use serde_json::{Map, Value};

/// Build a [`RecipeDetail`] from one raw record of a `lookup.php` response.
///
/// `idMeal`, `strMeal` and `strMealThumb` must be present strings.
/// `strInstructions` is optional and is reformatted into numbered paragraphs;
/// instructions with no text left after reformatting are stored as `None`.
pub fn decode_detail(record: &Map<String, Value>) -> Result<RecipeDetail, ServiceError> {
    let id = required(record, "idMeal")?;
    let name = required(record, "strMeal")?;
    let image_url = required(record, "strMealThumb")?;

    let instructions = record
        .field("strInstructions")
        .map(reformat_instructions)
        .filter(|text| !text.is_empty());

    let ingredients = parse_ingredients(record);

    Ok(RecipeDetail {
        id,
        name,
        instructions,
        ingredients,
        image_url,
    })
}

fn required(record: &Map<String, Value>, key: &str) -> Result<String, ServiceError> {
    record.field(key).map(str::to_string).ok_or_else(|| {
        debug!("Recipe record is missing required field '{}'", key);
        ServiceError::DecodingFailure
    })
}
