use serde_json::{Map, Value};
use std::collections::HashMap;

mod detail;
mod ingredients;
mod instructions;

pub use detail::decode_detail;
pub use ingredients::{capitalize_words, parse_ingredients};
pub use instructions::reformat_instructions;

/// A string-keyed record that fields can be looked up in by name.
///
/// Lets the ingredient parser build `strIngredient{n}` keys at runtime
/// without caring how the record was decoded.
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<&str>;
}

/// Only string values count; `null` and other JSON types read as absent.
impl FieldSource for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}
