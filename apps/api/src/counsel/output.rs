//! Cleaning and decoding of model output for `/api/recommend`.

use crate::counsel::models::Recommendation;

/// Removes every "```json" and then every "```" from `text`.
///
/// Plain substring removal, not a markdown parser: backtick triples anywhere
/// in the text go too, fenced or not. Applying it twice is a no-op.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Strips fences and decodes the remainder as a JSON array, keeping the
/// model's order.
pub fn parse_recommendations(raw: &str) -> Result<Vec<Recommendation>, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(raw))
}
