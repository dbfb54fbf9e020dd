use serde::{Deserialize, Deserializer, Serialize};

/// Absent and `null` both decode to the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/arguments`. Absent or `null` fields decode as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArgumentRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub recommendation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: String,
}

/// Body of `POST /api/recommend`. No field is required; empty strings are
/// passed through to the prompt unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub education: String,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_experience: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub physical_disability: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sole_earner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub english_language_preference: String,
    #[serde(deserialize_with = "null_as_default")]
    pub personal_preference: String,
}

/// One suggested vertical as returned by the model.
///
/// Missing or `null` fields fall back to their zero value; extra fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(deserialize_with = "null_as_default")]
    pub vertical: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub justification: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
}
