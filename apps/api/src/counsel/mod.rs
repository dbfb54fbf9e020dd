// Counselling endpoints: justification arguments and vertical recommendations.
// All model calls go through llm_client; nothing here spawns processes itself.

pub mod handlers;
pub mod models;
pub mod output;
pub mod prompts;
