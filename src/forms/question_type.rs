use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Filters for the question type palette.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct QuestionTypeQuery {
    /// Category id or label, e.g. `choice` or `Rating & Scale`.
    #[validate(max_length = 64)]
    pub category: Option<String>,
    /// Only list types the caller's plan may use.
    #[serde(default)]
    pub allowed: bool,
}
