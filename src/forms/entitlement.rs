use crate::models::SurveyStatus;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct LimitQuery {
    #[serde(default)]
    #[validate(minimum = 0)]
    pub current_usage: i64,
}

impl LimitQuery {
    /// Usage as an unsigned count. Only meaningful after `validate()` passed.
    pub fn usage(&self) -> u64 {
        u64::try_from(self.current_usage).unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SurveyQuery {
    #[serde(default)]
    pub status: SurveyStatus,
}
