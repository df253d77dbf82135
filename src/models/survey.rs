use serde::{Deserialize, Serialize};

/// Lifecycle state of a survey as far as plan rules care.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    #[default]
    Draft,
    Published,
    Closed,
    Archived,
}

impl SurveyStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, SurveyStatus::Published)
    }
}

/// What a plan allows on surveys that are already live.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPolicy {
    pub edit_published: bool,
    pub delete_published: bool,
    pub export: bool,
}

impl SurveyPolicy {
    pub fn unrestricted() -> Self {
        Self {
            edit_published: true,
            delete_published: true,
            export: true,
        }
    }
}
