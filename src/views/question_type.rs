use crate::models::{Plan, QuestionSettings, QuestionTypeDefinition};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuestionType {
    #[serde(rename = "type")]
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub category_label: &'static str,
    pub icon: &'static str,
    pub plan_required: Option<Plan>,
    pub settings: QuestionSettings,
}

impl From<&QuestionTypeDefinition> for QuestionType {
    fn from(definition: &QuestionTypeDefinition) -> Self {
        Self {
            id: definition.id(),
            name: definition.name,
            description: definition.description,
            category: definition.category.as_str(),
            category_label: definition.category.label(),
            icon: definition.icon,
            plan_required: definition.plan_required,
            settings: definition.settings.clone(),
        }
    }
}

/// Outcome of checking a question being edited.
#[derive(Debug, Serialize)]
pub struct QuestionCheck {
    pub valid: bool,
    pub errors: Vec<String>,
    pub preview: String,
}

impl QuestionCheck {
    pub fn new(errors: Vec<String>, preview: String) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            preview,
        }
    }
}
