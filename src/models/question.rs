use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A question as the editor holds it while a survey is being built.
///
/// Fields stay loose: the type may be unknown and the settings may not match
/// the type. The registry reports those cases as validation messages.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionInstance {
    /// Missing or non-string types become `""`, which no registry knows.
    #[serde(rename = "type", default, deserialize_with = "type_or_empty")]
    pub question_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub settings: Value,
}

impl QuestionInstance {
    pub fn new(question_type: &str, title: &str, settings: Value) -> Self {
        Self {
            question_type: question_type.to_string(),
            title: Some(title.to_string()),
            settings,
        }
    }

    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .map(|title| !title.trim().is_empty())
            .unwrap_or(false)
    }
}

fn type_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(question_type) => Ok(question_type),
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_type_decodes_as_empty() {
        let question: QuestionInstance = serde_json::from_value(json!({"title": "Q"})).unwrap();
        assert_eq!(question.question_type, "");
        assert!(question.has_title());
        assert_eq!(question.settings, Value::Null);
    }

    #[test]
    fn non_string_type_decodes_as_empty() {
        let question: QuestionInstance =
            serde_json::from_value(json!({"type": 7, "title": "Q"})).unwrap();
        assert_eq!(question.question_type, "");

        let question: QuestionInstance =
            serde_json::from_value(json!({"type": null})).unwrap();
        assert_eq!(question.question_type, "");
    }

    #[test]
    fn string_type_is_kept() {
        let question: QuestionInstance =
            serde_json::from_value(json!({"type": "radio", "title": " "})).unwrap();
        assert_eq!(question.question_type, "radio");
        assert!(!question.has_title());
    }
}
