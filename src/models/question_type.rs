use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{ModelError, Plan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    Textarea,
    Email,
    Number,
    Radio,
    Checkbox,
    Dropdown,
    Rating,
    EmojiSatisfaction,
    EmojiAgreement,
    EmojiQuality,
    EmojiMood,
    EmojiDifficulty,
    EmojiLikelihood,
    EmojiScale,
    EmojiCustom,
    SvgEmojiSatisfaction,
    SvgEmojiMood,
    Scale,
    Nps,
    Matrix,
    Ranking,
    Slider,
    File,
    Date,
    Time,
    Datetime,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 27] = [
        QuestionKind::Text,
        QuestionKind::Textarea,
        QuestionKind::Email,
        QuestionKind::Number,
        QuestionKind::Radio,
        QuestionKind::Checkbox,
        QuestionKind::Dropdown,
        QuestionKind::Rating,
        QuestionKind::EmojiSatisfaction,
        QuestionKind::EmojiAgreement,
        QuestionKind::EmojiQuality,
        QuestionKind::EmojiMood,
        QuestionKind::EmojiDifficulty,
        QuestionKind::EmojiLikelihood,
        QuestionKind::EmojiScale,
        QuestionKind::EmojiCustom,
        QuestionKind::SvgEmojiSatisfaction,
        QuestionKind::SvgEmojiMood,
        QuestionKind::Scale,
        QuestionKind::Nps,
        QuestionKind::Matrix,
        QuestionKind::Ranking,
        QuestionKind::Slider,
        QuestionKind::File,
        QuestionKind::Date,
        QuestionKind::Time,
        QuestionKind::Datetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Textarea => "textarea",
            QuestionKind::Email => "email",
            QuestionKind::Number => "number",
            QuestionKind::Radio => "radio",
            QuestionKind::Checkbox => "checkbox",
            QuestionKind::Dropdown => "dropdown",
            QuestionKind::Rating => "rating",
            QuestionKind::EmojiSatisfaction => "emoji_satisfaction",
            QuestionKind::EmojiAgreement => "emoji_agreement",
            QuestionKind::EmojiQuality => "emoji_quality",
            QuestionKind::EmojiMood => "emoji_mood",
            QuestionKind::EmojiDifficulty => "emoji_difficulty",
            QuestionKind::EmojiLikelihood => "emoji_likelihood",
            QuestionKind::EmojiScale => "emoji_scale",
            QuestionKind::EmojiCustom => "emoji_custom",
            QuestionKind::SvgEmojiSatisfaction => "svg_emoji_satisfaction",
            QuestionKind::SvgEmojiMood => "svg_emoji_mood",
            QuestionKind::Scale => "scale",
            QuestionKind::Nps => "nps",
            QuestionKind::Matrix => "matrix",
            QuestionKind::Ranking => "ranking",
            QuestionKind::Slider => "slider",
            QuestionKind::File => "file",
            QuestionKind::Date => "date",
            QuestionKind::Time => "time",
            QuestionKind::Datetime => "datetime",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownQuestionType(s.to_string()))
    }
}

/// UI grouping of question types in the editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    TextInput,
    Choice,
    RatingScale,
    EmojiVisual,
    Interactive,
    Advanced,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 6] = [
        QuestionCategory::TextInput,
        QuestionCategory::Choice,
        QuestionCategory::RatingScale,
        QuestionCategory::EmojiVisual,
        QuestionCategory::Interactive,
        QuestionCategory::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::TextInput => "text_input",
            QuestionCategory::Choice => "choice",
            QuestionCategory::RatingScale => "rating_scale",
            QuestionCategory::EmojiVisual => "emoji_visual",
            QuestionCategory::Interactive => "interactive",
            QuestionCategory::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionCategory::TextInput => "Text Input",
            QuestionCategory::Choice => "Choice",
            QuestionCategory::RatingScale => "Rating & Scale",
            QuestionCategory::EmojiVisual => "Emoji & Visual",
            QuestionCategory::Interactive => "Interactive",
            QuestionCategory::Advanced => "Advanced",
        }
    }
}

impl FromStr for QuestionCategory {
    type Err = ModelError;

    /// Accepts either the identifier (`rating_scale`) or the label (`Rating & Scale`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        QuestionCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Answer constraints shared by all question types. Only the fields that
/// make sense for a given type are set.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseValidation {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_selections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSettings {
    pub placeholder: String,
    pub max_length: Option<u32>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextareaSettings {
    pub placeholder: String,
    pub rows: Option<u32>,
    pub max_length: Option<u32>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailSettings {
    pub placeholder: String,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberSettings {
    pub placeholder: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoiceSettings {
    pub options: Vec<String>,
    pub allow_other: bool,
    pub other_text: String,
    pub randomize: bool,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxSettings {
    pub options: Vec<String>,
    pub allow_other: bool,
    pub other_text: String,
    pub randomize: bool,
    pub min_selections: Option<u32>,
    pub max_selections: Option<u32>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownSettings {
    pub options: Vec<String>,
    pub placeholder: String,
    pub allow_search: bool,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingSettings {
    pub scale: Option<i64>,
    pub labels: BTreeMap<u32, String>,
    pub validation: ResponseValidation,
}

/// Fixed emoji presets (satisfaction, agreement, mood, ...).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmojiSettings {
    pub scale: Option<i64>,
    pub emojis: Vec<String>,
    pub labels: BTreeMap<u32, String>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmojiScaleSettings {
    pub scale: Option<i64>,
    pub show_labels: bool,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SvgEmojiSettings {
    pub scale: Option<i64>,
    #[serde(rename = "useSVGEmojis")]
    pub use_svg_emojis: bool,
    pub svg_emoji_type: String,
    pub emoji_size: String,
    pub show_labels: bool,
    pub allow_custom_emojis: bool,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleSettings {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_label: String,
    pub max_label: String,
    pub step: Option<f64>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NpsSettings {
    pub min_label: String,
    pub max_label: String,
    pub question: String,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixInput {
    #[default]
    Radio,
    Checkbox,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatrixSettings {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    #[serde(rename = "type")]
    pub input: MatrixInput,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingSettings {
    pub options: Vec<String>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderSettings {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub min_label: String,
    pub max_label: String,
    pub show_value: bool,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSettings {
    pub accepted_types: Vec<String>,
    /// Megabytes.
    pub max_file_size: Option<f64>,
    pub max_files: Option<u32>,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateSettings {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub format: String,
    pub validation: ResponseValidation,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSettings {
    /// "12h" or "24h".
    pub format: String,
    /// Minutes between selectable values.
    pub step: Option<u32>,
    pub validation: ResponseValidation,
}

/// Per-type settings, tagged by the question type they belong to.
///
/// Serialized without the tag: the surrounding object carries `type`.
/// Deserialize through [`QuestionSettings::decode`] which needs the kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionSettings {
    Text(TextSettings),
    Textarea(TextareaSettings),
    Email(EmailSettings),
    Number(NumberSettings),
    Radio(ChoiceSettings),
    Checkbox(CheckboxSettings),
    Dropdown(DropdownSettings),
    Rating(RatingSettings),
    EmojiSatisfaction(EmojiSettings),
    EmojiAgreement(EmojiSettings),
    EmojiQuality(EmojiSettings),
    EmojiMood(EmojiSettings),
    EmojiDifficulty(EmojiSettings),
    EmojiLikelihood(EmojiSettings),
    EmojiScale(EmojiScaleSettings),
    EmojiCustom(SvgEmojiSettings),
    SvgEmojiSatisfaction(SvgEmojiSettings),
    SvgEmojiMood(SvgEmojiSettings),
    Scale(ScaleSettings),
    Nps(NpsSettings),
    Matrix(MatrixSettings),
    Ranking(RankingSettings),
    Slider(SliderSettings),
    File(FileSettings),
    Date(DateSettings),
    Time(TimeSettings),
    Datetime(DateSettings),
}

impl QuestionSettings {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionSettings::Text(_) => QuestionKind::Text,
            QuestionSettings::Textarea(_) => QuestionKind::Textarea,
            QuestionSettings::Email(_) => QuestionKind::Email,
            QuestionSettings::Number(_) => QuestionKind::Number,
            QuestionSettings::Radio(_) => QuestionKind::Radio,
            QuestionSettings::Checkbox(_) => QuestionKind::Checkbox,
            QuestionSettings::Dropdown(_) => QuestionKind::Dropdown,
            QuestionSettings::Rating(_) => QuestionKind::Rating,
            QuestionSettings::EmojiSatisfaction(_) => QuestionKind::EmojiSatisfaction,
            QuestionSettings::EmojiAgreement(_) => QuestionKind::EmojiAgreement,
            QuestionSettings::EmojiQuality(_) => QuestionKind::EmojiQuality,
            QuestionSettings::EmojiMood(_) => QuestionKind::EmojiMood,
            QuestionSettings::EmojiDifficulty(_) => QuestionKind::EmojiDifficulty,
            QuestionSettings::EmojiLikelihood(_) => QuestionKind::EmojiLikelihood,
            QuestionSettings::EmojiScale(_) => QuestionKind::EmojiScale,
            QuestionSettings::EmojiCustom(_) => QuestionKind::EmojiCustom,
            QuestionSettings::SvgEmojiSatisfaction(_) => QuestionKind::SvgEmojiSatisfaction,
            QuestionSettings::SvgEmojiMood(_) => QuestionKind::SvgEmojiMood,
            QuestionSettings::Scale(_) => QuestionKind::Scale,
            QuestionSettings::Nps(_) => QuestionKind::Nps,
            QuestionSettings::Matrix(_) => QuestionKind::Matrix,
            QuestionSettings::Ranking(_) => QuestionKind::Ranking,
            QuestionSettings::Slider(_) => QuestionKind::Slider,
            QuestionSettings::File(_) => QuestionKind::File,
            QuestionSettings::Date(_) => QuestionKind::Date,
            QuestionSettings::Time(_) => QuestionKind::Time,
            QuestionSettings::Datetime(_) => QuestionKind::Datetime,
        }
    }

    /// Decode settings sent by the editor for a question of the given kind.
    ///
    /// Missing fields take empty defaults so partially filled settings still
    /// decode; `null` decodes like an empty object.
    pub fn decode(kind: QuestionKind, value: Value) -> Result<Self, serde_json::Error> {
        use serde_json::from_value as parse;

        let value = match value {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        let settings = match kind {
            QuestionKind::Text => QuestionSettings::Text(parse(value)?),
            QuestionKind::Textarea => QuestionSettings::Textarea(parse(value)?),
            QuestionKind::Email => QuestionSettings::Email(parse(value)?),
            QuestionKind::Number => QuestionSettings::Number(parse(value)?),
            QuestionKind::Radio => QuestionSettings::Radio(parse(value)?),
            QuestionKind::Checkbox => QuestionSettings::Checkbox(parse(value)?),
            QuestionKind::Dropdown => QuestionSettings::Dropdown(parse(value)?),
            QuestionKind::Rating => QuestionSettings::Rating(parse(value)?),
            QuestionKind::EmojiSatisfaction => QuestionSettings::EmojiSatisfaction(parse(value)?),
            QuestionKind::EmojiAgreement => QuestionSettings::EmojiAgreement(parse(value)?),
            QuestionKind::EmojiQuality => QuestionSettings::EmojiQuality(parse(value)?),
            QuestionKind::EmojiMood => QuestionSettings::EmojiMood(parse(value)?),
            QuestionKind::EmojiDifficulty => QuestionSettings::EmojiDifficulty(parse(value)?),
            QuestionKind::EmojiLikelihood => QuestionSettings::EmojiLikelihood(parse(value)?),
            QuestionKind::EmojiScale => QuestionSettings::EmojiScale(parse(value)?),
            QuestionKind::EmojiCustom => QuestionSettings::EmojiCustom(parse(value)?),
            QuestionKind::SvgEmojiSatisfaction => {
                QuestionSettings::SvgEmojiSatisfaction(parse(value)?)
            }
            QuestionKind::SvgEmojiMood => QuestionSettings::SvgEmojiMood(parse(value)?),
            QuestionKind::Scale => QuestionSettings::Scale(parse(value)?),
            QuestionKind::Nps => QuestionSettings::Nps(parse(value)?),
            QuestionKind::Matrix => QuestionSettings::Matrix(parse(value)?),
            QuestionKind::Ranking => QuestionSettings::Ranking(parse(value)?),
            QuestionKind::Slider => QuestionSettings::Slider(parse(value)?),
            QuestionKind::File => QuestionSettings::File(parse(value)?),
            QuestionKind::Date => QuestionSettings::Date(parse(value)?),
            QuestionKind::Time => QuestionSettings::Time(parse(value)?),
            QuestionKind::Datetime => QuestionSettings::Datetime(parse(value)?),
        };

        Ok(settings)
    }

    /// Answer options for the types that have a list of them.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionSettings::Radio(s) => Some(&s.options),
            QuestionSettings::Checkbox(s) => Some(&s.options),
            QuestionSettings::Dropdown(s) => Some(&s.options),
            QuestionSettings::Ranking(s) => Some(&s.options),
            _ => None,
        }
    }
}

/// One entry of the question type catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionTypeDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub category: QuestionCategory,
    pub icon: &'static str,
    /// Lowest plan that may use this type; `None` means everyone.
    pub plan_required: Option<Plan>,
    pub settings: QuestionSettings,
}

impl QuestionTypeDefinition {
    pub fn kind(&self) -> QuestionKind {
        self.settings.kind()
    }

    pub fn id(&self) -> &'static str {
        self.kind().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_kind_parses_from_its_identifier() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.as_str().parse::<QuestionKind>(), Ok(kind));
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                Value::String(kind.as_str().to_string())
            );
        }
        assert!("multiple_choice".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn every_kind_decodes_empty_settings_into_its_own_variant() {
        for kind in QuestionKind::ALL {
            let settings = QuestionSettings::decode(kind, Value::Null).unwrap();
            assert_eq!(settings.kind(), kind);
        }
    }

    #[test]
    fn categories_parse_from_id_or_label() {
        assert_eq!(
            "rating_scale".parse::<QuestionCategory>(),
            Ok(QuestionCategory::RatingScale)
        );
        assert_eq!(
            "emoji & visual".parse::<QuestionCategory>(),
            Ok(QuestionCategory::EmojiVisual)
        );
        assert!("Misc".parse::<QuestionCategory>().is_err());
    }

    #[test]
    fn matrix_settings_use_editor_field_names() {
        let settings = QuestionSettings::decode(
            QuestionKind::Matrix,
            json!({ "rows": ["a"], "columns": ["x", "y"], "type": "checkbox" }),
        )
        .unwrap();

        match settings {
            QuestionSettings::Matrix(m) => {
                assert_eq!(m.rows, vec!["a"]);
                assert_eq!(m.columns.len(), 2);
                assert_eq!(m.input, MatrixInput::Checkbox);
            }
            other => panic!("unexpected settings {:?}", other),
        }
    }

    #[test]
    fn svg_flag_keeps_its_original_casing() {
        let settings = QuestionSettings::decode(
            QuestionKind::EmojiCustom,
            json!({ "useSVGEmojis": true, "svgEmojiType": "mood" }),
        )
        .unwrap();
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["useSVGEmojis"], json!(true));
        assert_eq!(value["svgEmojiType"], json!("mood"));
    }

    #[test]
    fn mistyped_settings_fail_to_decode() {
        let result = QuestionSettings::decode(QuestionKind::Matrix, json!({ "rows": 3 }));
        assert!(result.is_err());
    }
}
