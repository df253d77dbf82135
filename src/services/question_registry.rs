use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashSet};

use crate::models::{
    CheckboxSettings, ChoiceSettings, DateSettings, DropdownSettings, EmailSettings,
    EmojiScaleSettings, EmojiSettings, EntitlementContext, FileSettings, MatrixInput,
    MatrixSettings, NpsSettings, NumberSettings, Plan, QuestionCategory, QuestionInstance,
    QuestionKind, QuestionSettings, QuestionTypeDefinition, RankingSettings, RatingSettings,
    ResponseValidation, Role, ScaleSettings, SliderSettings, SvgEmojiSettings, TextSettings,
    TextareaSettings, TimeSettings,
};

pub const INVALID_TYPE_MESSAGE: &str = "Invalid question type";
const MAX_FILE_SIZE_MB: f64 = 100.0;

/// Read-only catalog of question types, in declaration order.
#[derive(Debug, Clone)]
pub struct QuestionTypeRegistry {
    definitions: Vec<QuestionTypeDefinition>,
}

lazy_static! {
    static ref BUILTIN: QuestionTypeRegistry =
        QuestionTypeRegistry::from_definitions(builtin_definitions());
}

impl QuestionTypeRegistry {
    /// Build a registry keeping the first definition of each type.
    /// Later duplicates are dropped and logged.
    pub fn from_definitions(definitions: Vec<QuestionTypeDefinition>) -> Self {
        let mut seen = HashSet::new();
        let definitions = definitions
            .into_iter()
            .filter(|definition| {
                let fresh = seen.insert(definition.kind());
                if !fresh {
                    tracing::error!(question_type = %definition.id(), "Duplicate question type definition dropped");
                }
                fresh
            })
            .collect();

        Self { definitions }
    }

    pub fn builtin() -> &'static QuestionTypeRegistry {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&QuestionTypeDefinition> {
        self.definitions.iter().find(|definition| definition.id() == id)
    }

    pub fn get_kind(&self, kind: QuestionKind) -> Option<&QuestionTypeDefinition> {
        self.definitions.iter().find(|definition| definition.kind() == kind)
    }

    pub fn list_all(&self) -> &[QuestionTypeDefinition] {
        &self.definitions
    }

    pub fn list_by_category(&self, category: QuestionCategory) -> Vec<&QuestionTypeDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.category == category)
            .collect()
    }

    /// Case-insensitive substring match on category labels, the way the
    /// editor's palette search works ("emoji" finds "Emoji & Visual").
    pub fn search_by_category(&self, needle: &str) -> Vec<&QuestionTypeDefinition> {
        let needle = needle.trim().to_lowercase();
        self.definitions
            .iter()
            .filter(|definition| definition.category.label().to_lowercase().contains(&needle))
            .collect()
    }

    /// Types a caller on `plan` with `role` may add to a survey.
    pub fn list_allowed_for_plan(&self, plan: Plan, role: Role) -> Vec<&QuestionTypeDefinition> {
        let context = EntitlementContext::new(plan, role);
        self.definitions
            .iter()
            .filter(|definition| context.satisfies(definition.plan_required))
            .collect()
    }

    /// Unknown types are reported as accessible; adding them fails validation instead.
    pub fn has_access(&self, id: &str, plan: Plan, role: Role) -> bool {
        let context = EntitlementContext::new(plan, role);
        self.get(id)
            .map(|definition| context.satisfies(definition.plan_required))
            .unwrap_or(true)
    }

    /// Fresh copy of the type's default settings, owned by the caller.
    pub fn default_settings_for(&self, id: &str) -> Option<QuestionSettings> {
        self.get(id).map(|definition| definition.settings.clone())
    }

    /// Check a question being edited. An empty list means valid.
    pub fn validate(&self, question: &QuestionInstance) -> Vec<String> {
        let Some(definition) = self.get(&question.question_type) else {
            return vec![INVALID_TYPE_MESSAGE.to_string()];
        };

        let mut errors = vec![];

        if !question.has_title() {
            errors.push("Question title is required".to_string());
        }

        match QuestionSettings::decode(definition.kind(), question.settings.clone()) {
            Ok(settings) => validate_settings(&settings, &mut errors),
            Err(err) => errors.push(format!(
                "Invalid settings for {} question: {}",
                definition.id(),
                err
            )),
        }

        errors
    }

    /// One-line summary for question lists, e.g. "Matrix Question (3×5)".
    pub fn preview(&self, question: &QuestionInstance) -> String {
        let Some(definition) = self.get(&question.question_type) else {
            return INVALID_TYPE_MESSAGE.to_string();
        };

        let settings = match QuestionSettings::decode(definition.kind(), question.settings.clone()) {
            Ok(settings) => settings,
            Err(_) => return definition.name.to_string(),
        };

        let detail = match &settings {
            QuestionSettings::Radio(_)
            | QuestionSettings::Checkbox(_)
            | QuestionSettings::Dropdown(_) => settings
                .options()
                .filter(|options| !options.is_empty())
                .map(|options| format!("{} options", options.len())),
            QuestionSettings::Rating(rating) => rating.scale.map(|scale| format!("1-{}", scale)),
            QuestionSettings::Scale(scale) => match (scale.min, scale.max) {
                (Some(min), Some(max)) => Some(format!("{}-{}", min, max)),
                _ => None,
            },
            QuestionSettings::Matrix(matrix)
                if !matrix.rows.is_empty() || !matrix.columns.is_empty() =>
            {
                Some(format!("{}×{}", matrix.rows.len(), matrix.columns.len()))
            }
            _ => None,
        };

        match detail {
            Some(detail) => format!("{} ({})", definition.name, detail),
            None => definition.name.to_string(),
        }
    }
}

fn validate_settings(settings: &QuestionSettings, errors: &mut Vec<String>) {
    match settings {
        QuestionSettings::Radio(_)
        | QuestionSettings::Checkbox(_)
        | QuestionSettings::Dropdown(_) => {
            if settings.options().map_or(0, <[String]>::len) < 2 {
                errors.push("At least 2 options are required".to_string());
            }
        }
        QuestionSettings::Rating(rating) => {
            if let Some(scale) = rating.scale {
                if !(1..=10).contains(&scale) {
                    errors.push("Rating scale must be between 1 and 10".to_string());
                }
            }
        }
        QuestionSettings::Scale(ScaleSettings { min, max, .. })
        | QuestionSettings::Slider(SliderSettings { min, max, .. }) => {
            if let (Some(min), Some(max)) = (min, max) {
                if min >= max {
                    errors.push("Minimum value must be less than maximum value".to_string());
                }
            }
        }
        QuestionSettings::Matrix(matrix) => {
            if matrix.rows.is_empty() {
                errors.push("At least 1 row is required for matrix questions".to_string());
            }
            if matrix.columns.len() < 2 {
                errors.push("At least 2 columns are required for matrix questions".to_string());
            }
        }
        QuestionSettings::Ranking(ranking) => {
            if ranking.options.len() < 2 {
                errors.push("At least 2 options are required for ranking".to_string());
            }
        }
        QuestionSettings::File(file) => {
            if file.max_file_size.is_some_and(|size| size > MAX_FILE_SIZE_MB) {
                errors.push("Maximum file size cannot exceed 100MB".to_string());
            }
        }
        _ => {}
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn labels(values: &[&str]) -> BTreeMap<u32, String> {
    values
        .iter()
        .enumerate()
        .map(|(index, label)| (index as u32 + 1, label.to_string()))
        .collect()
}

fn optional() -> ResponseValidation {
    ResponseValidation::default()
}

fn emoji_preset(emojis: &[&str], names: &[&str]) -> EmojiSettings {
    EmojiSettings {
        scale: Some(emojis.len() as i64),
        emojis: strings(emojis),
        labels: labels(names),
        validation: optional(),
    }
}

fn svg_emoji(svg_emoji_type: &str, emoji_size: &str, allow_custom_emojis: bool) -> SvgEmojiSettings {
    SvgEmojiSettings {
        scale: Some(5),
        use_svg_emojis: true,
        svg_emoji_type: svg_emoji_type.to_string(),
        emoji_size: emoji_size.to_string(),
        show_labels: true,
        allow_custom_emojis,
        validation: optional(),
    }
}

fn definition(
    name: &'static str,
    description: &'static str,
    category: QuestionCategory,
    icon: &'static str,
    plan_required: Option<Plan>,
    settings: QuestionSettings,
) -> QuestionTypeDefinition {
    QuestionTypeDefinition {
        name,
        description,
        category,
        icon,
        plan_required,
        settings,
    }
}

fn builtin_definitions() -> Vec<QuestionTypeDefinition> {
    use QuestionCategory::*;

    let default_options = || strings(&["Option 1", "Option 2", "Option 3"]);

    vec![
        definition(
            "Short Text",
            "Single line text input",
            TextInput,
            "📝",
            None,
            QuestionSettings::Text(TextSettings {
                placeholder: "Enter your answer...".to_string(),
                max_length: Some(255),
                validation: ResponseValidation {
                    min_length: Some(0),
                    max_length: Some(255),
                    ..optional()
                },
            }),
        ),
        definition(
            "Long Text",
            "Multi-line text input",
            TextInput,
            "📄",
            None,
            QuestionSettings::Textarea(TextareaSettings {
                placeholder: "Enter your detailed answer...".to_string(),
                rows: Some(4),
                max_length: Some(2000),
                validation: ResponseValidation {
                    min_length: Some(0),
                    max_length: Some(2000),
                    ..optional()
                },
            }),
        ),
        definition(
            "Email Address",
            "Email input with validation",
            TextInput,
            "📧",
            None,
            QuestionSettings::Email(EmailSettings {
                placeholder: "example@email.com".to_string(),
                validation: ResponseValidation {
                    format: Some("email".to_string()),
                    ..optional()
                },
            }),
        ),
        definition(
            "Number",
            "Numeric input",
            TextInput,
            "🔢",
            None,
            QuestionSettings::Number(NumberSettings {
                placeholder: "Enter a number...".to_string(),
                min: None,
                max: None,
                step: Some(1.0),
                validation: optional(),
            }),
        ),
        definition(
            "Single Choice",
            "Select one option from multiple choices",
            Choice,
            "🔘",
            None,
            QuestionSettings::Radio(ChoiceSettings {
                options: default_options(),
                allow_other: false,
                other_text: "Other".to_string(),
                randomize: false,
                validation: optional(),
            }),
        ),
        definition(
            "Multiple Choice",
            "Select multiple options",
            Choice,
            "☑️",
            None,
            QuestionSettings::Checkbox(CheckboxSettings {
                options: default_options(),
                allow_other: false,
                other_text: "Other".to_string(),
                randomize: false,
                min_selections: Some(1),
                max_selections: None,
                validation: ResponseValidation {
                    min_selections: Some(1),
                    ..optional()
                },
            }),
        ),
        definition(
            "Dropdown",
            "Select from dropdown menu",
            Choice,
            "📋",
            None,
            QuestionSettings::Dropdown(DropdownSettings {
                options: default_options(),
                placeholder: "Select an option...".to_string(),
                allow_search: false,
                validation: optional(),
            }),
        ),
        definition(
            "Star Rating",
            "Rate using stars (1-5)",
            RatingScale,
            "⭐",
            None,
            QuestionSettings::Rating(RatingSettings {
                scale: Some(5),
                labels: labels(&["Poor", "Fair", "Good", "Very Good", "Excellent"]),
                validation: optional(),
            }),
        ),
        definition(
            "Emoji Satisfaction",
            "Rate satisfaction using emoji faces",
            EmojiVisual,
            "😊",
            None,
            QuestionSettings::EmojiSatisfaction(emoji_preset(
                &["😞", "😐", "🙂", "😊", "😍"],
                &[
                    "Very Dissatisfied",
                    "Dissatisfied",
                    "Neutral",
                    "Satisfied",
                    "Very Satisfied",
                ],
            )),
        ),
        definition(
            "Emoji Agreement",
            "Show agreement level with emojis",
            EmojiVisual,
            "👍",
            None,
            QuestionSettings::EmojiAgreement(emoji_preset(
                &["👎", "😕", "😐", "👍", "💯"],
                &[
                    "Strongly Disagree",
                    "Disagree",
                    "Neutral",
                    "Agree",
                    "Strongly Agree",
                ],
            )),
        ),
        definition(
            "Emoji Quality",
            "Rate quality with fun emojis",
            EmojiVisual,
            "⭐",
            None,
            QuestionSettings::EmojiQuality(emoji_preset(
                &["💩", "👎", "👍", "⭐"],
                &["Poor", "Fair", "Good", "Excellent"],
            )),
        ),
        definition(
            "Emoji Mood",
            "Capture mood with expressive emojis",
            EmojiVisual,
            "😄",
            None,
            QuestionSettings::EmojiMood(emoji_preset(
                &["😭", "😢", "😔", "😐", "🙂", "😊", "😄"],
                &[
                    "Very Sad",
                    "Sad",
                    "Disappointed",
                    "Neutral",
                    "Happy",
                    "Very Happy",
                    "Ecstatic",
                ],
            )),
        ),
        definition(
            "Emoji Difficulty",
            "Rate difficulty level with emojis",
            EmojiVisual,
            "🤯",
            None,
            QuestionSettings::EmojiDifficulty(emoji_preset(
                &["😴", "😌", "😰", "🤯"],
                &["Very Easy", "Easy", "Hard", "Very Hard"],
            )),
        ),
        definition(
            "Emoji Likelihood",
            "Show likelihood with visual emojis",
            EmojiVisual,
            "✅",
            Some(Plan::Pro),
            QuestionSettings::EmojiLikelihood(emoji_preset(
                &["❌", "🤔", "✅", "💯"],
                &["Never", "Maybe", "Likely", "Definitely"],
            )),
        ),
        definition(
            "Emoji Scale",
            "Rate using emoji expressions",
            EmojiVisual,
            "😊",
            None,
            QuestionSettings::EmojiScale(EmojiScaleSettings {
                scale: Some(5),
                show_labels: true,
                validation: optional(),
            }),
        ),
        definition(
            "Custom Emoji Scale",
            "Create your own emoji rating scale with SVG emojis",
            EmojiVisual,
            "🎨",
            Some(Plan::Pro),
            QuestionSettings::EmojiCustom(svg_emoji("satisfaction", "md", true)),
        ),
        definition(
            "SVG Emoji Satisfaction",
            "Beautiful SVG emoji satisfaction scale",
            Interactive,
            "😊",
            Some(Plan::Pro),
            QuestionSettings::SvgEmojiSatisfaction(svg_emoji("satisfaction", "lg", false)),
        ),
        definition(
            "SVG Emoji Mood",
            "Interactive SVG emoji mood tracker",
            Interactive,
            "😄",
            Some(Plan::Pro),
            QuestionSettings::SvgEmojiMood(svg_emoji("mood", "lg", false)),
        ),
        definition(
            "Likert Scale",
            "Rate on a scale (1-10)",
            RatingScale,
            "📊",
            Some(Plan::Pro),
            QuestionSettings::Scale(ScaleSettings {
                min: Some(1.0),
                max: Some(10.0),
                min_label: "Strongly Disagree".to_string(),
                max_label: "Strongly Agree".to_string(),
                step: Some(1.0),
                validation: optional(),
            }),
        ),
        definition(
            "NPS Score",
            "Net Promoter Score (0-10)",
            RatingScale,
            "📈",
            Some(Plan::Pro),
            QuestionSettings::Nps(NpsSettings {
                min_label: "Not at all likely".to_string(),
                max_label: "Extremely likely".to_string(),
                question: "How likely are you to recommend this to a friend?".to_string(),
                validation: optional(),
            }),
        ),
        definition(
            "Matrix Question",
            "Rate multiple items on the same scale",
            Advanced,
            "📋",
            Some(Plan::Enterprise),
            QuestionSettings::Matrix(MatrixSettings {
                rows: strings(&["Item 1", "Item 2", "Item 3"]),
                columns: strings(&["Poor", "Fair", "Good", "Very Good", "Excellent"]),
                input: MatrixInput::Radio,
                validation: optional(),
            }),
        ),
        definition(
            "Ranking",
            "Rank items in order of preference",
            Advanced,
            "🏆",
            Some(Plan::Enterprise),
            QuestionSettings::Ranking(RankingSettings {
                options: strings(&["Option 1", "Option 2", "Option 3", "Option 4"]),
                validation: optional(),
            }),
        ),
        definition(
            "Slider",
            "Select value using a slider",
            Advanced,
            "🎚️",
            Some(Plan::Enterprise),
            QuestionSettings::Slider(SliderSettings {
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
                min_label: "Minimum".to_string(),
                max_label: "Maximum".to_string(),
                show_value: true,
                validation: optional(),
            }),
        ),
        definition(
            "File Upload",
            "Upload files or images",
            Advanced,
            "📎",
            Some(Plan::Enterprise),
            QuestionSettings::File(FileSettings {
                accepted_types: strings(&["image/*", ".pdf", ".doc", ".docx"]),
                max_file_size: Some(10.0),
                max_files: Some(1),
                validation: optional(),
            }),
        ),
        definition(
            "Date",
            "Select a date",
            Advanced,
            "📅",
            Some(Plan::Enterprise),
            QuestionSettings::Date(DateSettings {
                min_date: None,
                max_date: None,
                format: "YYYY-MM-DD".to_string(),
                validation: optional(),
            }),
        ),
        definition(
            "Time",
            "Select a time",
            Advanced,
            "⏰",
            Some(Plan::Enterprise),
            QuestionSettings::Time(TimeSettings {
                format: "24h".to_string(),
                step: Some(15),
                validation: optional(),
            }),
        ),
        definition(
            "Date & Time",
            "Select date and time",
            Advanced,
            "📅",
            Some(Plan::Enterprise),
            QuestionSettings::Datetime(DateSettings {
                min_date: None,
                max_date: None,
                format: "YYYY-MM-DD HH:mm".to_string(),
                validation: optional(),
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> &'static QuestionTypeRegistry {
        QuestionTypeRegistry::builtin()
    }

    #[test]
    fn builtin_registry_declares_every_kind_once() {
        assert_eq!(registry().len(), QuestionKind::ALL.len());
        for kind in QuestionKind::ALL {
            assert!(registry().get_kind(kind).is_some(), "{kind} missing");
        }
    }

    #[test]
    fn listing_keeps_declaration_order() {
        let ids: Vec<_> = registry().list_all().iter().map(|d| d.id()).collect();
        assert_eq!(&ids[..4], &["text", "textarea", "email", "number"]);
        assert_eq!(ids.last(), Some(&"datetime"));
    }

    #[test]
    fn duplicates_keep_first_declaration() {
        let first = registry().get("text").unwrap().clone();
        let mut second = first.clone();
        second.name = "Shadow";

        let custom = QuestionTypeRegistry::from_definitions(vec![first, second]);
        assert_eq!(custom.len(), 1);
        assert_eq!(custom.get("text").unwrap().name, "Short Text");
    }

    #[test]
    fn get_unknown_type_is_none() {
        assert!(registry().get("hologram").is_none());
        assert!(registry().default_settings_for("hologram").is_none());
    }

    #[test]
    fn list_by_category_filters_exactly() {
        let choice: Vec<_> = registry()
            .list_by_category(QuestionCategory::Choice)
            .iter()
            .map(|d| d.id())
            .collect();
        assert_eq!(choice, vec!["radio", "checkbox", "dropdown"]);

        let interactive = registry().list_by_category(QuestionCategory::Interactive);
        assert_eq!(interactive.len(), 2);
    }

    #[test]
    fn search_by_category_matches_label_substrings() {
        let emoji = registry().search_by_category("EMOJI");
        assert!(!emoji.is_empty());
        assert!(emoji
            .iter()
            .all(|d| d.category == QuestionCategory::EmojiVisual));
        assert!(registry().search_by_category("nothing like this").is_empty());
    }

    #[test]
    fn free_user_gets_only_ungated_types() {
        let allowed = registry().list_allowed_for_plan(Plan::Free, Role::User);
        assert!(!allowed.is_empty());
        assert!(allowed.iter().all(|d| d.plan_required.is_none()));

        let gated = registry()
            .list_all()
            .iter()
            .filter(|d| d.plan_required.is_some())
            .count();
        assert_eq!(allowed.len() + gated, registry().len());
    }

    #[test]
    fn pro_user_gets_pro_types_but_not_enterprise() {
        let allowed = registry().list_allowed_for_plan(Plan::Pro, Role::User);
        assert!(allowed.iter().any(|d| d.id() == "nps"));
        assert!(!allowed.iter().any(|d| d.id() == "matrix"));
        assert!(allowed
            .iter()
            .all(|d| d.plan_required != Some(Plan::Enterprise)));
    }

    #[test]
    fn super_admin_gets_full_registry_on_any_plan() {
        let allowed = registry().list_allowed_for_plan(Plan::Free, Role::SuperAdmin);
        assert_eq!(allowed.len(), registry().len());
    }

    #[test]
    fn admin_role_does_not_bypass_plan() {
        let allowed = registry().list_allowed_for_plan(Plan::Free, Role::Admin);
        assert!(!allowed.iter().any(|d| d.id() == "matrix"));
    }

    #[test]
    fn has_access_checks_single_type() {
        assert!(registry().has_access("text", Plan::Free, Role::User));
        assert!(!registry().has_access("slider", Plan::Pro, Role::User));
        assert!(registry().has_access("slider", Plan::Enterprise, Role::User));
        assert!(registry().has_access("slider", Plan::Free, Role::SuperAdmin));
    }

    #[test]
    fn default_settings_are_independent_copies() {
        let mut first = registry().default_settings_for("radio").unwrap();
        let second = registry().default_settings_for("radio").unwrap();

        if let QuestionSettings::Radio(choice) = &mut first {
            choice.options.push("Option 4".to_string());
            choice.randomize = true;
        } else {
            panic!("radio defaults have the wrong shape");
        }

        assert_ne!(first, second);
        assert_eq!(second, registry().get("radio").unwrap().settings);
        assert_eq!(second.options().unwrap().len(), 3);
    }

    #[test]
    fn default_settings_pass_validation() {
        for definition in registry().list_all() {
            let question = QuestionInstance::new(
                definition.id(),
                "Title",
                serde_json::to_value(&definition.settings).unwrap(),
            );
            assert_eq!(registry().validate(&question), Vec::<String>::new(), "{}", definition.id());
        }
    }

    #[test]
    fn unknown_type_reports_single_error() {
        let question = QuestionInstance::new("hologram", "", json!(null));
        assert_eq!(registry().validate(&question), vec![INVALID_TYPE_MESSAGE]);

        let untyped: QuestionInstance = serde_json::from_value(json!({"title": "Q"})).unwrap();
        assert_eq!(registry().validate(&untyped), vec![INVALID_TYPE_MESSAGE]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let question = QuestionInstance::new("text", "   ", json!({}));
        assert_eq!(registry().validate(&question), vec!["Question title is required"]);

        let untitled = QuestionInstance {
            question_type: "text".to_string(),
            title: None,
            settings: json!({}),
        };
        assert_eq!(registry().validate(&untitled).len(), 1);
    }

    #[test]
    fn choice_types_need_two_options() {
        for id in ["radio", "checkbox", "dropdown"] {
            let one = QuestionInstance::new(id, "Pick", json!({ "options": ["only"] }));
            assert_eq!(
                registry().validate(&one),
                vec!["At least 2 options are required"],
                "{id}"
            );

            let missing = QuestionInstance::new(id, "Pick", json!({}));
            assert_eq!(registry().validate(&missing).len(), 1, "{id}");

            let two = QuestionInstance::new(id, "Pick", json!({ "options": ["a", "b"] }));
            assert!(registry().validate(&two).is_empty(), "{id}");
        }
    }

    #[test]
    fn ranking_needs_two_options() {
        let question = QuestionInstance::new("ranking", "Rank", json!({ "options": ["a"] }));
        assert_eq!(
            registry().validate(&question),
            vec!["At least 2 options are required for ranking"]
        );
    }

    #[test]
    fn rating_scale_bounds() {
        let zero = QuestionInstance::new("rating", "Rate", json!({ "scale": 0 }));
        assert_eq!(
            registry().validate(&zero),
            vec!["Rating scale must be between 1 and 10"]
        );
        let eleven = QuestionInstance::new("rating", "Rate", json!({ "scale": 11 }));
        assert_eq!(registry().validate(&eleven).len(), 1);
        let ten = QuestionInstance::new("rating", "Rate", json!({ "scale": 10 }));
        assert!(registry().validate(&ten).is_empty());
    }

    #[test]
    fn numeric_scales_need_min_below_max() {
        for id in ["scale", "slider"] {
            let equal = QuestionInstance::new(id, "How much", json!({ "min": 5, "max": 5 }));
            assert_eq!(
                registry().validate(&equal),
                vec!["Minimum value must be less than maximum value"],
                "{id}"
            );
            let ok = QuestionInstance::new(id, "How much", json!({ "min": 0, "max": 5 }));
            assert!(registry().validate(&ok).is_empty(), "{id}");
        }
    }

    #[test]
    fn matrix_without_rows_is_rejected() {
        let question = QuestionInstance::new(
            "matrix",
            "Grid",
            json!({ "rows": [], "columns": ["x", "y"] }),
        );
        let errors = registry().validate(&question);
        assert_eq!(errors, vec!["At least 1 row is required for matrix questions"]);
    }

    #[test]
    fn matrix_with_one_row_two_columns_is_valid() {
        let question = QuestionInstance::new(
            "matrix",
            "Grid",
            json!({ "rows": ["a"], "columns": ["x", "y"] }),
        );
        assert!(registry().validate(&question).is_empty());
    }

    #[test]
    fn matrix_needs_two_columns() {
        let question =
            QuestionInstance::new("matrix", "Grid", json!({ "rows": ["a"], "columns": ["x"] }));
        assert_eq!(
            registry().validate(&question),
            vec!["At least 2 columns are required for matrix questions"]
        );
    }

    #[test]
    fn file_size_is_capped() {
        let question = QuestionInstance::new("file", "Upload", json!({ "maxFileSize": 250 }));
        assert_eq!(
            registry().validate(&question),
            vec!["Maximum file size cannot exceed 100MB"]
        );
    }

    #[test]
    fn mistyped_settings_are_reported_not_thrown() {
        let question = QuestionInstance::new("matrix", "Grid", json!({ "rows": "abc" }));
        let errors = registry().validate(&question);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Invalid settings for matrix question"));
    }

    #[test]
    fn preview_summarises_shape() {
        let matrix = QuestionInstance::new(
            "matrix",
            "Grid",
            json!({ "rows": ["a", "b", "c"], "columns": ["1", "2", "3", "4", "5"] }),
        );
        assert_eq!(registry().preview(&matrix), "Matrix Question (3×5)");

        let radio = QuestionInstance::new("radio", "Pick", json!({ "options": ["a", "b"] }));
        assert_eq!(registry().preview(&radio), "Single Choice (2 options)");

        let rating = QuestionInstance::new("rating", "Rate", json!({ "scale": 7 }));
        assert_eq!(registry().preview(&rating), "Star Rating (1-7)");

        let text = QuestionInstance::new("text", "Name", json!({}));
        assert_eq!(registry().preview(&text), "Short Text");

        let unknown = QuestionInstance::new("hologram", "?", json!({}));
        assert_eq!(registry().preview(&unknown), INVALID_TYPE_MESSAGE);
    }
}
