use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{QuestionCategory, QuestionInstance, QuestionTypeDefinition, UserProfile};
use crate::services::QuestionTypeRegistry;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use serde_valid::Validate;

/// Palette listing. `category` accepts an id, a label, or a fragment of a
/// label; `allowed=true` hides types the caller's plan may not use.
#[tracing::instrument(name = "List question types.", skip(registry))]
#[get("")]
pub async fn list_handler(
    query: web::Query<forms::QuestionTypeQuery>,
    profile: UserProfile,
    registry: web::Data<&'static QuestionTypeRegistry>,
) -> Result<impl Responder> {
    if let Err(errors) = query.validate() {
        return Err(JsonResponse::<views::question_type::QuestionType>::build()
            .form_error(errors.to_string()));
    }

    let mut definitions: Vec<&QuestionTypeDefinition> = match query.category.as_deref() {
        None => registry.list_all().iter().collect(),
        Some(category) => match category.parse::<QuestionCategory>() {
            Ok(category) => registry.list_by_category(category),
            Err(_) => registry.search_by_category(category),
        },
    };

    if query.allowed {
        let context = profile.context();
        let allowed = registry.list_allowed_for_plan(context.plan, context.role);
        definitions.retain(|definition| allowed.iter().any(|a| a.kind() == definition.kind()));
    }

    let list = definitions
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::question_type::QuestionType>>();

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}

#[tracing::instrument(name = "Get question type.", skip(registry))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    registry: web::Data<&'static QuestionTypeRegistry>,
) -> Result<impl Responder> {
    let id = path.into_inner().0;
    let definition = registry.get(&id).ok_or_else(|| {
        JsonResponse::<views::question_type::QuestionType>::build()
            .not_found("Question type not found")
    })?;

    Ok(JsonResponse::build()
        .set_item(views::question_type::QuestionType::from(definition))
        .ok("OK"))
}

#[tracing::instrument(name = "Get question type defaults.", skip(registry))]
#[get("/{id}/defaults")]
pub async fn defaults_handler(
    path: web::Path<(String,)>,
    registry: web::Data<&'static QuestionTypeRegistry>,
) -> Result<impl Responder> {
    let id = path.into_inner().0;
    let settings = registry.default_settings_for(&id).ok_or_else(|| {
        JsonResponse::<serde_json::Value>::build().not_found("Question type not found")
    })?;

    Ok(JsonResponse::build().set_item(settings).ok("OK"))
}

#[tracing::instrument(name = "Validate question.", skip(registry))]
#[post("/validate")]
pub async fn validate_handler(
    question: web::Json<QuestionInstance>,
    registry: web::Data<&'static QuestionTypeRegistry>,
) -> Result<impl Responder> {
    let errors = registry.validate(&question);
    let preview = registry.preview(&question);
    if !errors.is_empty() {
        tracing::debug!(errors = ?errors, "Question did not validate");
    }

    Ok(JsonResponse::build()
        .set_item(views::question_type::QuestionCheck::new(errors, preview))
        .ok("OK"))
}
