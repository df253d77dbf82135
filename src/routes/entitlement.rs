use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{LimitType, Plan, UserProfile};
use crate::services::{EntitlementResolver, FeatureStatus, PlanCatalog, SurveyPermissions};
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde_valid::Validate;

fn resolver(
    catalog: &web::Data<&'static PlanCatalog>,
    profile: &UserProfile,
) -> EntitlementResolver<'static> {
    EntitlementResolver::new(*catalog.get_ref(), profile.context())
}

#[tracing::instrument(name = "Entitlement summary.", skip(catalog))]
#[get("/summary")]
pub async fn summary_handler(
    profile: UserProfile,
    catalog: web::Data<&'static PlanCatalog>,
) -> Result<impl Responder> {
    let resolver = resolver(&catalog, &profile);
    let summary = views::entitlement::Summary::from(&resolver);

    Ok(JsonResponse::build().set_item(summary).ok("OK"))
}

#[tracing::instrument(name = "Check feature access.", skip(catalog))]
#[get("/features/{feature}")]
pub async fn feature_handler(
    path: web::Path<(String,)>,
    profile: UserProfile,
    catalog: web::Data<&'static PlanCatalog>,
) -> Result<impl Responder> {
    let feature = path.into_inner().0;
    let status = resolver(&catalog, &profile).feature_status(&feature);

    Ok(JsonResponse::<FeatureStatus>::build().set_item(status).ok("OK"))
}

#[tracing::instrument(name = "Check usage limit.", skip(catalog))]
#[get("/limits/{limit_type}")]
pub async fn limit_handler(
    path: web::Path<(String,)>,
    query: web::Query<forms::LimitQuery>,
    profile: UserProfile,
    catalog: web::Data<&'static PlanCatalog>,
) -> Result<impl Responder> {
    if let Err(errors) = query.validate() {
        return Err(JsonResponse::<views::entitlement::LimitCheck>::build()
            .form_error(errors.to_string()));
    }

    let raw_limit = path.into_inner().0;
    let limit_type = raw_limit.parse::<LimitType>().map_err(|err| {
        tracing::warn!(limit_type = %raw_limit, "Denying unrecognized limit type");
        JsonResponse::<views::entitlement::LimitCheck>::build().not_found(&err.to_string())
    })?;

    let current_usage = query.usage();
    let check = views::entitlement::LimitCheck {
        limit_type,
        current_usage,
        allowed: resolver(&catalog, &profile).within_limit(limit_type, current_usage),
    };

    Ok(JsonResponse::build().set_item(check).ok("OK"))
}

#[tracing::instrument(name = "Check plan gate.", skip(catalog))]
#[get("/plans/{plan}")]
pub async fn plan_gate_handler(
    path: web::Path<(String,)>,
    profile: UserProfile,
    catalog: web::Data<&'static PlanCatalog>,
) -> Result<impl Responder> {
    let required_plan = path
        .into_inner()
        .0
        .parse::<Plan>()
        .map_err(|err| {
            JsonResponse::<views::entitlement::PlanGate>::build().not_found(&err.to_string())
        })?;

    let resolver = resolver(&catalog, &profile);
    let gate = views::entitlement::PlanGate {
        current_plan: resolver.current_plan(),
        required_plan,
        allowed: resolver.has_required_plan(required_plan),
    };

    Ok(JsonResponse::build().set_item(gate).ok("OK"))
}

#[tracing::instrument(name = "Survey permissions.", skip(catalog))]
#[get("/surveys")]
pub async fn survey_handler(
    query: web::Query<forms::SurveyQuery>,
    profile: UserProfile,
    catalog: web::Data<&'static PlanCatalog>,
) -> Result<impl Responder> {
    let permissions = resolver(&catalog, &profile).survey_permissions(query.status);

    Ok(JsonResponse::<SurveyPermissions>::build().set_item(permissions).ok("OK"))
}
