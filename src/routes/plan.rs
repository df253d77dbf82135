use crate::helpers::JsonResponse;
use crate::services::PlanCatalog;
use crate::views;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "List plans.", skip(catalog))]
#[get("")]
pub async fn list_handler(catalog: web::Data<&'static PlanCatalog>) -> Result<impl Responder> {
    let plans = catalog
        .iter()
        .map(Into::into)
        .collect::<Vec<views::PlanView>>();

    Ok(JsonResponse::build().set_list(plans).ok("OK"))
}

/// Unknown plan names answer with the free plan, the same fallback the
/// entitlement checks apply.
#[tracing::instrument(name = "Get plan.", skip(catalog))]
#[get("/{plan}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    catalog: web::Data<&'static PlanCatalog>,
) -> Result<impl Responder> {
    let raw_plan = path.into_inner().0;
    let plan = catalog.resolve(&raw_plan);
    let view = views::PlanView::from((plan, catalog.definition(plan)));

    Ok(JsonResponse::build().set_item(view).ok("OK"))
}
