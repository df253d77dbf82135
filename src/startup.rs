use crate::health::HealthChecker;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::{PlanCatalog, QuestionTypeRegistry};
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let catalog = PlanCatalog::builtin();
    let registry = QuestionTypeRegistry::builtin();

    let health_checker = web::Data::new(HealthChecker::new(catalog, registry));
    let catalog = web::Data::new(catalog);
    let registry = web::Data::new(registry);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        JsonResponse::<()>::build().bad_request(&err.to_string())
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        JsonResponse::<()>::build().bad_request(&err.to_string())
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(health_checker.clone())
            .app_data(catalog.clone())
            .app_data(registry.clone())
            .service(
                web::scope("/health_check")
                    .service(routes::health_check)
                    .service(routes::health_status),
            )
            .service(
                web::scope("/plans")
                    .service(routes::plan::list_handler)
                    .service(routes::plan::item_handler),
            )
            .service(
                web::scope("/entitlements")
                    .service(routes::entitlement::summary_handler)
                    .service(routes::entitlement::feature_handler)
                    .service(routes::entitlement::limit_handler)
                    .service(routes::entitlement::plan_gate_handler)
                    .service(routes::entitlement::survey_handler),
            )
            .service(
                web::scope("/question_types")
                    .service(routes::question_type::list_handler)
                    .service(routes::question_type::validate_handler)
                    .service(routes::question_type::defaults_handler)
                    .service(routes::question_type::item_handler),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
