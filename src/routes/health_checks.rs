use crate::health::HealthChecker;
use actix_web::{get, web, HttpResponse};

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[get("/status")]
pub async fn health_status(checker: web::Data<HealthChecker>) -> HttpResponse {
    let report = checker.check_all();
    if report.is_healthy() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
