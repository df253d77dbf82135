mod common;

use serde_json::Value;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app().await;

    let response = app.get_as("/health_check", None, None).await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn health_status_reports_rule_tables() {
    let app = common::spawn_app().await;

    let response = app.get_as("/health_check/status", None, None).await;
    assert_eq!(response.status().as_u16(), 200);

    let report = response.json::<Value>().await.unwrap();
    assert_eq!(report["status"], "healthy");
    assert_eq!(report["components"]["plan_catalog"]["status"], "healthy");
    assert_eq!(report["components"]["question_types"]["details"]["types"], 27);
}
