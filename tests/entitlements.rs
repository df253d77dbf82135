mod common;

#[tokio::test]
async fn missing_headers_mean_free_user() {
    let app = common::spawn_app().await;

    let (status, body) = app.get_json("/entitlements/summary", None, None).await;
    assert_eq!(status, 200);

    let summary = &body["item"];
    assert_eq!(summary["plan"], "free");
    assert_eq!(summary["plan_name"], "Free");
    assert_eq!(summary["role"], "user");
    assert_eq!(summary["is_free_plan"], true);
    assert_eq!(summary["is_paid_plan"], false);
    assert_eq!(summary["limits"]["surveys"], 5);
}

#[tokio::test]
async fn free_plan_needs_upgrade_for_advanced_analytics() {
    let app = common::spawn_app().await;

    let (status, body) = app
        .get_json("/entitlements/features/advanced_analytics", Some("free"), None)
        .await;
    assert_eq!(status, 200);

    let feature = &body["item"];
    assert_eq!(feature["has_access"], false);
    assert_eq!(feature["current_plan"], "free");
    assert_eq!(feature["required_plan"], "pro");
    assert_eq!(feature["needs_upgrade"], true);
    assert_eq!(feature["upgrade_message"], "This feature requires pro plan");
}

#[tokio::test]
async fn pro_plan_has_advanced_analytics() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json("/entitlements/features/advanced_analytics", Some("pro"), None)
        .await;
    assert_eq!(body["item"]["has_access"], true);
    assert!(body["item"]["upgrade_message"].is_null());
}

#[tokio::test]
async fn unknown_feature_is_denied_even_for_super_admin() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json(
            "/entitlements/features/time_travel",
            Some("enterprise"),
            Some("super_admin"),
        )
        .await;
    assert_eq!(body["item"]["has_access"], false);
    assert_eq!(body["item"]["required_plan"], "enterprise");
}

#[tokio::test]
async fn survey_quota_is_enforced() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json("/entitlements/limits/surveys?current_usage=4", Some("free"), None)
        .await;
    assert_eq!(body["item"]["allowed"], true);

    let (_, body) = app
        .get_json("/entitlements/limits/surveys?current_usage=5", Some("free"), None)
        .await;
    assert_eq!(body["item"]["allowed"], false);
}

#[tokio::test]
async fn enterprise_team_members_are_unlimited() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json(
            "/entitlements/limits/team_members?current_usage=500",
            Some("enterprise"),
            None,
        )
        .await;
    assert_eq!(body["item"]["limit_type"], "team_members");
    assert_eq!(body["item"]["allowed"], true);
}

#[tokio::test]
async fn negative_usage_is_a_form_error() {
    let app = common::spawn_app().await;

    let (status, body) = app
        .get_json("/entitlements/limits/surveys?current_usage=-1", None, None)
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["status"], "Error");
}

#[tokio::test]
async fn malformed_usage_is_a_json_error() {
    let app = common::spawn_app().await;

    let response = app
        .get_as("/entitlements/limits/surveys?current_usage=abc", None, None)
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("invalid digit"));
}

#[tokio::test]
async fn capitalized_plan_header_is_not_recognized() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json("/entitlements/features/advanced_analytics", Some("Pro"), None)
        .await;
    assert_eq!(body["item"]["current_plan"], "free");
    assert_eq!(body["item"]["has_access"], false);
}

#[tokio::test]
async fn unknown_limit_type_is_not_found() {
    let app = common::spawn_app().await;

    let (status, body) = app
        .get_json("/entitlements/limits/projects?current_usage=0", Some("enterprise"), None)
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn plan_gate_respects_order_and_super_admin() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json("/entitlements/plans/enterprise", Some("pro"), None)
        .await;
    assert_eq!(body["item"]["allowed"], false);

    let (_, body) = app
        .get_json("/entitlements/plans/enterprise", Some("free"), Some("super_admin"))
        .await;
    assert_eq!(body["item"]["allowed"], true);

    let (status, _) = app.get_json("/entitlements/plans/gold", None, None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn published_surveys_are_locked_on_free() {
    let app = common::spawn_app().await;

    let (_, body) = app
        .get_json("/entitlements/surveys?status=published", Some("free"), None)
        .await;
    assert_eq!(body["item"]["can_edit"], false);
    assert_eq!(body["item"]["can_delete"], false);
    assert_eq!(body["item"]["can_export"], false);

    let (_, body) = app
        .get_json("/entitlements/surveys?status=draft", Some("free"), None)
        .await;
    assert_eq!(body["item"]["can_edit"], true);
    assert_eq!(body["item"]["can_delete"], true);

    let (_, body) = app
        .get_json("/entitlements/surveys?status=published", Some("pro"), None)
        .await;
    assert_eq!(body["item"]["can_edit"], true);
    assert_eq!(body["item"]["can_export"], true);
}

#[tokio::test]
async fn super_admin_header_overrides_role() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .get(format!("{}/entitlements/features/white_label", app.address))
        .header("x-user-plan", "free")
        .header("x-super-admin", "true")
        .send()
        .await
        .unwrap();
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["item"]["has_access"], true);
}
