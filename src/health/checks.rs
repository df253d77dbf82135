use super::models::{ComponentHealth, HealthCheckResponse};
use crate::models::QuestionKind;
use crate::services::{PlanCatalog, QuestionTypeRegistry};
use serde_json::json;
use std::time::Instant;

/// Integrity report over the static rule tables.
pub struct HealthChecker {
    catalog: &'static PlanCatalog,
    registry: &'static QuestionTypeRegistry,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(catalog: &'static PlanCatalog, registry: &'static QuestionTypeRegistry) -> Self {
        Self {
            catalog,
            registry,
            start_time: Instant::now(),
        }
    }

    #[tracing::instrument(name = "Check rule tables health", skip(self))]
    pub fn check_all(&self) -> HealthCheckResponse {
        let mut response = HealthCheckResponse::new(self.start_time.elapsed().as_secs());
        response.add_component("plan_catalog", self.check_plan_catalog());
        response.add_component("question_types", self.check_question_types());

        if !response.is_healthy() {
            tracing::warn!(status = ?response.status, "Rule tables are not healthy");
        }
        response
    }

    fn check_plan_catalog(&self) -> ComponentHealth {
        let violations = self.catalog.monotonicity_violations();
        if violations.is_empty() {
            return ComponentHealth::healthy().detail("plans", self.catalog.iter().count());
        }

        let listed = violations
            .iter()
            .map(|(feature, plan)| format!("{feature} missing on {plan}"))
            .collect::<Vec<_>>();
        ComponentHealth::degraded("Higher plan lacks a lower plan feature".to_string())
            .detail("violations", json!(listed))
    }

    fn check_question_types(&self) -> ComponentHealth {
        let missing = QuestionKind::ALL
            .iter()
            .filter(|kind| self.registry.get_kind(**kind).is_none())
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>();

        if missing.is_empty() {
            ComponentHealth::healthy().detail("types", self.registry.len())
        } else {
            ComponentHealth::unhealthy("Question types are not registered".to_string())
                .detail("missing", json!(missing))
        }
    }
}
