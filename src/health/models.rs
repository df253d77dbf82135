use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub last_checked: DateTime<Utc>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, Value>,
}

impl ComponentHealth {
    fn with_status(status: ComponentStatus, message: Option<String>) -> Self {
        Self {
            status,
            message,
            last_checked: Utc::now(),
            details: BTreeMap::new(),
        }
    }

    pub fn healthy() -> Self {
        Self::with_status(ComponentStatus::Healthy, None)
    }

    pub fn degraded(message: String) -> Self {
        Self::with_status(ComponentStatus::Degraded, Some(message))
    }

    pub fn unhealthy(message: String) -> Self {
        Self::with_status(ComponentStatus::Unhealthy, Some(message))
    }

    pub fn detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub components: BTreeMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds,
            components: BTreeMap::new(),
        }
    }

    /// Overall status is the worst status among components.
    pub fn add_component(&mut self, name: &str, health: ComponentHealth) {
        self.status = match (self.status, health.status) {
            (ComponentStatus::Unhealthy, _) | (_, ComponentStatus::Unhealthy) => {
                ComponentStatus::Unhealthy
            }
            (ComponentStatus::Degraded, _) | (_, ComponentStatus::Degraded) => {
                ComponentStatus::Degraded
            }
            _ => ComponentStatus::Healthy,
        };
        self.components.insert(name.to_string(), health);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ComponentStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_component_wins() {
        let mut response = HealthCheckResponse::new(0);
        response.add_component("a", ComponentHealth::healthy());
        assert!(response.is_healthy());

        response.add_component("b", ComponentHealth::degraded("slow".into()));
        assert_eq!(response.status, ComponentStatus::Degraded);

        response.add_component("c", ComponentHealth::unhealthy("broken".into()));
        response.add_component("d", ComponentHealth::healthy());
        assert_eq!(response.status, ComponentStatus::Unhealthy);
    }
}
