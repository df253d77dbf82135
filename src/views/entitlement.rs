use crate::models::{LimitType, Plan, Role};
use crate::services::{EntitlementResolver, PlanLimits};
use serde::Serialize;

/// What the caller's plan allows, as shown on the billing page.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub plan: Plan,
    pub plan_name: &'static str,
    pub role: Role,
    pub is_free_plan: bool,
    pub is_pro_plan: bool,
    pub is_enterprise_plan: bool,
    pub is_paid_plan: bool,
    pub limits: PlanLimits,
}

impl From<&EntitlementResolver<'_>> for Summary {
    fn from(resolver: &EntitlementResolver<'_>) -> Self {
        Self {
            plan: resolver.current_plan(),
            plan_name: resolver.plan_name(),
            role: resolver.context().role,
            is_free_plan: resolver.is_free_plan(),
            is_pro_plan: resolver.is_pro_plan(),
            is_enterprise_plan: resolver.is_enterprise_plan(),
            is_paid_plan: resolver.is_paid_plan(),
            limits: resolver.plan_limits(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LimitCheck {
    pub limit_type: LimitType,
    pub current_usage: u64,
    pub allowed: bool,
}

#[derive(Debug, Serialize)]
pub struct PlanGate {
    pub current_plan: Plan,
    pub required_plan: Plan,
    pub allowed: bool,
}
