//! Plan entitlement resolver.
//!
//! Answers "may this caller do X" for features, quotas, plan gates and
//! survey actions. The caller context is passed in explicitly; nothing here
//! reads ambient state, so a resolver is cheap to build per request.

use serde::Serialize;

use super::plan_catalog::{PlanCatalog, PlanDefinition};
use crate::models::{
    EntitlementContext, Feature, LimitType, ModelError, Plan, Quota, SurveyStatus,
};

/// Result of a feature query, shaped for upgrade prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureStatus {
    pub has_access: bool,
    pub current_plan: Plan,
    pub required_plan: Plan,
    pub needs_upgrade: bool,
    pub upgrade_message: Option<String>,
}

/// Quotas of the caller's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanLimits {
    pub surveys: Quota,
    pub responses_per_survey: Quota,
    pub team_members: Quota,
    pub features: Vec<Feature>,
}

/// What the caller may do with one survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveyPermissions {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_export: bool,
}

pub struct EntitlementResolver<'a> {
    catalog: &'a PlanCatalog,
    context: EntitlementContext,
}

impl<'a> EntitlementResolver<'a> {
    pub fn new(catalog: &'a PlanCatalog, context: EntitlementContext) -> Self {
        Self { catalog, context }
    }

    pub fn context(&self) -> EntitlementContext {
        self.context
    }

    pub fn current_plan(&self) -> Plan {
        self.context.plan
    }

    fn definition(&self) -> &'a PlanDefinition {
        self.catalog.definition(self.context.plan)
    }

    /// Typed feature check.
    pub fn has(&self, feature: Feature) -> bool {
        self.context.is_privileged() || self.definition().has(feature)
    }

    /// Feature check by identifier. Unknown identifiers are denied for
    /// everyone, privileged callers included.
    pub fn has_feature(&self, feature_id: &str) -> bool {
        match feature_id.parse::<Feature>() {
            Ok(feature) => self.has(feature),
            Err(err) => {
                tracing::warn!(feature = %feature_id, error = %err, "Denying unrecognized feature");
                false
            }
        }
    }

    /// Lowest plan granting the feature; unknown identifiers require the
    /// highest plan.
    pub fn required_plan(&self, feature_id: &str) -> Plan {
        feature_id
            .parse::<Feature>()
            .map(|feature| self.catalog.required_plan(feature))
            .unwrap_or_else(|_| Plan::highest())
    }

    pub fn feature_status(&self, feature_id: &str) -> FeatureStatus {
        let has_access = self.has_feature(feature_id);
        let required_plan = self.required_plan(feature_id);

        FeatureStatus {
            has_access,
            current_plan: self.context.plan,
            required_plan,
            needs_upgrade: !has_access,
            upgrade_message: (!has_access)
                .then(|| format!("This feature requires {} plan", required_plan)),
        }
    }

    /// Quota of the caller's plan for a limit type.
    pub fn limit(&self, limit: LimitType) -> Quota {
        self.definition().quota(limit)
    }

    /// Typed quota check: unlimited passes, otherwise usage must stay below the quota.
    pub fn within_limit(&self, limit: LimitType, current_usage: u64) -> bool {
        self.context.is_privileged() || self.limit(limit).allows(current_usage)
    }

    /// Quota check by limit name. Unknown names are denied.
    pub fn check_limit(&self, limit_type: &str, current_usage: u64) -> bool {
        match limit_type.parse::<LimitType>() {
            Ok(limit) => self.within_limit(limit, current_usage),
            Err(err) => {
                tracing::warn!(limit_type = %limit_type, error = %err, "Denying unrecognized limit type");
                false
            }
        }
    }

    /// Parse-or-fail variant for callers that want to surface the bad name.
    pub fn try_check_limit(&self, limit_type: &str, current_usage: u64) -> Result<bool, ModelError> {
        let limit = limit_type.parse::<LimitType>()?;
        Ok(self.within_limit(limit, current_usage))
    }

    pub fn can_create_survey(&self, current_count: u64) -> bool {
        self.within_limit(LimitType::Surveys, current_count)
    }

    pub fn can_add_team_member(&self, current_count: u64) -> bool {
        self.within_limit(LimitType::TeamMembers, current_count)
    }

    pub fn can_receive_responses(&self, current_count: u64) -> bool {
        self.within_limit(LimitType::ResponsesPerSurvey, current_count)
    }

    pub fn plan_limits(&self) -> PlanLimits {
        let definition = self.definition();
        PlanLimits {
            surveys: definition.surveys,
            responses_per_survey: definition.responses_per_survey,
            team_members: definition.team_members,
            features: definition.features.iter().copied().collect(),
        }
    }

    pub fn plan_name(&self) -> &'static str {
        self.context.plan.display_name()
    }

    pub fn is_free_plan(&self) -> bool {
        self.context.plan == Plan::Free
    }

    pub fn is_pro_plan(&self) -> bool {
        self.context.plan == Plan::Pro
    }

    pub fn is_enterprise_plan(&self) -> bool {
        self.context.plan == Plan::Enterprise
    }

    pub fn is_paid_plan(&self) -> bool {
        !self.is_free_plan()
    }

    /// Gate for whole pages or routes that require a minimum plan.
    pub fn has_required_plan(&self, required: Plan) -> bool {
        self.context.satisfies(Some(required))
    }

    /// Drafts are always editable; live surveys only when the plan allows it.
    pub fn can_edit_survey(&self, status: SurveyStatus) -> bool {
        !status.is_published()
            || self.context.is_privileged()
            || self.definition().survey_policy.edit_published
    }

    pub fn can_delete_survey(&self, status: SurveyStatus) -> bool {
        !status.is_published()
            || self.context.is_privileged()
            || self.definition().survey_policy.delete_published
    }

    pub fn can_export(&self) -> bool {
        self.context.is_privileged() || self.definition().survey_policy.export
    }

    pub fn survey_permissions(&self, status: SurveyStatus) -> SurveyPermissions {
        SurveyPermissions {
            can_edit: self.can_edit_survey(status),
            can_delete: self.can_delete_survey(status),
            can_export: self.can_export(),
        }
    }
}
