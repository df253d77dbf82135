use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::{Feature, LimitType, Plan, Quota, SurveyPolicy};

/// Quotas and enabled features of one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanDefinition {
    pub surveys: Quota,
    pub responses_per_survey: Quota,
    pub team_members: Quota,
    pub features: BTreeSet<Feature>,
    pub survey_policy: SurveyPolicy,
}

impl PlanDefinition {
    pub fn quota(&self, limit: LimitType) -> Quota {
        match limit {
            LimitType::Surveys => self.surveys,
            LimitType::ResponsesPerSurvey => self.responses_per_survey,
            LimitType::TeamMembers => self.team_members,
        }
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

/// Static plan → limits/features table.
///
/// Every plan lists its features explicitly. Higher plans re-list what lower
/// plans include; nothing is inherited. [`PlanCatalog::monotonicity_violations`]
/// reports lists that have drifted apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    free: PlanDefinition,
    pro: PlanDefinition,
    enterprise: PlanDefinition,
}

lazy_static! {
    static ref BUILTIN: PlanCatalog = PlanCatalog::new(
        PlanDefinition {
            surveys: Quota::Limited(5),
            responses_per_survey: Quota::Limited(100),
            team_members: Quota::Limited(1),
            features: BTreeSet::from([
                Feature::BasicSurveyCreation,
                Feature::BasicAnalytics,
                Feature::StandardTemplates,
                Feature::BasicExport,
            ]),
            survey_policy: SurveyPolicy::default(),
        },
        PlanDefinition {
            surveys: Quota::Unlimited,
            responses_per_survey: Quota::Limited(10_000),
            team_members: Quota::Limited(10),
            features: BTreeSet::from([
                Feature::BasicSurveyCreation,
                Feature::AdvancedSurveyCreation,
                Feature::BasicAnalytics,
                Feature::AdvancedAnalytics,
                Feature::AdvancedReports,
                Feature::StandardTemplates,
                Feature::PremiumTemplates,
                Feature::CustomBranding,
                Feature::TeamCollaboration,
                Feature::ApiAccess,
                Feature::BasicExport,
                Feature::AdvancedExport,
                Feature::EmailNotifications,
                Feature::CustomDomains,
                Feature::PrioritySupport,
            ]),
            survey_policy: SurveyPolicy::unrestricted(),
        },
        PlanDefinition {
            surveys: Quota::Unlimited,
            responses_per_survey: Quota::Unlimited,
            team_members: Quota::Unlimited,
            features: BTreeSet::from([
                Feature::BasicSurveyCreation,
                Feature::AdvancedSurveyCreation,
                Feature::BasicAnalytics,
                Feature::AdvancedAnalytics,
                Feature::AdvancedReports,
                Feature::RealTimeAnalytics,
                Feature::StandardTemplates,
                Feature::PremiumTemplates,
                Feature::CustomTemplates,
                Feature::CustomBranding,
                Feature::WhiteLabel,
                Feature::TeamCollaboration,
                Feature::AdvancedTeamManagement,
                Feature::ApiAccess,
                Feature::WebhookIntegration,
                Feature::BasicExport,
                Feature::AdvancedExport,
                Feature::BulkExport,
                Feature::EmailNotifications,
                Feature::SmsNotifications,
                Feature::CustomDomains,
                Feature::SsoIntegration,
                Feature::PrioritySupport,
                Feature::DedicatedSupport,
                Feature::CustomDevelopment,
                Feature::EnterpriseSecurity,
                Feature::AuditLogs,
                Feature::DataRetentionControl,
            ]),
            survey_policy: SurveyPolicy::unrestricted(),
        },
    );
}

impl PlanCatalog {
    pub fn new(free: PlanDefinition, pro: PlanDefinition, enterprise: PlanDefinition) -> Self {
        Self {
            free,
            pro,
            enterprise,
        }
    }

    /// The catalog the product ships with.
    pub fn builtin() -> &'static PlanCatalog {
        &BUILTIN
    }

    pub fn definition(&self, plan: Plan) -> &PlanDefinition {
        match plan {
            Plan::Free => &self.free,
            Plan::Pro => &self.pro,
            Plan::Enterprise => &self.enterprise,
        }
    }

    /// Parse a raw plan identifier. Unrecognized identifiers get the free plan,
    /// and the mismatch is logged since it means bad account data upstream.
    pub fn resolve(&self, raw_plan: &str) -> Plan {
        raw_plan.parse::<Plan>().unwrap_or_else(|err| {
            tracing::warn!(plan = %raw_plan, error = %err, "Unrecognized plan, using free plan definition");
            Plan::Free
        })
    }

    pub fn definition_for(&self, raw_plan: &str) -> &PlanDefinition {
        self.definition(self.resolve(raw_plan))
    }

    /// Plans with their definitions, lowest plan first.
    pub fn iter(&self) -> impl Iterator<Item = (Plan, &PlanDefinition)> {
        Plan::ASCENDING
            .into_iter()
            .map(move |plan| (plan, self.definition(plan)))
    }

    /// Lowest plan whose feature list contains `feature`. Features no plan
    /// lists are treated as requiring the highest plan.
    pub fn required_plan(&self, feature: Feature) -> Plan {
        self.iter()
            .find(|(_, definition)| definition.has(feature))
            .map(|(plan, _)| plan)
            .unwrap_or_else(Plan::highest)
    }

    /// Features a lower plan grants but a higher plan does not re-list,
    /// paired with the higher plan missing them.
    pub fn monotonicity_violations(&self) -> Vec<(Feature, Plan)> {
        let mut violations = vec![];
        for window in Plan::ASCENDING.windows(2) {
            let (lower, higher) = (window[0], window[1]);
            let missing = self
                .definition(lower)
                .features
                .difference(&self.definition(higher).features)
                .map(|feature| (*feature, higher));
            violations.extend(missing);
        }
        violations
    }
}
