use crate::models::{Feature, Plan, Quota, SurveyPolicy};
use crate::services::PlanDefinition;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlanView {
    pub plan: Plan,
    pub name: &'static str,
    pub surveys: Quota,
    pub responses_per_survey: Quota,
    pub team_members: Quota,
    pub features: Vec<Feature>,
    pub survey_policy: SurveyPolicy,
}

impl From<(Plan, &PlanDefinition)> for PlanView {
    fn from((plan, definition): (Plan, &PlanDefinition)) -> Self {
        Self {
            plan,
            name: plan.display_name(),
            surveys: definition.surveys,
            responses_per_survey: definition.responses_per_survey,
            team_members: definition.team_members,
            features: definition.features.iter().copied().collect(),
            survey_policy: definition.survey_policy,
        }
    }
}
