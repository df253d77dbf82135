use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// Gated capability a plan may enable.
///
/// Identifiers are matched exactly: there is no prefix or case folding, so
/// `"advanced_analytics"` and `"Advanced_Analytics"` are different strings and
/// the latter is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    BasicSurveyCreation,
    AdvancedSurveyCreation,
    BasicAnalytics,
    AdvancedAnalytics,
    AdvancedReports,
    RealTimeAnalytics,
    StandardTemplates,
    PremiumTemplates,
    CustomTemplates,
    CustomBranding,
    WhiteLabel,
    TeamCollaboration,
    AdvancedTeamManagement,
    ApiAccess,
    WebhookIntegration,
    BasicExport,
    AdvancedExport,
    BulkExport,
    EmailNotifications,
    SmsNotifications,
    CustomDomains,
    SsoIntegration,
    PrioritySupport,
    DedicatedSupport,
    CustomDevelopment,
    EnterpriseSecurity,
    AuditLogs,
    DataRetentionControl,
}

impl Feature {
    pub const ALL: [Feature; 28] = [
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
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::BasicSurveyCreation => "basic_survey_creation",
            Feature::AdvancedSurveyCreation => "advanced_survey_creation",
            Feature::BasicAnalytics => "basic_analytics",
            Feature::AdvancedAnalytics => "advanced_analytics",
            Feature::AdvancedReports => "advanced_reports",
            Feature::RealTimeAnalytics => "real_time_analytics",
            Feature::StandardTemplates => "standard_templates",
            Feature::PremiumTemplates => "premium_templates",
            Feature::CustomTemplates => "custom_templates",
            Feature::CustomBranding => "custom_branding",
            Feature::WhiteLabel => "white_label",
            Feature::TeamCollaboration => "team_collaboration",
            Feature::AdvancedTeamManagement => "advanced_team_management",
            Feature::ApiAccess => "api_access",
            Feature::WebhookIntegration => "webhook_integration",
            Feature::BasicExport => "basic_export",
            Feature::AdvancedExport => "advanced_export",
            Feature::BulkExport => "bulk_export",
            Feature::EmailNotifications => "email_notifications",
            Feature::SmsNotifications => "sms_notifications",
            Feature::CustomDomains => "custom_domains",
            Feature::SsoIntegration => "sso_integration",
            Feature::PrioritySupport => "priority_support",
            Feature::DedicatedSupport => "dedicated_support",
            Feature::CustomDevelopment => "custom_development",
            Feature::EnterpriseSecurity => "enterprise_security",
            Feature::AuditLogs => "audit_logs",
            Feature::DataRetentionControl => "data_retention_control",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| ModelError::UnknownFeature(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_round_trip_through_their_string_form() {
        for feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>(), Ok(feature));
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.as_str()));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let names: HashSet<_> = Feature::ALL.iter().map(Feature::as_str).collect();
        assert_eq!(names.len(), Feature::ALL.len());
    }

    #[test]
    fn lookup_is_exact() {
        assert!("advanced".parse::<Feature>().is_err());
        assert!("advanced_analytics_v2".parse::<Feature>().is_err());
        assert!("Advanced_Analytics".parse::<Feature>().is_err());
    }
}
