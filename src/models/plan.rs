use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// Subscription tier. Variant order is the upgrade order: free < pro < enterprise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    /// All plans, lowest first.
    pub const ASCENDING: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }

    /// Human readable name, e.g. "Pro".
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        }
    }

    pub fn highest() -> Plan {
        Plan::Enterprise
    }

    /// True when this plan includes at least what `required` includes.
    pub fn at_least(&self, required: Plan) -> bool {
        *self >= required
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Plan::Free),
            "pro" => Ok(Plan::Pro),
            "enterprise" => Ok(Plan::Enterprise),
            _ => Err(ModelError::UnknownPlan(s.to_string())),
        }
    }
}

/// Usage ceiling of a plan. Serialized as an integer where `-1` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Quota {
    Limited(u64),
    Unlimited,
}

impl Quota {
    pub const UNLIMITED_SENTINEL: i64 = -1;

    /// Whether one more action may be performed at the given usage.
    pub fn allows(&self, current_usage: u64) -> bool {
        match self {
            Quota::Unlimited => true,
            Quota::Limited(limit) => current_usage < *limit,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Quota::Unlimited)
    }
}

impl TryFrom<i64> for Quota {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            Quota::UNLIMITED_SENTINEL => Ok(Quota::Unlimited),
            n if n >= 0 => Ok(Quota::Limited(n as u64)),
            n => Err(ModelError::InvalidQuota(n)),
        }
    }
}

impl From<Quota> for i64 {
    fn from(quota: Quota) -> Self {
        match quota {
            Quota::Unlimited => Quota::UNLIMITED_SENTINEL,
            Quota::Limited(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quota::Unlimited => f.write_str("unlimited"),
            Quota::Limited(n) => write!(f, "{}", n),
        }
    }
}

/// The quotas a plan carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitType {
    Surveys,
    ResponsesPerSurvey,
    TeamMembers,
}

impl LimitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitType::Surveys => "surveys",
            LimitType::ResponsesPerSurvey => "responses_per_survey",
            LimitType::TeamMembers => "team_members",
        }
    }
}

impl fmt::Display for LimitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "surveys" => Ok(LimitType::Surveys),
            "responses_per_survey" => Ok(LimitType::ResponsesPerSurvey),
            "team_members" => Ok(LimitType::TeamMembers),
            _ => Err(ModelError::UnknownLimitType(s.to_string())),
        }
    }
}
