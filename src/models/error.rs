use thiserror::Error;

/// Failures to parse one of the closed vocabularies the entitlement core works with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown plan '{0}'")]
    UnknownPlan(String),

    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("unknown limit type '{0}'")]
    UnknownLimitType(String),

    #[error("unknown question category '{0}'")]
    UnknownCategory(String),

    #[error("unknown question type '{0}'")]
    UnknownQuestionType(String),

    #[error("invalid quota {0}: only -1 (unlimited) or a non-negative count is allowed")]
    InvalidQuota(i64),
}
