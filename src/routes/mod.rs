pub mod entitlement;
pub mod health_checks;
pub mod plan;
pub mod question_type;

pub use health_checks::*;
