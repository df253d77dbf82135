pub mod entitlement;
pub mod plan;
pub mod question_type;

pub use plan::PlanView;
