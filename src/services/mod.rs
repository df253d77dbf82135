pub mod entitlement;
pub mod plan_catalog;
pub mod question_registry;

pub use entitlement::{EntitlementResolver, FeatureStatus, PlanLimits, SurveyPermissions};
pub use plan_catalog::{PlanCatalog, PlanDefinition};
pub use question_registry::QuestionTypeRegistry;
