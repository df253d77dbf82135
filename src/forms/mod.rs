pub mod entitlement;
pub mod question_type;

pub use entitlement::*;
pub use question_type::*;
