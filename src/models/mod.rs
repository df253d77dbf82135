mod error;
mod feature;
mod plan;
mod profile;
pub mod question;
pub mod question_type;
mod survey;

pub use error::*;
pub use feature::*;
pub use plan::*;
pub use profile::*;
pub use question::*;
pub use question_type::*;
pub use survey::*;
